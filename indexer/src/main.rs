use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use core::persist::{save_meta, save_movies, save_vectors, IndexPaths, MetaFile};
use core::{build_idf, build_tfidf_vectors, Movie};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build TF-IDF vectors for a movie dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the recommendation index from a movie CSV dataset
    Build {
        /// Input CSV with title, year, genre, plot, imdb_rating columns
        #[arg(long)]
        input: PathBuf,
        /// Output index directory
        #[arg(long)]
        output: PathBuf,
        /// Maximum number of dataset rows to scan
        #[arg(long, default_value_t = 500)]
        max_movies: usize,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { input, output, max_movies } => {
            build_index(&input, &output, max_movies)
        }
    }
}

fn build_index(input: &Path, output: &Path, max_movies: usize) -> Result<()> {
    let movies = ingest_movies(input, max_movies)?;
    let idf = build_idf(&movies)?;
    let vectors = build_tfidf_vectors(&movies, &idf);
    tracing::info!(
        num_movies = movies.len(),
        vocabulary = idf.len(),
        "computed tf-idf vectors"
    );

    let paths = IndexPaths::new(output);
    save_movies(&paths, &movies)?;
    save_vectors(&paths, &vectors)?;
    let meta = MetaFile {
        num_movies: movies.len() as u32,
        created_at: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_else(|_| "".into()),
        version: 1,
    };
    save_meta(&paths, &meta)?;

    tracing::info!(output = %output.display(), "index build complete");
    Ok(())
}

/// Read at most `max_movies` dataset rows, keeping only movies with a
/// plot summary. Source datasets ship as latin-1, so fields are decoded
/// lossily instead of assumed to be UTF-8.
fn ingest_movies(input: &Path, max_movies: usize) -> Result<Vec<Movie>> {
    let mut reader = csv::Reader::from_path(input)
        .with_context(|| format!("open dataset {}", input.display()))?;
    let headers = reader.byte_headers()?.clone();
    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name.as_bytes())
            .with_context(|| format!("dataset is missing column `{name}`"))
    };
    let title_col = column("title")?;
    let year_col = column("year")?;
    let genre_col = column("genre")?;
    let plot_col = column("plot")?;
    let rating_col = column("imdb_rating")?;

    let mut movies = Vec::new();
    for record in reader.byte_records().take(max_movies) {
        let record = record?;
        let field = |idx: usize| -> String {
            String::from_utf8_lossy(record.get(idx).unwrap_or_default()).into_owned()
        };
        // Only keep movies with plot summaries.
        let plot = field(plot_col);
        if plot.is_empty() || plot == " " {
            continue;
        }
        let title = field(title_col);
        match Movie::new(&title, &field(year_col), &field(genre_col), &plot, &field(rating_col)) {
            Ok(movie) => movies.push(movie),
            Err(err) => tracing::warn!(%err, title, "skipping movie"),
        }
    }
    tracing::info!(num_movies = movies.len(), "ingested movies");
    Ok(movies)
}
