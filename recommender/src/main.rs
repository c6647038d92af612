use anyhow::Result;
use clap::Parser;
use recommender::recommend;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "recommender")]
#[command(about = "Recommend movies from a TF-IDF index", long_about = None)]
struct Args {
    /// Index directory produced by the indexer
    #[arg(long, default_value = "./index")]
    index: String,
    /// Query text; prompts on stdin when omitted
    #[arg(long)]
    query: Option<String>,
    /// Number of recommendations to print
    #[arg(long, default_value_t = 3)]
    top_n: usize,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let query = match args.query {
        Some(q) => q,
        None => prompt_for_query()?,
    };

    let recommendations = recommend(&args.index, &query, args.top_n)?;
    println!("Here are my top {} recommendations for you:", recommendations.len());
    println!();
    for rec in recommendations {
        println!("Movie Title: {} ({})", rec.title, rec.release_year);
        println!("IMDB Rating: {}", rec.rating);
        println!("TF-IDF Similarity Score: {}", rec.score);
        println!();
    }
    Ok(())
}

fn prompt_for_query() -> Result<String> {
    println!("What kind of movies would you like me to find?");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end().to_string())
}
