use crate::model::{Movie, TermWeights};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Index-level metadata, stored as human-readable JSON next to the
/// binary artifacts.
#[derive(Debug, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_movies: u32,
    pub created_at: String,
    pub version: u32,
}

pub struct IndexPaths {
    pub root: PathBuf,
}

impl IndexPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn movies(&self) -> PathBuf { self.root.join("movies.bin") }
    fn vectors(&self) -> PathBuf { self.root.join("vectors.bin") }
    fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

pub fn save_movies(paths: &IndexPaths, movies: &[Movie]) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.movies())?;
    let bytes = bincode::serialize(movies)?;
    f.write_all(&bytes)?;
    Ok(())
}

pub fn load_movies(paths: &IndexPaths) -> Result<Vec<Movie>> {
    let mut f = File::open(paths.movies())?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    let movies = bincode::deserialize(&buf)?;
    Ok(movies)
}

pub fn save_vectors(paths: &IndexPaths, vectors: &[TermWeights]) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.vectors())?;
    let bytes = bincode::serialize(vectors)?;
    f.write_all(&bytes)?;
    Ok(())
}

pub fn load_vectors(paths: &IndexPaths) -> Result<Vec<TermWeights>> {
    let mut f = File::open(paths.vectors())?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    let vectors = bincode::deserialize(&buf)?;
    Ok(vectors)
}

pub fn save_meta(paths: &IndexPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.meta())?;
    let json = serde_json::to_string_pretty(meta)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_meta(paths: &IndexPaths) -> Result<MetaFile> {
    let mut f = File::open(paths.meta())?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    let meta: MetaFile = serde_json::from_str(&buf)?;
    Ok(meta)
}

/// Load everything ranking needs. The vector list must line up with the
/// movie list one-to-one; a count mismatch means the index directory is
/// stale or mixed from two builds.
pub fn load_index(paths: &IndexPaths) -> Result<(Vec<Movie>, Vec<TermWeights>, MetaFile)> {
    let movies = load_movies(paths)?;
    let vectors = load_vectors(paths)?;
    let meta = load_meta(paths)?;
    if movies.len() != vectors.len() {
        bail!(
            "index mismatch: {} movies but {} tf-idf vectors in {}",
            movies.len(),
            vectors.len(),
            paths.root.display()
        );
    }
    tracing::debug!(num_movies = movies.len(), "loaded index");
    Ok((movies, vectors, meta))
}
