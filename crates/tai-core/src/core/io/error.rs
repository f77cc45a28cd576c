use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Table parsing error for '{path}': {source}", path = path.display())]
    Csv { path: PathBuf, source: csv::Error },
    #[error("FASTA parsing error for '{path}': {source}", path = path.display())]
    Fasta {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Required column '{column}' not found in '{path}'", path = path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Table writing error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Nothing to write: {0}")]
    EmptyResult(&'static str),
}
