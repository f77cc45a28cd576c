use thiserror::Error;

use super::adaptiveness::AdaptivenessError;
use super::config::ConfigError;
use super::scoring::ScoringError;
use crate::core::io::error::{ReadError, WriteError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("Codon weight computation failed: {0}")]
    Adaptiveness(#[from] AdaptivenessError),

    #[error("Scoring transcript '{transcript}' of sample '{sample}' failed: {source}")]
    Scoring {
        sample: String,
        transcript: String,
        #[source]
        source: ScoringError,
    },
}
