use crate::core::genetic_code::{GeneticCode, STANDARD_TABLE_ID};
use crate::core::wobble::EfficiencyPreset;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Unknown genetic code table id: {0}")]
    UnknownGeneticCode(u8),
    #[error("Sample label '{0}' is used more than once")]
    DuplicateLabel(String),
}

pub const DEFAULT_UPSTREAM_CODONS: usize = 50;
pub const DEFAULT_DOWNSTREAM_CODONS: usize = 50;

/// Half-widths, in codons, of the windows cut around the start and stop codons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub upstream: usize,
    pub downstream: usize,
}

impl WindowConfig {
    pub fn width(&self) -> usize {
        self.upstream + self.downstream + 1
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            upstream: DEFAULT_UPSTREAM_CODONS,
            downstream: DEFAULT_DOWNSTREAM_CODONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleInput {
    pub label: String,
    pub fasta_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaiConfig {
    pub trna_table_path: PathBuf,
    pub genetic_code: GeneticCode,
    pub efficiencies: EfficiencyPreset,
    pub window: WindowConfig,
    pub samples: Vec<SampleInput>,
}

#[derive(Default)]
pub struct TaiConfigBuilder {
    trna_table_path: Option<PathBuf>,
    genetic_code: Option<u8>,
    efficiencies: Option<EfficiencyPreset>,
    window: Option<WindowConfig>,
    samples: Vec<SampleInput>,
}

impl TaiConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trna_table_path(mut self, path: PathBuf) -> Self {
        self.trna_table_path = Some(path);
        self
    }
    pub fn genetic_code(mut self, id: u8) -> Self {
        self.genetic_code = Some(id);
        self
    }
    pub fn efficiencies(mut self, preset: EfficiencyPreset) -> Self {
        self.efficiencies = Some(preset);
        self
    }
    pub fn window(mut self, window: WindowConfig) -> Self {
        self.window = Some(window);
        self
    }
    pub fn sample(mut self, label: impl Into<String>, fasta_path: PathBuf) -> Self {
        self.samples.push(SampleInput {
            label: label.into(),
            fasta_path,
        });
        self
    }

    pub fn build(self) -> Result<TaiConfig, ConfigError> {
        let genetic_code_id = self.genetic_code.unwrap_or(STANDARD_TABLE_ID);
        let genetic_code = GeneticCode::from_id(genetic_code_id)
            .ok_or(ConfigError::UnknownGeneticCode(genetic_code_id))?;

        let mut seen = HashSet::new();
        for sample in &self.samples {
            if !seen.insert(sample.label.as_str()) {
                return Err(ConfigError::DuplicateLabel(sample.label.clone()));
            }
        }

        Ok(TaiConfig {
            trna_table_path: self
                .trna_table_path
                .ok_or(ConfigError::MissingParameter("trna_table_path"))?,
            genetic_code,
            efficiencies: self.efficiencies.unwrap_or_default(),
            window: self.window.unwrap_or_default(),
            samples: self.samples,
        })
    }
}
