use trna_tai::core::genetic_code::STANDARD_TABLE_ID;
use trna_tai::core::wobble::EfficiencyPreset;
use trna_tai::engine::config::{DEFAULT_DOWNSTREAM_CODONS, DEFAULT_UPSTREAM_CODONS};

pub struct DefaultsConfig {
    pub upstream: usize,
    pub downstream: usize,
    pub genetic_code: u8,
    pub efficiencies: EfficiencyPreset,
    pub output_prefix: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            upstream: DEFAULT_UPSTREAM_CODONS,
            downstream: DEFAULT_DOWNSTREAM_CODONS,
            genetic_code: STANDARD_TABLE_ID,
            efficiencies: EfficiencyPreset::DosReis2004,
            output_prefix: "tai".to_string(),
        }
    }
}
