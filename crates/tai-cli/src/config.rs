pub mod defaults;
pub mod models;

use crate::cli::{ComputeArgs, ModelArgs, WeightsArgs};
use crate::error::{CliError, Result};
use crate::utils::parser;
use defaults::DefaultsConfig;
use models::AppConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use trna_tai::engine::config as core_config;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialWindowConfig {
    upstream: Option<usize>,
    downstream: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialModelConfig {
    efficiencies: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialTaiConfig {
    #[serde(rename = "trna-table")]
    trna_table: Option<PathBuf>,
    #[serde(rename = "genetic-code")]
    genetic_code: Option<u8>,
    #[serde(rename = "output-prefix")]
    output_prefix: Option<PathBuf>,
    window: Option<PartialWindowConfig>,
    model: Option<PartialModelConfig>,
}

impl PartialTaiConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads the file when one is given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_compute(mut self, args: &ComputeArgs) -> Result<AppConfig> {
        self.apply_set_values(&args.model.set_values)?;

        let samples = parser::pair_labels(&args.inputs, &args.labels)
            .map_err(|e| CliError::Argument(e.to_string()))?;

        let defaults = DefaultsConfig::default();
        let window = self.window.take().unwrap_or_default();
        let window = core_config::WindowConfig {
            upstream: args
                .upstream
                .or(window.upstream)
                .unwrap_or(defaults.upstream),
            downstream: args
                .downstream
                .or(window.downstream)
                .unwrap_or(defaults.downstream),
        };

        let mut builder = self.model_builder(&args.model, &defaults)?.window(window);
        for (label, path) in samples {
            builder = builder.sample(label, path);
        }
        self.finish(builder, &args.model, defaults)
    }

    pub fn merge_with_weights(mut self, args: &WeightsArgs) -> Result<AppConfig> {
        self.apply_set_values(&args.model.set_values)?;
        let defaults = DefaultsConfig::default();
        let builder = self.model_builder(&args.model, &defaults)?;
        self.finish(builder, &args.model, defaults)
    }

    fn model_builder(
        &mut self,
        args: &ModelArgs,
        defaults: &DefaultsConfig,
    ) -> Result<core_config::TaiConfigBuilder> {
        let trna_table = args
            .trna_table
            .clone()
            .or(self.trna_table.take())
            .ok_or_else(|| {
                CliError::Config(
                    "A tRNA table is required either in the config file ('trna-table') or via --trna."
                        .to_string(),
                )
            })?;

        let model = self.model.take().unwrap_or_default();
        let efficiencies = match args.efficiencies.as_ref().or(model.efficiencies.as_ref()) {
            Some(name) => {
                parser::parse_efficiencies(name).map_err(|e| CliError::Config(e.to_string()))?
            }
            None => defaults.efficiencies,
        };

        Ok(core_config::TaiConfigBuilder::new()
            .trna_table_path(trna_table)
            .genetic_code(
                args.genetic_code
                    .or(self.genetic_code)
                    .unwrap_or(defaults.genetic_code),
            )
            .efficiencies(efficiencies))
    }

    fn finish(
        self,
        builder: core_config::TaiConfigBuilder,
        args: &ModelArgs,
        defaults: DefaultsConfig,
    ) -> Result<AppConfig> {
        let output_prefix = args
            .output_prefix
            .clone()
            .or(self.output_prefix)
            .unwrap_or_else(|| PathBuf::from(defaults.output_prefix));

        let core_config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(AppConfig {
            output_prefix,
            core_config,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) =
                parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

            let invalid_integer = || {
                CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
            };

            match key {
                "window.upstream" => {
                    self.window.get_or_insert_with(Default::default).upstream =
                        Some(value_str.parse().map_err(|_| invalid_integer())?);
                }
                "window.downstream" => {
                    self.window.get_or_insert_with(Default::default).downstream =
                        Some(value_str.parse().map_err(|_| invalid_integer())?);
                }
                "genetic-code" => {
                    self.genetic_code = Some(value_str.parse().map_err(|_| invalid_integer())?);
                }
                "model.efficiencies" => {
                    self.model.get_or_insert_with(Default::default).efficiencies =
                        Some(value_str.to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::{TempDir, tempdir};
    use trna_tai::core::wobble::EfficiencyPreset;

    fn write_config_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn compute_args(extra: &[&str]) -> ComputeArgs {
        let mut args = vec!["tai", "compute", "-i", "a.fa,b.fa"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Compute(args) => args,
            _ => panic!("Expected 'compute' subcommand"),
        }
    }

    fn weights_args(extra: &[&str]) -> WeightsArgs {
        let mut args = vec!["tai", "weights"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Weights(args) => args,
            _ => panic!("Expected 'weights' subcommand"),
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let config = PartialTaiConfig::default()
            .merge_with_compute(&compute_args(&["-g", "trna.txt"]))
            .unwrap();

        assert_eq!(config.output_prefix, PathBuf::from("tai"));
        let core = config.core_config;
        assert_eq!(core.trna_table_path, PathBuf::from("trna.txt"));
        assert_eq!(core.window.upstream, 50);
        assert_eq!(core.window.downstream, 50);
        assert_eq!(core.genetic_code.id(), 1);
        assert_eq!(core.efficiencies, EfficiencyPreset::DosReis2004);
        let labels: Vec<&str> = core.samples.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["a", "b"]);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "tai.toml",
            r#"
            trna-table = "hg38-tRNAs.txt"
            genetic-code = 2
            output-prefix = "out/run"

            [window]
            upstream = 20

            [model]
            efficiencies = "tuller-2010"
            "#,
        );
        let config = PartialTaiConfig::from_file(&path)
            .unwrap()
            .merge_with_compute(&compute_args(&[]))
            .unwrap();

        assert_eq!(config.output_prefix, PathBuf::from("out/run"));
        let core = config.core_config;
        assert_eq!(core.trna_table_path, PathBuf::from("hg38-tRNAs.txt"));
        assert_eq!(core.genetic_code.id(), 2);
        assert_eq!(core.window.upstream, 20);
        assert_eq!(core.window.downstream, 50);
        assert_eq!(core.efficiencies, EfficiencyPreset::Tuller2010);
    }

    #[test]
    fn set_values_override_file_and_cli_flags_override_both() {
        let dir = tempdir().unwrap();
        let path = write_config_file(
            &dir,
            "tai.toml",
            r#"
            trna-table = "trna.txt"
            [window]
            upstream = 20
            downstream = 20
            "#,
        );
        let args = compute_args(&[
            "-S",
            "window.upstream=30",
            "-S",
            "window.downstream=40",
            "-d",
            "10",
        ]);
        let config = PartialTaiConfig::from_file(&path)
            .unwrap()
            .merge_with_compute(&args)
            .unwrap();

        assert_eq!(config.core_config.window.upstream, 30);
        assert_eq!(config.core_config.window.downstream, 10);
    }

    #[test]
    fn cli_efficiency_flag_beats_set_value() {
        let args = weights_args(&[
            "-g",
            "trna.txt",
            "-S",
            "model.efficiencies=tuller-2010",
            "-e",
            "dos-reis-2004",
        ]);
        let config = PartialTaiConfig::default().merge_with_weights(&args).unwrap();
        assert_eq!(config.core_config.efficiencies, EfficiencyPreset::DosReis2004);
        assert!(config.core_config.samples.is_empty());
    }

    #[test]
    fn missing_trna_table_is_a_config_error() {
        let result = PartialTaiConfig::default().merge_with_weights(&weights_args(&[]));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("tRNA table")));
    }

    #[test]
    fn unknown_genetic_code_is_a_config_error() {
        let args = weights_args(&["-g", "trna.txt", "-S", "genetic-code=8"]);
        let result = PartialTaiConfig::default().merge_with_weights(&args);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_set_key_and_bad_integer_are_rejected() {
        let args = weights_args(&["-g", "trna.txt", "-S", "window.width=3"]);
        assert!(matches!(
            PartialTaiConfig::default().merge_with_weights(&args),
            Err(CliError::Config(msg)) if msg.contains("Unsupported")
        ));

        let args = compute_args(&["-g", "trna.txt", "-S", "window.upstream=many"]);
        assert!(matches!(
            PartialTaiConfig::default().merge_with_compute(&args),
            Err(CliError::Config(msg)) if msg.contains("Invalid integer")
        ));
    }

    #[test]
    fn unknown_keys_in_file_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "bad.toml", "trna-table = \"x\"\nthreads = 4\n");
        assert!(matches!(
            PartialTaiConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config_file(&dir, "bad.toml", "[window\nupstream = ");
        assert!(matches!(
            PartialTaiConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn label_count_mismatch_is_an_argument_error() {
        let args = compute_args(&["-g", "trna.txt", "-l", "only-one"]);
        assert!(matches!(
            PartialTaiConfig::default().merge_with_compute(&args),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = PartialTaiConfig::load(Some(dir.path().join("absent.toml").as_path()));
        assert!(matches!(result, Err(CliError::Io(_))));
        assert!(PartialTaiConfig::load(None).is_ok());
    }
}
