use super::{CODON_WEIGHTS_SUFFIX, write_output};
use crate::cli::WeightsArgs;
use crate::config::PartialTaiConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use tracing::info;
use trna_tai::{core::io::tables, engine::progress::ProgressReporter, workflows};

pub fn run(args: WeightsArgs, progress_handler: CliProgressHandler) -> Result<()> {
    let partial_config = PartialTaiConfig::load(args.model.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let app_config = partial_config.merge_with_weights(&args)?;

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let weights = workflows::tai::compute_weights(&app_config.core_config, &reporter)?;

    let path = write_output(&app_config, CODON_WEIGHTS_SUFFIX, |w| {
        tables::write_codon_weights(&weights, w)
    })?;
    println!("✓ Codon tAI weights written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_one_weight_per_codon() {
        let dir = tempdir().unwrap();
        let trna = dir.path().join("trna.txt");
        fs::write(&trna, "Name\tAnticodon\nt1\tCAT\nt2\tGAA\nt3\tTTT\n").unwrap();
        let prefix = dir.path().join("out").join("yeast");

        let cli = Cli::parse_from([
            "tai",
            "weights",
            "-g",
            trna.to_str().unwrap(),
            "-o",
            prefix.to_str().unwrap(),
        ]);
        let Commands::Weights(args) = cli.command else {
            panic!("Expected 'weights' subcommand");
        };
        run(args, CliProgressHandler::hidden()).unwrap();

        let content =
            fs::read_to_string(dir.path().join("out").join("yeast_tAI_of_each_codon.txt")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "codon\ttAI");
        assert_eq!(lines.len(), 65);
    }
}
