use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "tai - Compute the tRNA Adaptation Index (tAI) of codons and transcripts from tRNA gene copy numbers.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score every transcript of one or more FASTA files and build start/stop tAI profiles.
    Compute(ComputeArgs),
    /// Compute and write only the per-codon tAI weights.
    Weights(WeightsArgs),
}

/// Options shared by every command that derives codon weights.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// tRNA gene table with an 'Anticodon' column (one row per tRNA gene).
    #[arg(short = 'g', long = "trna", value_name = "PATH")]
    pub trna_table: Option<PathBuf>,

    /// Prefix (directory and file stem) of every output file.
    #[arg(short, long, value_name = "PREFIX")]
    pub output_prefix: Option<PathBuf>,

    /// NCBI genetic code table id used to enumerate codons.
    #[arg(short = 't', long, value_name = "INT")]
    pub genetic_code: Option<u8>,

    /// Wobble efficiency preset: 'dos-reis-2004' or 'tuller-2010'.
    #[arg(short = 'e', long, value_name = "NAME")]
    pub efficiencies: Option<String>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S window.upstream=30
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `compute` subcommand.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Comma-separated coding-sequence FASTA files, one per sample.
    #[arg(short, long, required = true, value_name = "PATH,...", value_delimiter = ',')]
    pub inputs: Vec<PathBuf>,

    /// Comma-separated sample labels, one per input. Defaults to the input file stems.
    #[arg(short, long, value_name = "LABEL,...", value_delimiter = ',')]
    pub labels: Vec<String>,

    /// Codons kept before the start codon and after the stop codon.
    #[arg(short, long, value_name = "INT")]
    pub upstream: Option<usize>,

    /// Codons kept after the start codon and before the stop codon.
    #[arg(short, long, value_name = "INT")]
    pub downstream: Option<usize>,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// Arguments for the `weights` subcommand.
#[derive(Args, Debug)]
pub struct WeightsArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_splits_comma_separated_inputs_and_labels() {
        let cli = Cli::parse_from([
            "tai", "compute", "-i", "a.fa,b.fa", "-l", "s1,s2", "-g", "trna.txt", "-u", "30",
        ]);
        let Commands::Compute(args) = cli.command else {
            panic!("Expected 'compute' subcommand");
        };
        assert_eq!(args.inputs, [PathBuf::from("a.fa"), PathBuf::from("b.fa")]);
        assert_eq!(args.labels, ["s1", "s2"]);
        assert_eq!(args.model.trna_table, Some(PathBuf::from("trna.txt")));
        assert_eq!(args.upstream, Some(30));
        assert_eq!(args.downstream, None);
    }

    #[test]
    fn global_flags_are_accepted_after_the_subcommand() {
        let cli = Cli::parse_from(["tai", "weights", "-g", "trna.txt", "-vv", "--log-file", "x.log"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_file, Some(PathBuf::from("x.log")));
        assert!(matches!(cli.command, Commands::Weights(_)));
    }

    #[test]
    fn compute_requires_inputs() {
        let result = Cli::try_parse_from(["tai", "compute", "-g", "trna.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["tai", "-q", "-v", "weights"]);
        assert!(result.is_err());
    }

    #[test]
    fn set_values_can_be_repeated() {
        let cli = Cli::parse_from([
            "tai",
            "weights",
            "-S",
            "genetic-code=2",
            "-S",
            "model.efficiencies=tuller-2010",
        ]);
        let Commands::Weights(args) = cli.command else {
            panic!("Expected 'weights' subcommand");
        };
        assert_eq!(
            args.model.set_values,
            ["genetic-code=2", "model.efficiencies=tuller-2010"]
        );
    }
}
