use super::{CODON_WEIGHTS_SUFFIX, GLOBAL_TAI_SUFFIX, PROFILE_SUFFIX, write_output};
use crate::cli::ComputeArgs;
use crate::config::PartialTaiConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use tracing::{info, warn};
use trna_tai::{core::io::tables, engine::progress::ProgressReporter, workflows};

pub fn run(args: ComputeArgs, progress_handler: CliProgressHandler) -> Result<()> {
    let partial_config = PartialTaiConfig::load(args.model.config.as_deref())?;
    info!("Merging configuration from file and CLI arguments...");
    let app_config = partial_config.merge_with_compute(&args)?;

    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    info!("Invoking the core tAI workflow...");
    let result = workflows::tai::run(&app_config.core_config, &reporter)?;

    for sample in &result.samples {
        if sample.retained() == 0 {
            warn!(
                "Sample '{}' has no transcript with a length divisible by 3.",
                sample.label
            );
        }
    }

    write_output(&app_config, CODON_WEIGHTS_SUFFIX, |w| {
        tables::write_codon_weights(&result.weights, w)
    })?;
    write_output(&app_config, PROFILE_SUFFIX, |w| {
        tables::write_profiles(&result.samples, w)
    })?;
    write_output(&app_config, GLOBAL_TAI_SUFFIX, |w| {
        tables::write_global_tai(&result.samples, w)
    })?;
    for sample in &result.samples {
        let suffix = format!("{}_codon_tAI.txt", sample.label);
        write_output(&app_config, &suffix, |w| tables::write_codon_scores(sample, w))?;
    }

    println!(
        "✓ tAI of {} sample(s) written with prefix: {}",
        result.samples.len(),
        app_config.output_prefix.display()
    );
    Ok(())
}
