use crate::core::io::{fasta, trna};
use crate::core::models::codon::Codon;
use crate::core::models::profile::SampleResult;
use crate::core::models::transcript::Transcript;
use crate::core::models::weights::CodonWeights;
use crate::core::wobble::WobbleEfficiencies;
use crate::engine::adaptiveness::relative_adaptiveness;
use crate::engine::config::{TaiConfig, WindowConfig};
use crate::engine::error::EngineError;
use crate::engine::profile::MetageneAccumulator;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::scoring::score_transcript;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct TaiResult {
    pub weights: CodonWeights,
    /// One entry per configured sample, in configuration order.
    pub samples: Vec<SampleResult>,
}

#[instrument(skip_all, name = "tai_workflow")]
pub fn run(config: &TaiConfig, reporter: &ProgressReporter) -> Result<TaiResult, EngineError> {
    let weights = compute_weights(config, reporter)?;

    let mut samples = Vec::with_capacity(config.samples.len());
    for sample in &config.samples {
        reporter.report(Progress::PhaseStart {
            name: "Scoring transcripts",
        });
        reporter.report(Progress::Message(format!("Sample {}", sample.label)));
        let transcripts = fasta::read_transcripts(&sample.fasta_path)?;
        debug!(
            "Read {} transcripts for sample '{}' from {}.",
            transcripts.len(),
            sample.label,
            sample.fasta_path.display()
        );
        samples.push(score_sample(
            &sample.label,
            &transcripts,
            &weights,
            &config.window,
            reporter,
        )?);
        reporter.report(Progress::PhaseFinish);
    }

    info!("Workflow complete. Scored {} sample(s).", samples.len());
    Ok(TaiResult { weights, samples })
}

/// Reads the tRNA table and derives the relative adaptiveness of every codon
/// of the configured genetic code.
#[instrument(skip_all, name = "codon_weights")]
pub fn compute_weights(
    config: &TaiConfig,
    reporter: &ProgressReporter,
) -> Result<CodonWeights, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Codon weights",
    });

    let copies = trna::read_copy_numbers(&config.trna_table_path)?;
    info!(
        "Loaded {} tRNA genes over {} anticodons from {}.",
        copies.total_genes(),
        copies.len(),
        config.trna_table_path.display()
    );

    let codons: Vec<Codon> = config.genetic_code.codons().map(|(codon, _)| codon).collect();
    let efficiencies = WobbleEfficiencies::from_preset(config.efficiencies);
    debug!(
        "Using genetic code {} ({}) and {} wobble efficiencies.",
        config.genetic_code.id(),
        config.genetic_code.name(),
        config.efficiencies
    );
    let weights = relative_adaptiveness(&codons, &copies, &efficiencies)?;

    reporter.report(Progress::PhaseFinish);
    Ok(weights)
}

/// Scores every transcript of one sample and folds the retained ones into its
/// metagene profile.
pub fn score_sample(
    label: &str,
    transcripts: &[Transcript],
    weights: &CodonWeights,
    window: &WindowConfig,
    reporter: &ProgressReporter,
) -> Result<SampleResult, EngineError> {
    reporter.report(Progress::TaskStart {
        total_steps: transcripts.len() as u64,
    });

    let mut accumulator = MetageneAccumulator::new(window.width());
    let mut retained = Vec::with_capacity(transcripts.len());
    let mut skipped = 0;

    for transcript in transcripts {
        let scored = score_transcript(transcript, weights, window).map_err(|source| {
            EngineError::Scoring {
                sample: label.to_string(),
                transcript: transcript.id.clone(),
                source,
            }
        })?;
        match scored {
            Some(score) => {
                accumulator.add(&score);
                retained.push(score);
            }
            None => {
                debug!(
                    "Skipping transcript '{}' of sample '{}': length {} is not a positive multiple of 3.",
                    transcript.id,
                    label,
                    transcript.sequence.len()
                );
                skipped += 1;
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    info!(
        "Sample '{}': {} transcripts retained, {} skipped.",
        label,
        retained.len(),
        skipped
    );

    Ok(SampleResult {
        label: label.to_string(),
        transcripts: retained,
        profile: accumulator.finish(),
        skipped,
    })
}
