use super::config::WindowConfig;
use super::utils::stats::{MeanError, geometric_mean};
use crate::core::models::codon::{Codon, ParseTripletError};
use crate::core::models::transcript::{CodonWindow, Transcript, TranscriptScore};
use crate::core::models::weights::CodonWeights;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Invalid codon at codon index {index}: {source}")]
    InvalidCodon {
        index: usize,
        #[source]
        source: ParseTripletError,
    },
    #[error("Codon {codon} at codon index {index} has no adaptiveness weight")]
    UnsupportedCodon { codon: Codon, index: usize },
    #[error("Failed to average codon weights: {0}")]
    Mean(#[from] MeanError),
}

/// Scores a coding sequence codon by codon.
///
/// Returns `None` when the sequence is empty or its length is not a multiple of
/// three; such transcripts are excluded from every downstream aggregate.
/// Otherwise returns the transcript tAI (geometric mean of the codon weights)
/// and the weight of each codon in reading order.
pub fn score_sequence(
    sequence: &[u8],
    weights: &CodonWeights,
) -> Result<Option<(f64, Vec<f64>)>, ScoringError> {
    if sequence.is_empty() || sequence.len() % 3 != 0 {
        return Ok(None);
    }

    let codon_scores = sequence
        .chunks_exact(3)
        .enumerate()
        .map(|(index, triplet)| {
            let codon = Codon::from_bytes(triplet)
                .map_err(|source| ScoringError::InvalidCodon { index, source })?;
            weights
                .relative(&codon)
                .ok_or(ScoringError::UnsupportedCodon { codon, index })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let tai = geometric_mean(&codon_scores)?;
    Ok(Some((tai, codon_scores)))
}

/// Cuts a fixed-width window of `upstream + downstream + 1` codon scores.
///
/// Window position `j` holds the score of codon `anchor - upstream + j`; positions
/// falling outside the transcript are `None`.
pub fn extract_window(
    codon_scores: &[f64],
    anchor: usize,
    upstream: usize,
    downstream: usize,
) -> CodonWindow {
    let positions = (0..=upstream + downstream)
        .map(|j| {
            (anchor + j)
                .checked_sub(upstream)
                .and_then(|index| codon_scores.get(index).copied())
        })
        .collect();
    CodonWindow::new(positions)
}

/// Scores one transcript and extracts its start- and stop-anchored windows.
///
/// The start window is anchored on the first codon with `upstream` codons before
/// it; the stop window is anchored on the last codon with the two lengths swapped.
pub fn score_transcript(
    transcript: &Transcript,
    weights: &CodonWeights,
    window: &WindowConfig,
) -> Result<Option<TranscriptScore>, ScoringError> {
    let Some((tai, codon_scores)) = score_sequence(&transcript.sequence, weights)? else {
        return Ok(None);
    };

    let last = codon_scores.len() - 1;
    let start_window = extract_window(&codon_scores, 0, window.upstream, window.downstream);
    let stop_window = extract_window(&codon_scores, last, window.downstream, window.upstream);

    Ok(Some(TranscriptScore {
        id: transcript.id.clone(),
        tai,
        codon_scores,
        start_window,
        stop_window,
    }))
}
