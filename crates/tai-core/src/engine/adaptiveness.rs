//! Absolute (W) and relative (w) codon adaptiveness, dos Reis et al. (2004).

use super::utils::stats::{MeanError, geometric_mean};
use crate::core::models::codon::{Anticodon, Base, Codon};
use crate::core::models::trna::TrnaCopyNumbers;
use crate::core::models::weights::{CodonWeight, CodonWeights};
use crate::core::wobble::{self, CandidateSet, PairingType, WobbleEfficiencies, WobbleError};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error, PartialEq)]
pub enum AdaptivenessError {
    #[error(transparent)]
    Wobble(#[from] WobbleError),

    #[error("No tRNA copy number for anticodon {anticodon} (needed by codon {codon})")]
    MissingCopyNumber { codon: Codon, anticodon: Anticodon },

    #[error(
        "Codon {codon} has two candidate anticodons but its (third base, wobble base) pair ({last}, {wobble}) matches no wobble rule"
    )]
    UnmatchedWobblePair {
        codon: Codon,
        last: Base,
        wobble: Base,
    },

    #[error("Every codon has zero absolute adaptiveness; the tRNA table provides no usable genes")]
    AllZero,

    #[error("No codons to compute adaptiveness for")]
    NoCodons,

    #[error("Failed to compute the geometric mean floor: {0}")]
    Floor(#[from] MeanError),
}

fn copy_number(
    copies: &TrnaCopyNumbers,
    codon: &Codon,
    anticodon: Anticodon,
) -> Result<f64, AdaptivenessError> {
    copies
        .get(&anticodon)
        .map(f64::from)
        .ok_or(AdaptivenessError::MissingCopyNumber {
            codon: *codon,
            anticodon,
        })
}

/// Absolute adaptiveness `W` of a codon.
pub fn absolute_adaptiveness(
    codon: &Codon,
    copies: &TrnaCopyNumbers,
    efficiencies: &WobbleEfficiencies,
) -> Result<f64, AdaptivenessError> {
    match wobble::candidates(codon)? {
        CandidateSet::Single(anticodon) => sole_decoder(codon, anticodon, copies, efficiencies),
        CandidateSet::Pair => two_decoders(codon, copies, efficiencies),
        CandidateSet::Triple => three_decoders(codon, copies, efficiencies),
    }
}

fn sole_decoder(
    codon: &Codon,
    anticodon: Anticodon,
    copies: &TrnaCopyNumbers,
    efficiencies: &WobbleEfficiencies,
) -> Result<f64, AdaptivenessError> {
    let pairing = PairingType::for_sole_decoder(anticodon.first());
    Ok(efficiencies.efficiency(pairing) * copy_number(copies, codon, anticodon)?)
}

fn two_decoders(
    codon: &Codon,
    copies: &TrnaCopyNumbers,
    efficiencies: &WobbleEfficiencies,
) -> Result<f64, AdaptivenessError> {
    let exact = codon.anticodon();
    let (exact_pairing, wobble_pairing, wobble_base) = match (codon.last(), exact.first()) {
        (Base::U, Base::A) => (PairingType::IU, PairingType::GU, Base::G),
        (Base::C, Base::G) => (PairingType::GC, PairingType::IC, Base::A),
        (Base::A, Base::U) => (PairingType::UA, PairingType::IA, Base::A),
        (Base::G, Base::C) => (PairingType::CG, PairingType::UG, Base::U),
        (last, wobble) => {
            return Err(AdaptivenessError::UnmatchedWobblePair {
                codon: *codon,
                last,
                wobble,
            });
        }
    };
    let wobbling = exact.with_first(wobble_base);

    Ok(efficiencies.efficiency(exact_pairing) * copy_number(copies, codon, exact)?
        + efficiencies.efficiency(wobble_pairing) * copy_number(copies, codon, wobbling)?)
}

// No G:A pairing is allowed: only the exact U:A decoder and the inosine decoder count.
fn three_decoders(
    codon: &Codon,
    copies: &TrnaCopyNumbers,
    efficiencies: &WobbleEfficiencies,
) -> Result<f64, AdaptivenessError> {
    let exact = codon.anticodon();
    let inosine = exact.with_first(Base::A);

    Ok(efficiencies.efficiency(PairingType::UA) * copy_number(copies, codon, exact)?
        + efficiencies.efficiency(PairingType::IA) * copy_number(copies, codon, inosine)?)
}

/// Relative adaptiveness `w` of every codon in `codons`.
///
/// `w = W / max(W)`. Codons with `W = 0` get the geometric mean of the non-zero
/// normalized weights instead, so that a single unsupported codon cannot zero a
/// transcript's geometric mean.
pub fn relative_adaptiveness(
    codons: &[Codon],
    copies: &TrnaCopyNumbers,
    efficiencies: &WobbleEfficiencies,
) -> Result<CodonWeights, AdaptivenessError> {
    if codons.is_empty() {
        return Err(AdaptivenessError::NoCodons);
    }

    let absolute = codons
        .iter()
        .map(|codon| absolute_adaptiveness(codon, copies, efficiencies).map(|w| (*codon, w)))
        .collect::<Result<Vec<_>, _>>()?;

    let max = absolute.iter().map(|&(_, w)| w).fold(0.0, f64::max);
    if max <= 0.0 {
        return Err(AdaptivenessError::AllZero);
    }

    let normalized_non_zero: Vec<f64> = absolute
        .iter()
        .filter(|&&(_, w)| w != 0.0)
        .map(|&(_, w)| w / max)
        .collect();
    let floor = geometric_mean(&normalized_non_zero)?;
    debug!(
        "W_max = {:.4}, {} of {} codons have zero W and take the floor value {:.6}.",
        max,
        absolute.len() - normalized_non_zero.len(),
        absolute.len(),
        floor
    );

    let entries = absolute
        .into_iter()
        .map(|(codon, w)| {
            let relative = if w != 0.0 { w / max } else { floor };
            trace!("{}: W = {:.4}, w = {:.6}", codon, w, relative);
            CodonWeight {
                codon,
                absolute: w,
                relative,
            }
        })
        .collect();

    Ok(CodonWeights::new(entries))
}
