//! # Wobble Model
//!
//! Static reference data describing which tRNA anticodons can decode each codon,
//! and how efficiently each pairing type works.
//!
//! - [`candidates`] classifies a codon by the number of anticodons able to read
//!   it, returning a closed [`CandidateSet`].
//! - [`WobbleEfficiencies`] holds the selective constraint (Sij) of each
//!   [`PairingType`] for one [`EfficiencyPreset`].
//!
//! Both tables are compiled into the binary and never change at runtime.

mod tables;

use crate::core::models::codon::{Anticodon, Base, Codon, ParseTripletError};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WobbleError {
    #[error("Codon {0} is not present in the codon-anticodon table")]
    UnsupportedCodon(Codon),
    #[error("Codon {codon} has {count} candidate anticodons; only 1 to 3 are supported")]
    InvalidCandidateCount { codon: Codon, count: usize },
    #[error("Malformed anticodon in the codon-anticodon table for {codon}: {source}")]
    MalformedEntry {
        codon: Codon,
        #[source]
        source: ParseTripletError,
    },
}

/// The anticodons that can decode a codon, grouped by how many there are.
///
/// Only the single-candidate case needs the anticodon itself; the two- and
/// three-candidate formulas derive their anticodons from the codon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSet {
    Single(Anticodon),
    Pair,
    Triple,
}

pub fn candidates(codon: &Codon) -> Result<CandidateSet, WobbleError> {
    let key = codon.to_string();
    let entries = tables::CODON_ANTICODONS
        .get(key.as_str())
        .ok_or(WobbleError::UnsupportedCodon(*codon))?;

    match entries {
        [single] => single
            .parse::<Anticodon>()
            .map(CandidateSet::Single)
            .map_err(|source| WobbleError::MalformedEntry {
                codon: *codon,
                source,
            }),
        [_, _] => Ok(CandidateSet::Pair),
        [_, _, _] => Ok(CandidateSet::Triple),
        other => Err(WobbleError::InvalidCandidateCount {
            codon: *codon,
            count: other.len(),
        }),
    }
}

/// Every anticodon listed as a candidate for some codon.
///
/// These are the anticodons that must carry a copy number, even when the
/// organism has no gene for them.
pub fn required_anticodons() -> BTreeSet<Anticodon> {
    tables::CODON_ANTICODONS
        .values()
        .flat_map(|entries| entries.iter())
        .filter_map(|entry| entry.parse().ok())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairingType {
    IU,
    GC,
    UA,
    CG,
    GU,
    IC,
    IA,
    UG,
    LA,
}

impl PairingType {
    pub const ALL: [PairingType; 9] = [
        PairingType::IU,
        PairingType::GC,
        PairingType::UA,
        PairingType::CG,
        PairingType::GU,
        PairingType::IC,
        PairingType::IA,
        PairingType::UG,
        PairingType::LA,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PairingType::IU => "I:U",
            PairingType::GC => "G:C",
            PairingType::UA => "U:A",
            PairingType::CG => "C:G",
            PairingType::GU => "G:U",
            PairingType::IC => "I:C",
            PairingType::IA => "I:A",
            PairingType::UG => "U:G",
            PairingType::LA => "L:A",
        }
    }

    /// Pairing used by a tRNA that is the sole decoder of its codon, keyed by the
    /// anticodon's wobble base. An adenosine there is always edited to inosine.
    pub fn for_sole_decoder(wobble_base: Base) -> Self {
        match wobble_base {
            Base::A => PairingType::IU,
            Base::G => PairingType::GC,
            Base::U => PairingType::UA,
            Base::C => PairingType::CG,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PairingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EfficiencyPreset {
    #[default]
    DosReis2004,
    Tuller2010,
}

impl EfficiencyPreset {
    pub fn name(self) -> &'static str {
        match self {
            EfficiencyPreset::DosReis2004 => "dos-reis-2004",
            EfficiencyPreset::Tuller2010 => "tuller-2010",
        }
    }
}

impl fmt::Display for EfficiencyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown wobble efficiency preset '{0}'. Expected 'dos-reis-2004' or 'tuller-2010'.")]
pub struct UnknownPresetError(pub String);

impl FromStr for EfficiencyPreset {
    type Err = UnknownPresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dos-reis-2004" | "dosreis2004" | "2004" => Ok(EfficiencyPreset::DosReis2004),
            "tuller-2010" | "tuller2010" | "2010" => Ok(EfficiencyPreset::Tuller2010),
            _ => Err(UnknownPresetError(s.to_string())),
        }
    }
}

/// Sij penalty of every pairing type, in `[0, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct WobbleEfficiencies {
    penalties: [f64; 9],
}

impl WobbleEfficiencies {
    pub fn from_preset(preset: EfficiencyPreset) -> Self {
        let mut penalties = [0.0; 9];
        for pairing in PairingType::ALL {
            penalties[pairing.index()] = tables::PAIRING_PENALTIES
                .get(pairing.label())
                .copied()
                .unwrap_or_default();
        }
        if preset == EfficiencyPreset::Tuller2010 {
            penalties[PairingType::GU.index()] = tables::TULLER_2010_G_U_PENALTY;
        }
        Self { penalties }
    }

    pub fn penalty(&self, pairing: PairingType) -> f64 {
        self.penalties[pairing.index()]
    }

    /// Fraction of a tRNA's decoding capacity retained under this pairing, `1 - Sij`.
    pub fn efficiency(&self, pairing: PairingType) -> f64 {
        1.0 - self.penalty(pairing)
    }
}

impl Default for WobbleEfficiencies {
    fn default() -> Self {
        Self::from_preset(EfficiencyPreset::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(s: &str) -> Codon {
        s.parse().unwrap()
    }

    fn all_codons() -> Vec<Codon> {
        let mut codons = Vec::with_capacity(64);
        for a in Base::TCAG {
            for b in Base::TCAG {
                for c in Base::TCAG {
                    codons.push(Codon::new(a, b, c));
                }
            }
        }
        codons
    }

    #[test]
    fn every_codon_has_between_one_and_three_candidates() {
        for c in all_codons() {
            assert!(candidates(&c).is_ok(), "codon {} missing", c);
        }
    }

    #[test]
    fn sole_candidate_is_the_exact_anticodon() {
        for c in all_codons() {
            if let CandidateSet::Single(anticodon) = candidates(&c).unwrap() {
                assert_eq!(anticodon, c.anticodon(), "codon {}", c);
            }
        }
    }

    #[test]
    fn candidate_counts_match_known_entries() {
        assert_eq!(
            candidates(&codon("UUC")).unwrap(),
            CandidateSet::Single("GAA".parse().unwrap())
        );
        assert_eq!(candidates(&codon("UUU")).unwrap(), CandidateSet::Pair);
        assert_eq!(candidates(&codon("AUA")).unwrap(), CandidateSet::Triple);
    }

    #[test]
    fn anticodons_referenced_by_wobble_formulas_are_all_required() {
        let required = required_anticodons();
        for c in all_codons() {
            let exact = c.anticodon();
            let referenced = match candidates(&c).unwrap() {
                CandidateSet::Single(a) => vec![a],
                CandidateSet::Pair => {
                    let wobble = match c.last() {
                        Base::U => Base::G,
                        Base::C | Base::A => Base::A,
                        Base::G => Base::U,
                    };
                    vec![exact, exact.with_first(wobble)]
                }
                CandidateSet::Triple => vec![exact, exact.with_first(Base::A)],
            };
            for anticodon in referenced {
                assert!(
                    required.contains(&anticodon),
                    "anticodon {} used by codon {} is not required",
                    anticodon,
                    c
                );
            }
        }
    }

    #[test]
    fn default_penalties_match_dos_reis() {
        let sij = WobbleEfficiencies::default();
        assert_eq!(sij.penalty(PairingType::IU), 0.0);
        assert_eq!(sij.penalty(PairingType::GU), 0.41);
        assert_eq!(sij.penalty(PairingType::IC), 0.28);
        assert_eq!(sij.penalty(PairingType::IA), 0.999);
        assert_eq!(sij.penalty(PairingType::UG), 0.68);
        assert_eq!(sij.penalty(PairingType::LA), 0.89);
        for pairing in PairingType::ALL {
            let value = sij.penalty(pairing);
            assert!((0.0..1.0).contains(&value), "{} = {}", pairing, value);
        }
    }

    #[test]
    fn tuller_preset_only_changes_g_u() {
        let dos_reis = WobbleEfficiencies::from_preset(EfficiencyPreset::DosReis2004);
        let tuller = WobbleEfficiencies::from_preset(EfficiencyPreset::Tuller2010);
        for pairing in PairingType::ALL {
            if pairing == PairingType::GU {
                assert_eq!(tuller.penalty(pairing), 0.561);
            } else {
                assert_eq!(tuller.penalty(pairing), dos_reis.penalty(pairing));
            }
        }
    }

    #[test]
    fn preset_names_round_trip() {
        for preset in [EfficiencyPreset::DosReis2004, EfficiencyPreset::Tuller2010] {
            assert_eq!(preset.name().parse::<EfficiencyPreset>().unwrap(), preset);
        }
        assert!("crick-1966".parse::<EfficiencyPreset>().is_err());
    }
}
