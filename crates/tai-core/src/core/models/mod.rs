//! Plain data types shared by every layer: nucleotides and codons, tRNA copy
//! numbers, codon weights, per-transcript scores and aggregated profiles.

pub mod codon;
pub mod profile;
pub mod transcript;
pub mod trna;
pub mod weights;
