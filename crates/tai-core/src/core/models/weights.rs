use super::codon::Codon;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodonWeight {
    pub codon: Codon,
    /// Absolute adaptiveness `W`.
    pub absolute: f64,
    /// Relative adaptiveness `w`, in `(0, 1]`.
    pub relative: f64,
}

/// Per-codon adaptiveness for one tRNA pool, in the order the codons were supplied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CodonWeights {
    entries: Vec<CodonWeight>,
    index: HashMap<Codon, usize>,
}

impl CodonWeights {
    pub fn new(entries: Vec<CodonWeight>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.codon, i))
            .collect();
        Self { entries, index }
    }

    /// Relative adaptiveness `w` of a codon.
    pub fn relative(&self, codon: &Codon) -> Option<f64> {
        self.index.get(codon).map(|&i| self.entries[i].relative)
    }

    pub fn absolute(&self, codon: &Codon) -> Option<f64> {
        self.index.get(codon).map(|&i| self.entries[i].absolute)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodonWeight> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
