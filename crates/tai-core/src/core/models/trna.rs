use super::codon::Anticodon;
use crate::core::wobble;
use std::collections::HashMap;

/// tRNA gene copy number of every anticodon.
///
/// Every anticodon required by the wobble model is guaranteed an entry; those
/// absent from the source data carry a count of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrnaCopyNumbers {
    counts: HashMap<Anticodon, u32>,
}

impl TrnaCopyNumbers {
    /// Builds copy numbers from explicit counts, filling in missing required anticodons.
    pub fn from_counts(counts: HashMap<Anticodon, u32>) -> Self {
        let mut counts = counts;
        for anticodon in wobble::required_anticodons() {
            counts.entry(anticodon).or_insert(0);
        }
        Self { counts }
    }

    /// Counts one gene per occurrence, as when reading one table row per tRNA gene.
    pub fn from_genes<I>(anticodons: I) -> Self
    where
        I: IntoIterator<Item = Anticodon>,
    {
        let mut counts: HashMap<Anticodon, u32> = HashMap::new();
        for anticodon in anticodons {
            *counts.entry(anticodon).or_insert(0) += 1;
        }
        Self::from_counts(counts)
    }

    pub fn get(&self, anticodon: &Anticodon) -> Option<u32> {
        self.counts.get(anticodon).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of tRNA genes.
    pub fn total_genes(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Anticodon, u32)> {
        self.counts.iter().map(|(a, &c)| (a, c))
    }
}
