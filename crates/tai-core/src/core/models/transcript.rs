/// A coding sequence read from a FASTA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub id: String,
    pub sequence: Vec<u8>,
}

impl Transcript {
    pub fn new(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            sequence: sequence.into(),
        }
    }
}

/// Fixed-width slice of per-codon scores around an anchor codon.
///
/// Positions falling outside the transcript hold `None` and must not
/// contribute to any average.
#[derive(Debug, Clone, PartialEq)]
pub struct CodonWindow {
    positions: Vec<Option<f64>>,
}

impl CodonWindow {
    pub fn new(positions: Vec<Option<f64>>) -> Self {
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<f64> {
        self.positions.get(position).copied().flatten()
    }

    pub fn is_valid(&self, position: usize) -> bool {
        self.get(position).is_some()
    }

    pub fn valid_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.positions.iter().copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptScore {
    pub id: String,
    /// Geometric mean of [`Self::codon_scores`].
    pub tai: f64,
    pub codon_scores: Vec<f64>,
    pub start_window: CodonWindow,
    pub stop_window: CodonWindow,
}

impl TranscriptScore {
    pub fn codon_count(&self) -> usize {
        self.codon_scores.len()
    }
}
