use super::transcript::TranscriptScore;

/// Mean per-position score across transcripts aligned at their start and stop codons.
///
/// A position no transcript covers holds `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetageneProfile {
    pub start: Vec<f64>,
    pub stop: Vec<f64>,
}

impl MetageneProfile {
    pub fn width(&self) -> usize {
        self.start.len()
    }

    /// `(start, stop)` pairs, one per window position.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.start.iter().copied().zip(self.stop.iter().copied())
    }
}

/// Everything computed for one input FASTA file.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleResult {
    pub label: String,
    /// Retained transcripts in input order.
    pub transcripts: Vec<TranscriptScore>,
    pub profile: MetageneProfile,
    /// Transcripts dropped for a length that is zero or not a multiple of 3.
    pub skipped: usize,
}

impl SampleResult {
    pub fn retained(&self) -> usize {
        self.transcripts.len()
    }
}
