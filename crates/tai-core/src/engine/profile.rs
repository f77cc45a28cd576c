use crate::core::models::profile::MetageneProfile;
use crate::core::models::transcript::{CodonWindow, TranscriptScore};

/// Running per-position mean over windows of a fixed width.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileAccumulator {
    sums: Vec<f64>,
    counts: Vec<u64>,
}

impl ProfileAccumulator {
    pub fn new(width: usize) -> Self {
        Self {
            sums: vec![0.0; width],
            counts: vec![0; width],
        }
    }

    pub fn width(&self) -> usize {
        self.sums.len()
    }

    /// Adds the valid positions of `window`. Positions beyond the accumulator
    /// width are ignored.
    pub fn add(&mut self, window: &CodonWindow) {
        for (position, value) in window.iter().enumerate().take(self.width()) {
            if let Some(value) = value {
                self.sums[position] += value;
                self.counts[position] += 1;
            }
        }
    }

    /// Mean at every position; `NaN` where no window contributed.
    pub fn finish(&self) -> Vec<f64> {
        self.sums
            .iter()
            .zip(&self.counts)
            .map(|(&sum, &count)| {
                if count == 0 {
                    f64::NAN
                } else {
                    sum / count as f64
                }
            })
            .collect()
    }
}

/// Start- and stop-anchored accumulators fed transcript by transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct MetageneAccumulator {
    start: ProfileAccumulator,
    stop: ProfileAccumulator,
}

impl MetageneAccumulator {
    pub fn new(width: usize) -> Self {
        Self {
            start: ProfileAccumulator::new(width),
            stop: ProfileAccumulator::new(width),
        }
    }

    pub fn add(&mut self, score: &TranscriptScore) {
        self.start.add(&score.start_window);
        self.stop.add(&score.stop_window);
    }

    pub fn finish(&self) -> MetageneProfile {
        MetageneProfile {
            start: self.start.finish(),
            stop: self.stop.finish(),
        }
    }
}

/// Averages the windows of already scored transcripts.
pub fn aggregate_profiles(scores: &[TranscriptScore], width: usize) -> MetageneProfile {
    let mut accumulator = MetageneAccumulator::new(width);
    for score in scores {
        accumulator.add(score);
    }
    accumulator.finish()
}
