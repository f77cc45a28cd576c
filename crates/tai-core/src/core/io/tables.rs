use super::error::WriteError;
use crate::core::models::profile::SampleResult;
use crate::core::models::weights::CodonWeights;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

#[derive(Debug, Serialize)]
struct CodonWeightRow {
    codon: String,
    #[serde(rename = "tAI")]
    tai: f64,
}

#[derive(Debug, Serialize)]
struct ProfileRow<'a> {
    sample: &'a str,
    start_tai: f64,
    stop_tai: f64,
}

fn tsv_writer<W: Write>(writer: W, has_headers: bool) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(has_headers)
        .flexible(true)
        .from_writer(writer)
}

/// Writes the relative adaptiveness of every codon: header `codon\ttAI`.
pub fn write_codon_weights<W: Write>(weights: &CodonWeights, writer: W) -> Result<(), WriteError> {
    let mut out = tsv_writer(writer, true);
    for entry in weights.iter() {
        out.serialize(CodonWeightRow {
            codon: entry.codon.to_string(),
            tai: entry.relative,
        })?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the start/stop metagene profile of every sample, one row per window
/// position, samples in the order given. Uncovered positions are written as `NaN`.
pub fn write_profiles<W: Write>(samples: &[SampleResult], writer: W) -> Result<(), WriteError> {
    if samples.is_empty() {
        return Err(WriteError::EmptyResult("no samples to build a profile table from"));
    }
    let mut out = tsv_writer(writer, false);
    out.write_record(["sample", "start_tAI", "stop_tAI"])?;
    for sample in samples {
        for (start_tai, stop_tai) in sample.profile.rows() {
            out.serialize(ProfileRow {
                sample: &sample.label,
                start_tai,
                stop_tai,
            })?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes the transcript-level tAI as a transcript x sample matrix.
///
/// The header starts with an empty cell followed by the sample labels. A transcript
/// missing from a sample (absent or skipped) leaves an empty cell.
pub fn write_global_tai<W: Write>(samples: &[SampleResult], writer: W) -> Result<(), WriteError> {
    let mut row_order: Vec<&str> = Vec::new();
    let mut columns: Vec<HashMap<&str, f64>> = Vec::with_capacity(samples.len());
    for sample in samples {
        let mut column = HashMap::with_capacity(sample.transcripts.len());
        for transcript in &sample.transcripts {
            if !columns.iter().any(|c| c.contains_key(transcript.id.as_str()))
                && !column.contains_key(transcript.id.as_str())
            {
                row_order.push(&transcript.id);
            }
            column.insert(transcript.id.as_str(), transcript.tai);
        }
        columns.push(column);
    }

    let mut out = tsv_writer(writer, false);
    let mut header = vec![String::new()];
    header.extend(samples.iter().map(|s| s.label.clone()));
    out.write_record(&header)?;

    for id in row_order {
        let mut record = Vec::with_capacity(columns.len() + 1);
        record.push(id.to_string());
        for column in &columns {
            record.push(column.get(id).map(|v| v.to_string()).unwrap_or_default());
        }
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes one line per retained transcript: its id followed by the score of every
/// codon, 6 decimals each.
pub fn write_codon_scores<W: Write>(sample: &SampleResult, writer: W) -> Result<(), WriteError> {
    let mut out = tsv_writer(writer, false);
    for transcript in &sample.transcripts {
        let mut record = Vec::with_capacity(transcript.codon_scores.len() + 1);
        record.push(transcript.id.clone());
        record.extend(transcript.codon_scores.iter().map(|s| format!("{:.6}", s)));
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}
