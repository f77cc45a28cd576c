use super::error::ReadError;
use crate::core::models::codon::Anticodon;
use crate::core::models::trna::TrnaCopyNumbers;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

pub const ANTICODON_COLUMN: &str = "Anticodon";

/// Reads a tab-separated tRNA gene table (e.g. a GtRNAdb export) with one row
/// per tRNA gene and an `Anticodon` column in the DNA alphabet.
///
/// Rows whose anticodon is not a plain 3-letter nucleotide triplet (such as
/// `NNN` for undetermined genes) are skipped.
pub fn read_copy_numbers(path: &Path) -> Result<TrnaCopyNumbers, ReadError> {
    let file = File::open(path).map_err(|e| ReadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_copy_numbers_from(file, &path.to_string_lossy())
}

pub fn read_copy_numbers_from<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<TrnaCopyNumbers, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let csv_error = |e: csv::Error| ReadError::Csv {
        path: source_name.into(),
        source: e,
    };

    let column = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .position(|h| h == ANTICODON_COLUMN)
        .ok_or_else(|| ReadError::MissingColumn {
            path: source_name.into(),
            column: ANTICODON_COLUMN,
        })?;

    let mut genes = Vec::new();
    let mut ignored = 0usize;
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let Some(value) = record.get(column) else {
            warn!("Row {} of {} has no anticodon column; skipping.", row + 2, source_name);
            ignored += 1;
            continue;
        };
        match value.parse::<Anticodon>() {
            Ok(anticodon) => genes.push(anticodon),
            Err(e) => {
                warn!("Ignoring tRNA gene on row {} of {}: {}", row + 2, source_name, e);
                ignored += 1;
            }
        }
    }

    debug!(
        "Read {} tRNA genes from {} ({} rows ignored).",
        genes.len(),
        source_name,
        ignored
    );
    Ok(TrnaCopyNumbers::from_genes(genes))
}
