use super::error::ReadError;
use crate::core::models::transcript::Transcript;
use bio::io::fasta;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads coding sequences from a FASTA file, keyed by record id.
///
/// Records keep their file order. When an id occurs more than once, the last
/// sequence wins but the transcript stays at the position of its first occurrence.
pub fn read_transcripts(path: &Path) -> Result<Vec<Transcript>, ReadError> {
    let file = File::open(path).map_err(|e| ReadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_transcripts_from(file, &path.to_string_lossy())
}

pub fn read_transcripts_from<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<Vec<Transcript>, ReadError> {
    let reader = fasta::Reader::new(reader);
    let mut transcripts: Vec<Transcript> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for result in reader.records() {
        let record = result.map_err(|e| ReadError::Fasta {
            path: source_name.into(),
            source: e,
        })?;
        let id = record.id().to_string();
        let sequence = record.seq().to_vec();

        match positions.get(&id) {
            Some(&i) => transcripts[i].sequence = sequence,
            None => {
                positions.insert(id.clone(), transcripts.len());
                transcripts.push(Transcript::new(id, sequence));
            }
        }
    }

    Ok(transcripts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_multiline_records_in_file_order() {
        let content = ">tx2 some description\nATGAAA\nTAA\n>tx1\nATGTAG\n";
        let transcripts = read_transcripts_from(content.as_bytes(), "mem").unwrap();
        assert_eq!(transcripts.len(), 2);
        assert_eq!(transcripts[0].id, "tx2");
        assert_eq!(transcripts[0].sequence, b"ATGAAATAA".to_vec());
        assert_eq!(transcripts[1].id, "tx1");
    }

    #[test]
    fn duplicated_ids_keep_first_position_and_last_sequence() {
        let content = ">a\nAAA\n>b\nCCC\n>a\nGGG\n";
        let transcripts = read_transcripts_from(content.as_bytes(), "mem").unwrap();
        assert_eq!(transcripts.len(), 2);
        assert_eq!(transcripts[0].id, "a");
        assert_eq!(transcripts[0].sequence, b"GGG".to_vec());
        assert_eq!(transcripts[1].id, "b");
    }

    #[test]
    fn empty_file_yields_no_transcripts() {
        let transcripts = read_transcripts_from("".as_bytes(), "mem").unwrap();
        assert!(transcripts.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = read_transcripts(&dir.path().join("none.fa"));
        assert!(matches!(result, Err(ReadError::Io { .. })));
    }

    #[test]
    fn reads_from_a_file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cds.fa");
        fs::write(&path, ">x\nATGGCCTAA\n").unwrap();
        let transcripts = read_transcripts(&path).unwrap();
        assert_eq!(transcripts[0].sequence.len(), 9);
    }
}
