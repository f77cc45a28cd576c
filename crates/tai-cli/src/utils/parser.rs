use std::path::{Path, PathBuf};
use thiserror::Error;
use trna_tai::core::wobble::EfficiencyPreset;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Got {inputs} input file(s) but {labels} label(s); give one label per input or none.")]
    LabelCountMismatch { inputs: usize, labels: usize },

    #[error("Cannot derive a sample label from '{0}'. Pass labels explicitly with --labels.")]
    NoFileStem(PathBuf),

    #[error("Sample labels cannot be empty.")]
    EmptyLabel,

    #[error(
        "Unknown wobble efficiency preset '{0}'. Expected 'dos-reis-2004' or 'tuller-2010'."
    )]
    UnknownEfficiencies(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),
}

/// Pairs every input file with its sample label, deriving labels from file stems
/// when none are given.
pub fn pair_labels(inputs: &[PathBuf], labels: &[String]) -> Result<Vec<(String, PathBuf)>, ParseError> {
    if labels.is_empty() {
        return inputs
            .iter()
            .map(|path| Ok((file_stem_label(path)?, path.clone())))
            .collect();
    }
    if labels.len() != inputs.len() {
        return Err(ParseError::LabelCountMismatch {
            inputs: inputs.len(),
            labels: labels.len(),
        });
    }
    labels
        .iter()
        .zip(inputs)
        .map(|(label, path)| {
            let label = label.trim();
            if label.is_empty() {
                Err(ParseError::EmptyLabel)
            } else {
                Ok((label.to_string(), path.clone()))
            }
        })
        .collect()
}

fn file_stem_label(path: &Path) -> Result<String, ParseError> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| ParseError::NoFileStem(path.to_path_buf()))
}

pub fn parse_efficiencies(name: &str) -> Result<EfficiencyPreset, ParseError> {
    name.trim()
        .parse()
        .map_err(|_| ParseError::UnknownEfficiencies(name.to_string()))
}

pub fn parse_key_value(kv_pair: &str) -> Result<(&str, &str), ParseError> {
    kv_pair
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| ParseError::InvalidKeyValue(kv_pair.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn labels_default_to_file_stems() {
        let pairs = pair_labels(&paths(&["data/ctrl.fa", "treated.cds.fasta"]), &[]).unwrap();
        assert_eq!(pairs[0].0, "ctrl");
        assert_eq!(pairs[1].0, "treated.cds");
        assert_eq!(pairs[1].1, PathBuf::from("treated.cds.fasta"));
    }

    #[test]
    fn explicit_labels_are_paired_in_order() {
        let labels = vec!["s1".to_string(), " s2 ".to_string()];
        let pairs = pair_labels(&paths(&["a.fa", "b.fa"]), &labels).unwrap();
        assert_eq!(pairs[0], ("s1".to_string(), PathBuf::from("a.fa")));
        assert_eq!(pairs[1], ("s2".to_string(), PathBuf::from("b.fa")));
    }

    #[test]
    fn label_count_must_match_inputs() {
        let labels = vec!["s1".to_string()];
        assert_eq!(
            pair_labels(&paths(&["a.fa", "b.fa"]), &labels),
            Err(ParseError::LabelCountMismatch {
                inputs: 2,
                labels: 1
            })
        );
    }

    #[test]
    fn empty_label_is_rejected() {
        let labels = vec![" ".to_string()];
        assert_eq!(
            pair_labels(&paths(&["a.fa"]), &labels),
            Err(ParseError::EmptyLabel)
        );
    }

    #[test]
    fn efficiency_presets_parse_by_name() {
        assert_eq!(
            parse_efficiencies("tuller-2010"),
            Ok(EfficiencyPreset::Tuller2010)
        );
        assert_eq!(
            parse_efficiencies("dos-reis-2004"),
            Ok(EfficiencyPreset::DosReis2004)
        );
        assert!(matches!(
            parse_efficiencies("sharp-1987"),
            Err(ParseError::UnknownEfficiencies(_))
        ));
    }

    #[test]
    fn key_value_pairs_split_on_first_equals() {
        assert_eq!(parse_key_value("a.b=c=d"), Ok(("a.b", "c=d")));
        assert_eq!(parse_key_value(" genetic-code = 2"), Ok(("genetic-code", "2")));
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=3").is_err());
    }
}
