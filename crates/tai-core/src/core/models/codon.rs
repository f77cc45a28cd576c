use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An RNA nucleotide.
///
/// DNA input is accepted everywhere a base is parsed: `T` is read as [`Base::U`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A,
    C,
    G,
    U,
}

impl Base {
    /// Bases in the TCAG order used by the NCBI translation tables.
    pub const TCAG: [Base; 4] = [Base::U, Base::C, Base::A, Base::G];

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte.to_ascii_uppercase() {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'U' | b'T' => Some(Base::U),
            _ => None,
        }
    }

    pub fn complement(self) -> Self {
        match self {
            Base::A => Base::U,
            Base::U => Base::A,
            Base::C => Base::G,
            Base::G => Base::C,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTripletError {
    #[error("Expected exactly 3 nucleotides, found {length} in '{value}'")]
    InvalidLength { value: String, length: usize },
    #[error("Unrecognized nucleotide '{base}' in '{value}'")]
    InvalidBase { value: String, base: char },
}

fn parse_triplet(bytes: &[u8]) -> Result<[Base; 3], ParseTripletError> {
    if bytes.len() != 3 {
        return Err(ParseTripletError::InvalidLength {
            value: String::from_utf8_lossy(bytes).into_owned(),
            length: bytes.len(),
        });
    }
    let mut bases = [Base::A; 3];
    for (slot, &byte) in bases.iter_mut().zip(bytes) {
        *slot = Base::from_byte(byte).ok_or_else(|| ParseTripletError::InvalidBase {
            value: String::from_utf8_lossy(bytes).into_owned(),
            base: byte as char,
        })?;
    }
    Ok(bases)
}

/// A messenger codon over {A, C, G, U}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([Base; 3]);

impl Codon {
    pub const fn new(first: Base, second: Base, third: Base) -> Self {
        Self([first, second, third])
    }

    /// Parses a codon from raw sequence bytes (DNA or RNA, any case).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseTripletError> {
        parse_triplet(bytes).map(Self)
    }

    pub fn bases(&self) -> [Base; 3] {
        self.0
    }

    pub fn last(&self) -> Base {
        self.0[2]
    }

    /// The reverse complement of this codon, i.e. the anticodon that pairs with it
    /// under strict Watson-Crick rules.
    pub fn anticodon(&self) -> Anticodon {
        let [a, b, c] = self.0;
        Anticodon([c.complement(), b.complement(), a.complement()])
    }
}

impl FromStr for Codon {
    type Err = ParseTripletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.trim().as_bytes())
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}{}{}", a, b, c)
    }
}

/// A tRNA anticodon, written 5' to 3'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Anticodon([Base; 3]);

impl Anticodon {
    pub const fn new(first: Base, second: Base, third: Base) -> Self {
        Self([first, second, third])
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseTripletError> {
        parse_triplet(bytes).map(Self)
    }

    /// The wobble position (first base of the anticodon).
    pub fn first(&self) -> Base {
        self.0[0]
    }

    /// Returns the same anticodon with its wobble base replaced.
    pub fn with_first(&self, base: Base) -> Self {
        let [_, b, c] = self.0;
        Self([base, b, c])
    }
}

impl FromStr for Anticodon {
    type Err = ParseTripletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.trim().as_bytes())
    }
}

impl fmt::Display for Anticodon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}{}{}", a, b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codon_parses_dna_and_rna_in_any_case() {
        let from_dna: Codon = "atg".parse().unwrap();
        let from_rna: Codon = "AUG".parse().unwrap();
        assert_eq!(from_dna, from_rna);
        assert_eq!(from_dna.to_string(), "AUG");
    }

    #[test]
    fn codon_rejects_unknown_bases_and_wrong_length() {
        assert!(matches!(
            "ANG".parse::<Codon>(),
            Err(ParseTripletError::InvalidBase { base: 'N', .. })
        ));
        assert!(matches!(
            "AUGC".parse::<Codon>(),
            Err(ParseTripletError::InvalidLength { length: 4, .. })
        ));
        assert!(matches!(
            Codon::from_bytes(b""),
            Err(ParseTripletError::InvalidLength { length: 0, .. })
        ));
    }

    #[test]
    fn anticodon_is_reverse_complement() {
        let codon: Codon = "UUC".parse().unwrap();
        assert_eq!(codon.anticodon().to_string(), "GAA");

        let codon: Codon = "GCU".parse().unwrap();
        assert_eq!(codon.anticodon().to_string(), "AGC");
    }

    #[test]
    fn with_first_replaces_only_the_wobble_base() {
        let anticodon: Anticodon = "AGC".parse().unwrap();
        assert_eq!(anticodon.with_first(Base::G).to_string(), "GGC");
        assert_eq!(anticodon.first(), Base::A);
    }

    #[test]
    fn complement_is_an_involution() {
        for base in Base::TCAG {
            assert_eq!(base.complement().complement(), base);
        }
    }
}
