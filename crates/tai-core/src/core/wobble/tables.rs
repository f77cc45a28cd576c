use phf::{Map, phf_map};

/// Candidate anticodons able to decode each of the 64 codons under wobble rules.
///
/// Only the number of candidates is consulted by the adaptiveness formulas for
/// two- and three-candidate codons; the anticodons themselves are derived from
/// the codon. Several candidates have no tRNA gene in most genomes and simply
/// end up with a copy number of zero.
pub static CODON_ANTICODONS: Map<&'static str, &'static [&'static str]> = phf_map! {
    "UUU" => &["GAA", "AAA"],
    "UUC" => &["GAA"],
    "UUA" => &["UAA"],
    "UUG" => &["UAA", "CAA"],
    "UCU" => &["AGA", "GGA"],
    "UCC" => &["AGA", "GGA"],
    "UCA" => &["AGA", "UGA"],
    "UCG" => &["UGA", "CGA"],
    "UAU" => &["AUA", "GUA"],
    "UAC" => &["GUA"],
    "UAA" => &["UUA"],
    "UAG" => &["CUA"],
    "UGU" => &["ACA", "GCA"],
    "UGC" => &["GCA"],
    "UGA" => &["UCA"],
    "UGG" => &["CCA"],
    "CUU" => &["AAG", "GAG"],
    "CUC" => &["AAG", "GAG"],
    "CUA" => &["AAG", "UAG"],
    "CUG" => &["UAG", "CAG"],
    "CCU" => &["AGG", "GGG"],
    "CCC" => &["AGG", "GGG"],
    "CCA" => &["AGG", "UGG"],
    "CCG" => &["UGG", "CGG"],
    "CAU" => &["GUG", "AUG"],
    "CAC" => &["GUG"],
    "CAA" => &["UUG"],
    "CAG" => &["UUG", "CUG"],
    "CGU" => &["ACG", "GCG"],
    "CGC" => &["ACG", "GCG"],
    "CGA" => &["ACG", "UCG"],
    "CGG" => &["UCG", "CCG"],
    "AUU" => &["AAU", "GAU"],
    "AUC" => &["AAU", "GAU"],
    "AUA" => &["AAU", "GAU", "UAU"],
    "AUG" => &["CAU"],
    "ACU" => &["AGU", "GGU"],
    "ACC" => &["AGU", "GGU"],
    "ACA" => &["AGU", "UGU"],
    "ACG" => &["UGU", "CGU"],
    "AAU" => &["AUU", "GUU"],
    "AAC" => &["GUU"],
    "AAA" => &["UUU"],
    "AAG" => &["UUU", "CUU"],
    "AGU" => &["ACU", "GCU"],
    "AGC" => &["GCU"],
    "AGA" => &["UCU"],
    "AGG" => &["UCU", "CCU"],
    "GUU" => &["AAC", "GAC"],
    "GUC" => &["AAC", "GAC"],
    "GUA" => &["AAC", "UAC"],
    "GUG" => &["UAC", "CAC"],
    "GCU" => &["AGC", "GGC"],
    "GCC" => &["AGC", "GCC"],
    "GCA" => &["AGC", "UGC"],
    "GCG" => &["UGC", "CGC"],
    "GAU" => &["GUC", "AUC"],
    "GAC" => &["GUC"],
    "GAA" => &["UUC"],
    "GAG" => &["UUC", "CUC"],
    "GGU" => &["GCC", "ACC"],
    "GGC" => &["GCC", "ACC"],
    "GGA" => &["UCC", "ACC"],
    "GGG" => &["UCC", "CCC"],
};

/// Selective constraints (Sij) on codon-anticodon pairings, dos Reis et al. (2004).
///
/// `I` stands for inosine (adenosine edited at the wobble position) and `L` for
/// lysidine.
pub static PAIRING_PENALTIES: Map<&'static str, f64> = phf_map! {
    "I:U" => 0.0,
    "G:C" => 0.0,
    "U:A" => 0.0,
    "C:G" => 0.0,
    "G:U" => 0.41,
    "I:C" => 0.28,
    "I:A" => 0.999,
    "U:G" => 0.68,
    "L:A" => 0.89,
};

/// G:U penalty re-estimated by Tuller et al. (2010).
pub const TULLER_2010_G_U_PENALTY: f64 = 0.561;
