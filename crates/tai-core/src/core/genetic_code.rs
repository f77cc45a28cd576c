use crate::core::models::codon::{Base, Codon};
use phf::{Map, phf_map};

/// NCBI translation tables: `id => (name, amino acids in TCAG codon order)`.
static TRANSLATION_TABLES: Map<u8, (&'static str, &'static str)> = phf_map! {
    1u8 => ("Standard", "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    2u8 => ("Vertebrate Mitochondrial", "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG"),
    3u8 => ("Yeast Mitochondrial", "FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    4u8 => ("Mold, Protozoan, Coelenterate Mitochondrial and Mycoplasma/Spiroplasma", "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    5u8 => ("Invertebrate Mitochondrial", "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG"),
    6u8 => ("Ciliate, Dasycladacean and Hexamita Nuclear", "FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    9u8 => ("Echinoderm and Flatworm Mitochondrial", "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    10u8 => ("Euplotid Nuclear", "FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    11u8 => ("Bacterial, Archaeal and Plant Plastid", "FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    12u8 => ("Alternative Yeast Nuclear", "FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    13u8 => ("Ascidian Mitochondrial", "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG"),
    14u8 => ("Alternative Flatworm Mitochondrial", "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    15u8 => ("Blepharisma Macronuclear", "FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    16u8 => ("Chlorophycean Mitochondrial", "FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    21u8 => ("Trematode Mitochondrial", "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG"),
    22u8 => ("Scenedesmus obliquus Mitochondrial", "FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    23u8 => ("Thraustochytrium Mitochondrial", "FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    24u8 => ("Rhabdopleuridae Mitochondrial", "FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
    25u8 => ("Candidate Division SR1 and Gracilibacteria", "FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    26u8 => ("Pachysolen tannophilus Nuclear", "FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    27u8 => ("Karyorelict Nuclear", "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    28u8 => ("Condylostoma Nuclear", "FFLLSSSSYYQQCCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    29u8 => ("Mesodinium Nuclear", "FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    30u8 => ("Peritrich Nuclear", "FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    31u8 => ("Blastocrithidia Nuclear", "FFLLSSSSYYEECCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG"),
    33u8 => ("Cephalodiscidae Mitochondrial UAA-Tyr", "FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG"),
};

pub const STANDARD_TABLE_ID: u8 = 1;
pub const STOP_SYMBOL: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneticCode {
    id: u8,
    name: &'static str,
    amino_acids: &'static [u8],
}

impl GeneticCode {
    /// Looks up an NCBI translation table by its numeric id.
    pub fn from_id(id: u8) -> Option<Self> {
        TRANSLATION_TABLES
            .get(&id)
            .map(|&(name, amino_acids)| Self {
                id,
                name,
                amino_acids: amino_acids.as_bytes(),
            })
    }

    pub fn standard() -> Self {
        Self {
            id: STANDARD_TABLE_ID,
            name: "Standard",
            amino_acids: b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All 64 codons with their one-letter amino acid, stop codons marked with
    /// [`STOP_SYMBOL`], in TCAG order.
    pub fn codons(&self) -> impl Iterator<Item = (Codon, char)> + '_ {
        Base::TCAG.into_iter().flat_map(move |first| {
            Base::TCAG.into_iter().flat_map(move |second| {
                Base::TCAG.into_iter().map(move |third| {
                    let codon = Codon::new(first, second, third);
                    (codon, self.translate(&codon))
                })
            })
        })
    }

    pub fn translate(&self, codon: &Codon) -> char {
        let index = codon
            .bases()
            .iter()
            .fold(0usize, |acc, base| acc * 4 + tcag_index(*base));
        self.amino_acids
            .get(index)
            .map(|&aa| aa as char)
            .unwrap_or(STOP_SYMBOL)
    }

    pub fn is_stop(&self, codon: &Codon) -> bool {
        self.translate(codon) == STOP_SYMBOL
    }

    pub fn stop_codons(&self) -> Vec<Codon> {
        self.codons()
            .filter(|(_, aa)| *aa == STOP_SYMBOL)
            .map(|(codon, _)| codon)
            .collect()
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::standard()
    }
}

fn tcag_index(base: Base) -> usize {
    match base {
        Base::U => 0,
        Base::C => 1,
        Base::A => 2,
        Base::G => 3,
    }
}

/// Ids of every supported translation table, ascending.
pub fn available_ids() -> Vec<u8> {
    let mut ids: Vec<u8> = TRANSLATION_TABLES.keys().copied().collect();
    ids.sort_unstable();
    ids
}
