//! # Core Module
//!
//! Stateless building blocks of the tRNA Adaptation Index: the reference data of
//! the codon-anticodon wobble model, the genetic code tables, the plain data types
//! flowing through the computation, and the readers/writers for the file formats
//! the tool consumes and produces.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Codons, anticodons, tRNA copy numbers, weights and scores
//! - **Wobble Model** ([`wobble`]) - Codon-anticodon candidates and pairing penalties (Sij)
//! - **Genetic Codes** ([`genetic_code`]) - NCBI translation tables used to enumerate codons
//! - **File I/O** ([`io`]) - tRNA tables, FASTA input and tab-separated result tables
//!
//! ## Scientific Foundation
//!
//! - dos Reis M., Savva R., Wernisch L. (2004). Solving the riddle of codon usage
//!   preferences: a test for translational selection. *Nucleic Acids Research* 32:5036-5044.
//! - Tuller T. et al. (2010). An evolutionarily conserved mechanism for controlling the
//!   efficiency of protein translation. *Cell* 141:344-354.

pub mod genetic_code;
pub mod io;
pub mod models;
pub mod wobble;
