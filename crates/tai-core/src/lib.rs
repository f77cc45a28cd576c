//! # tRNA Adaptation Index
//!
//! Computes the tRNA Adaptation Index (tAI) of coding sequences from the tRNA gene
//! copy numbers of an organism and the codon-anticodon wobble pairing model.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless value types (`Codon`, `Anticodon`), the
//!   static wobble and genetic-code tables, and readers/writers for the tRNA table,
//!   FASTA input and tab-separated result files.
//!
//! - **[`engine`]: The Computation.** Absolute and relative codon adaptiveness,
//!   transcript scoring with start/stop windows, and the streaming metagene profile
//!   accumulator, together with configuration, errors and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Runs the complete computation for a resolved
//!   configuration: codon weights once, then every sample in turn.

pub mod core;
pub mod engine;
pub mod workflows;
