//! Input readers and output writers around the tAI engine.
//!
//! - [`trna`] reads tRNA gene tables into copy numbers.
//! - [`fasta`] reads coding sequences.
//! - [`tables`] writes the tab-separated result tables.

pub mod error;
pub mod fasta;
pub mod tables;
pub mod trna;
