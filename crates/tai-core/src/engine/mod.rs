//! # Engine Module
//!
//! The tAI computation proper, built on the stateless data of [`crate::core`].
//!
//! ## Architecture
//!
//! - **Adaptiveness** ([`adaptiveness`]) - Absolute adaptiveness W of each codon from tRNA
//!   copy numbers and wobble efficiencies, normalized into relative weights w
//! - **Scoring** ([`scoring`]) - Per-codon weights of a transcript, its geometric-mean tAI
//!   and the fixed-width windows around its start and stop codons
//! - **Profiles** ([`profile`]) - Streaming per-position means of the windows across transcripts
//! - **Configuration** ([`config`]) - Resolved run parameters and their builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Top-level error type of a run
//!
//! Everything here is computed once per run from immutable inputs; samples are
//! processed one after another on the calling thread.

pub mod adaptiveness;
pub mod config;
pub mod error;
pub mod profile;
pub mod progress;
pub mod scoring;
pub mod utils;
