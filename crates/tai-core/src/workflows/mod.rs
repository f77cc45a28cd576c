//! # Workflows Module
//!
//! End-to-end entry points tying [`crate::core`] and [`crate::engine`] together.
//!
//! - **tAI Workflow** ([`tai`]) - Loads the tRNA table once, derives the codon weights,
//!   then scores every sample's transcripts and builds its metagene profile.

pub mod tai;
