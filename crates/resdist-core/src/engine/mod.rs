//! # Engine Module
//!
//! The computational side of the residue proximity analysis.
//!
//! ## Overview
//!
//! Given a parsed [`MolecularSystem`](crate::core::models::system::MolecularSystem),
//! the engine selects the residues that take part in the analysis, computes their
//! centers once, evaluates the three distance metrics for every ordered residue
//! pair and condenses the result into cutoff counts.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Cutoff and mass policy, validated by a builder
//! - **Selection** ([`filter`]) - Solvent and ion exclusion, canonical residue order
//! - **Enumeration** ([`pairs`]) - Row-major ordered pair indexing
//! - **Metrics** ([`metrics`]) - Residue centers, pair distances and the output row type
//! - **Summary** ([`summary`]) - Strict below-cutoff counts per distance kind
//! - **Tasks** ([`tasks`]) - Optionally parallel per-residue and per-row computation
//! - **Progress Monitoring** ([`progress`]) - Phase and task events for front ends
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod pairs;
pub mod progress;
pub mod summary;
pub mod tasks;
