//! # Workflows Module
//!
//! High-level entry points that run a complete analysis on a parsed structure.
//!
//! - **Proximity Workflow** ([`proximity`]) - Residue selection, per-residue centers,
//!   all-pairs distances and cutoff summary in one call.

pub mod proximity;
