//! # resdist Core Library
//!
//! Pairwise residue proximity analysis for protein structures. For every ordered
//! pair of residues the library computes the distance between their centers of
//! mass, between their centers of geometry, and between their nearest atoms, and
//! counts the pairs that fall below a distance cutoff.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless data models (`MolecularSystem`), the PDB
//!   reader, the CSV table writer and pure geometric functions.
//!
//! - **[`engine`]: The Logic Core.** Residue filtering, pair enumeration, per-residue
//!   center computation, pair distance tasks and cutoff summaries, together with the
//!   configuration, error and progress types they share.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures that tie `core` and
//!   `engine` together, e.g. [`workflows::proximity::run`].

pub mod core;
pub mod engine;
pub mod workflows;
