//! # Core Module
//!
//! Stateless building blocks of the library: the structure data model, file I/O
//! and pure geometric helpers.
//!
//! - **Molecular Representation** ([`models`]) - Atoms, residues, chains and the owning system
//! - **File I/O** ([`io`]) - PDB reading (plain or gzip) and atomic CSV table writing
//! - **Utilities** ([`utils`]) - Element masses and geometric primitives (centers, distances)

pub mod io;
pub mod models;
pub mod utils;
