//! Provides input/output functionality for structure files and result tables.
//!
//! Structure formats implement the [`traits::StructureFile`] interface; the
//! [`table`] module writes result rows as CSV, atomically.

pub mod pdb;
pub mod table;
pub mod traits;
