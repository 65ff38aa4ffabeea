//! # Core Models Module
//!
//! Data structures used to represent a parsed protein structure.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom with coordinates, element and optional mass
//! - [`residue`] - Residue identity (sequence number, insertion code, name) and its atoms
//! - [`chain`] - Ordered residues of a chain
//! - [`system`] - Arena-backed owner of chains, residues and atoms
//! - [`ids`] - Stable identifier types and the file-level residue key
//!
//! ## Usage
//!
//! ```ignore
//! use resdist::core::models::{system::MolecularSystem, atom::Atom};
//!
//! let mut system = MolecularSystem::new();
//! let chain_id = system.add_chain(0, 'A');
//! let residue_id = system.add_residue(chain_id, 1, None, false, "ALA").unwrap();
//!
//! let atom = Atom::new("CA", residue_id, Point3::new(0.0, 0.0, 0.0)).with_element("C");
//! system.add_atom_to_residue(residue_id, atom);
//! ```

pub mod atom;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod system;
