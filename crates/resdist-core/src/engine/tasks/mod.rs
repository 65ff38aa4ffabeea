//! Computational units of the proximity analysis.
//!
//! Each task consumes data prepared by the previous phase and reports its
//! progress step by step. With the `parallel` feature enabled the per-residue
//! work is spread over the rayon thread pool; results keep their input order
//! either way.

pub mod pair_distances;
pub mod residue_profiles;
