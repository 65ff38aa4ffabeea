use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;
use phf::{Set, phf_set};

/// Solvent and ion residue names that never take part in the analysis.
static EXCLUDED_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "WAT", "Na+", "Cl-", "HOH",
};

/// Whether a residue name belongs to the fixed solvent/ion exclusion set.
///
/// Matching is exact (case-sensitive) after trimming surrounding whitespace.
pub fn is_excluded_residue(name: &str) -> bool {
    EXCLUDED_RESIDUE_NAMES.contains(name.trim())
}

/// Drops excluded residues, preserving the order of the remaining ones.
///
/// Ids that do not resolve to a residue of `system` are dropped as well.
pub fn filter_residues(system: &MolecularSystem, residue_ids: &[ResidueId]) -> Vec<ResidueId> {
    residue_ids
        .iter()
        .copied()
        .filter(|&id| {
            system
                .residue(id)
                .is_some_and(|residue| !is_excluded_residue(&residue.name))
        })
        .collect()
}

/// All non-excluded residues of the system, in canonical order.
pub fn select_residues(system: &MolecularSystem) -> Vec<ResidueId> {
    filter_residues(system, &system.residues_in_order())
}
