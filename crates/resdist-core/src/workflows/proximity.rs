use crate::core::models::system::MolecularSystem;
use crate::engine::config::ProximityConfig;
use crate::engine::error::EngineError;
use crate::engine::filter;
use crate::engine::metrics::PairRecord;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::summary::Summary;
use crate::engine::tasks;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ProximityReport {
    /// Residues that took part in the analysis after solvent and ion exclusion.
    pub residue_count: usize,
    /// One record per ordered residue pair, `residue_count²` in total.
    pub records: Vec<PairRecord>,
    pub summary: Summary,
}

/// Runs the full residue proximity analysis on `system`.
///
/// The system is only read. Records are ordered by the left residue, then the
/// right residue, both in canonical order (model by model, chain by chain, file
/// order within a chain), so repeated runs on the same input produce identical
/// output.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResidue`] or [`EngineError::MissingMass`] when a
/// selected residue cannot be profiled. No records are produced in that case.
#[instrument(skip_all, name = "proximity_workflow")]
pub fn run(
    system: &MolecularSystem,
    config: &ProximityConfig,
    reporter: &ProgressReporter,
) -> Result<ProximityReport, EngineError> {
    info!(
        cutoff = config.cutoff,
        mass_policy = ?config.mass_policy,
        "Starting proximity analysis."
    );

    let selected = reporter.phase("Residue Selection", || {
        let selected = filter::select_residues(system);
        let excluded = system.residue_count() - selected.len();
        info!(
            selected = selected.len(),
            excluded, "Selected residues for analysis."
        );
        if excluded > 0 {
            reporter.report(Progress::Message(format!(
                "Excluded {excluded} solvent and ion residues."
            )));
        }
        Ok::<_, EngineError>(selected)
    })?;

    if selected.is_empty() {
        warn!("No residues left after excluding solvent and ions; the table will be empty.");
    }

    let profiles = reporter.phase("Residue Centers", || {
        tasks::residue_profiles::run(system, &selected, config.mass_policy, reporter)
    })?;

    let records = reporter.phase("Pair Distances", || {
        Ok::<_, EngineError>(tasks::pair_distances::run(&profiles, reporter))
    })?;

    let summary = Summary::from_records(&records, config.cutoff);
    info!(
        nearest = summary.nearest,
        center_of_mass = summary.center_of_mass,
        center_of_geometry = summary.center_of_geometry,
        "Proximity analysis complete."
    );

    Ok(ProximityReport {
        residue_count: profiles.len(),
        records,
        summary,
    })
}
