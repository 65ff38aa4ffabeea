use crate::core::models::ids::ResidueId;
use crate::core::models::system::MolecularSystem;
use crate::engine::config::MassPolicy;
use crate::engine::error::EngineError;
use crate::engine::metrics::ResidueProfile;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builds one profile per selected residue, in selection order.
///
/// Fails on the first residue (in selection order) that is empty or, under the
/// strict mass policy, lacks atomic masses.
#[instrument(skip_all, name = "residue_profiles_task")]
pub fn run(
    system: &MolecularSystem,
    residue_ids: &[ResidueId],
    policy: MassPolicy,
    reporter: &ProgressReporter,
) -> Result<Vec<ResidueProfile>, EngineError> {
    info!(num_residues = residue_ids.len(), "Computing residue centers.");

    reporter.report(Progress::TaskStart {
        total_steps: residue_ids.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = residue_ids.iter();

    #[cfg(feature = "parallel")]
    let iterator = residue_ids.par_iter();

    let results: Vec<Result<ResidueProfile, EngineError>> = iterator
        .map(|&residue_id| {
            let profile = ResidueProfile::build(system, residue_id, policy);
            reporter.report(Progress::TaskIncrement);
            profile
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use nalgebra::Point3;
    use std::sync::Mutex;

    fn system_with_empty_residue() -> (MolecularSystem, Vec<ResidueId>) {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain(0, 'A');
        let full = system.add_residue(chain_id, 1, None, false, "ALA").unwrap();
        system.add_atom_to_residue(
            full,
            Atom::new("CA", full, Point3::new(1.0, 2.0, 3.0)).with_element("C"),
        );
        let empty = system.add_residue(chain_id, 2, None, false, "GLY").unwrap();
        (system, vec![full, empty])
    }

    #[test]
    fn profiles_follow_selection_order() {
        let (system, ids) = system_with_empty_residue();
        let reporter = ProgressReporter::new();
        let profiles = run(&system, &ids[..1], MassPolicy::Strict, &reporter).unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].residue_id, ids[0]);
        assert_eq!(profiles[0].center_of_mass, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn empty_residue_fails_the_task() {
        let (system, ids) = system_with_empty_residue();
        let result = run(&system, &ids, MassPolicy::Strict, &ProgressReporter::new());
        match result {
            Err(EngineError::EmptyResidue { residue }) => assert_eq!(residue, "GLY A:2"),
            other => panic!("expected EmptyResidue, got {other:?}"),
        }
    }

    #[test]
    fn reports_one_increment_per_residue() {
        let (system, ids) = system_with_empty_residue();
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));

        run(&system, &ids[..1], MassPolicy::Strict, &reporter).unwrap();
        drop(reporter);

        assert_eq!(
            events.into_inner().unwrap(),
            vec![
                Progress::TaskStart { total_steps: 1 },
                Progress::TaskIncrement,
                Progress::TaskFinish,
            ]
        );
    }
}
