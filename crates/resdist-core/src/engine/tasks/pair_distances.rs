use crate::engine::metrics::{PairRecord, ResidueProfile, pair_record};
use crate::engine::pairs::PairEnumerator;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Computes a record for every ordered pair of profiles.
///
/// Rows come out in enumeration order: all partners of the first profile,
/// then all partners of the second, and so on. Progress advances once per
/// completed left residue.
#[instrument(skip_all, name = "pair_distances_task")]
pub fn run(profiles: &[ResidueProfile], reporter: &ProgressReporter) -> Vec<PairRecord> {
    let n = profiles.len();
    let pairs = PairEnumerator::new(n);
    let total = pairs.total();
    info!(num_residues = n, num_pairs = total, "Computing pairwise distances.");

    if total == 0 {
        return Vec::new();
    }

    reporter.report(Progress::TaskStart {
        total_steps: n as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = pairs;

    #[cfg(feature = "parallel")]
    let iterator = (0..total)
        .into_par_iter()
        .filter_map(|index| pairs.pair_at(index));

    let records: Vec<PairRecord> = iterator
        .map(|pair| {
            let record = pair_record(&profiles[pair.left], &profiles[pair.right]);
            if pair.right + 1 == n {
                reporter.report(Progress::TaskIncrement);
            }
            record
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    info!(num_records = records.len(), "Pairwise distances complete.");
    records
}
