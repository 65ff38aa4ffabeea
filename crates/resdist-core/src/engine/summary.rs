use super::metrics::PairRecord;
use std::fmt;

/// Number of ordered pairs whose distance lies strictly below the cutoff,
/// counted separately for each distance kind.
///
/// Self-pairs are included, so with a non-negative cutoff every residue
/// contributes at least one pair to each count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub cutoff: f64,
    pub nearest: usize,
    pub center_of_mass: usize,
    pub center_of_geometry: usize,
}

impl Summary {
    pub fn from_records(records: &[PairRecord], cutoff: f64) -> Self {
        let below = |distance: f64| distance < cutoff;
        Self {
            cutoff,
            nearest: records.iter().filter(|r| below(r.distance_nearest)).count(),
            center_of_mass: records
                .iter()
                .filter(|r| below(r.distance_center_of_mass))
                .count(),
            center_of_geometry: records
                .iter()
                .filter(|r| below(r.distance_center_of_geometry))
                .count(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cutoff Length: {} Angstrom", self.cutoff)?;
        writeln!(f, "Distances between:")?;
        writeln!(f, "\tNearest: {}", self.nearest)?;
        writeln!(f, "\tCenter of mass: {}", self.center_of_mass)?;
        write!(f, "\tCenter of geometry: {}", self.center_of_geometry)
    }
}
