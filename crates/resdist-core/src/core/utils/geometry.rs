use nalgebra::{Point3, Vector3};

/// Unweighted mean position of a set of points.
///
/// Returns `None` for an empty set, where the mean is undefined.
pub fn center_of_geometry(positions: &[Point3<f64>]) -> Option<Point3<f64>> {
    if positions.is_empty() {
        return None;
    }
    let sum: Vector3<f64> = positions.iter().map(|p| p.coords).sum();
    Some(Point3::from(sum / positions.len() as f64))
}

/// Mass-weighted mean position, Σ(mᵢ·pᵢ) / Σmᵢ.
///
/// Returns `None` for an empty set or when the total mass is not positive.
pub fn center_of_mass(weighted: &[(Point3<f64>, f64)]) -> Option<Point3<f64>> {
    let total_mass: f64 = weighted.iter().map(|(_, mass)| mass).sum();
    if weighted.is_empty() || !(total_mass > 0.0) {
        return None;
    }
    let weighted_sum: Vector3<f64> = weighted.iter().map(|(p, mass)| p.coords * *mass).sum();
    Some(Point3::from(weighted_sum / total_mass))
}

/// Euclidean (L2) distance, sqrt(dx² + dy² + dz²).
#[inline]
pub fn euclidean_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a - b).norm()
}

/// Exact minimum distance over every (a, b) combination of the two sets.
///
/// The search is exhaustive. Squared distances are compared and a single square
/// root is taken at the end, which yields the same value as taking the minimum of
/// the individual distances. Returns `None` when either set is empty.
pub fn min_pairwise_distance(set_a: &[Point3<f64>], set_b: &[Point3<f64>]) -> Option<f64> {
    if set_a.is_empty() || set_b.is_empty() {
        return None;
    }
    let min_squared = set_a
        .iter()
        .flat_map(|a| set_b.iter().map(move |b| (a - b).norm_squared()))
        .fold(f64::INFINITY, f64::min);
    Some(min_squared.sqrt())
}
