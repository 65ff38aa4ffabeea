use super::config::MassPolicy;
use super::error::EngineError;
use crate::core::io::table::TableRow;
use crate::core::models::ids::{ResidueId, ResidueKey};
use crate::core::models::residue::Residue;
use crate::core::models::system::MolecularSystem;
use crate::core::utils::geometry;
use nalgebra::Point3;
use serde::Serialize;
use tracing::warn;

/// One output row: the three distances between an ordered pair of residues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairRecord {
    pub name_left: String,
    pub id_left: isize,
    pub name_right: String,
    pub id_right: isize,
    pub distance_center_of_geometry: f64,
    pub distance_center_of_mass: f64,
    pub distance_nearest: f64,
}

impl TableRow for PairRecord {
    const HEADERS: &'static [&'static str] = &[
        "name_left",
        "id_left",
        "name_right",
        "id_right",
        "distance_center_of_geometry",
        "distance_center_of_mass",
        "distance_nearest",
    ];
}

/// Everything the pair computation needs to know about one residue.
///
/// Centers are computed once per residue and reused for all of its pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueProfile {
    pub residue_id: ResidueId,
    pub name: String,
    pub sequence_number: isize,
    pub positions: Vec<Point3<f64>>,
    pub center_of_geometry: Point3<f64>,
    pub center_of_mass: Point3<f64>,
}

impl ResidueProfile {
    pub fn build(
        system: &MolecularSystem,
        residue_id: ResidueId,
        policy: MassPolicy,
    ) -> Result<Self, EngineError> {
        let residue = lookup(system, residue_id)?;
        let positions = residue_positions(system, residue);
        let center_of_geometry = geometry::center_of_geometry(&positions).ok_or_else(|| {
            EngineError::EmptyResidue {
                residue: describe(system, residue),
            }
        })?;
        let center_of_mass = center_of_mass(system, residue_id, policy)?;

        Ok(Self {
            residue_id,
            name: residue.name.clone(),
            sequence_number: residue.sequence_number,
            positions,
            center_of_geometry,
            center_of_mass,
        })
    }
}

fn lookup(system: &MolecularSystem, residue_id: ResidueId) -> Result<&Residue, EngineError> {
    system
        .residue(residue_id)
        .ok_or_else(|| EngineError::Internal(format!("Residue {:?} not found", residue_id)))
}

fn residue_positions(system: &MolecularSystem, residue: &Residue) -> Vec<Point3<f64>> {
    residue
        .atoms()
        .iter()
        .filter_map(|&atom_id| system.atom(atom_id))
        .map(|atom| atom.position)
        .collect()
}

/// Human-readable residue label used in errors and logs, e.g. `ALA A:12`.
fn describe(system: &MolecularSystem, residue: &Residue) -> String {
    let chain = system.chain(residue.chain_id).map_or(' ', |c| c.id);
    let key = ResidueKey::new(
        chain,
        residue.hetero,
        residue.sequence_number,
        residue.insertion_code,
    );
    format!("{} {}", residue.name, key)
}

/// Unweighted center of a residue's atoms.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResidue`] when the residue has no atoms.
pub fn center_of_geometry(
    system: &MolecularSystem,
    residue_id: ResidueId,
) -> Result<Point3<f64>, EngineError> {
    let residue = lookup(system, residue_id)?;
    geometry::center_of_geometry(&residue_positions(system, residue)).ok_or_else(|| {
        EngineError::EmptyResidue {
            residue: describe(system, residue),
        }
    })
}

/// Mass-weighted center of a residue's atoms.
///
/// Under [`MassPolicy::Strict`] every atom must carry a mass; under
/// [`MassPolicy::GeometricFallback`] a residue with missing or non-positive
/// total mass falls back to its center of geometry.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResidue`] when the residue has no atoms and
/// [`EngineError::MissingMass`] when a mass is missing under the strict policy.
pub fn center_of_mass(
    system: &MolecularSystem,
    residue_id: ResidueId,
    policy: MassPolicy,
) -> Result<Point3<f64>, EngineError> {
    let residue = lookup(system, residue_id)?;
    let atoms: Vec<_> = residue
        .atoms()
        .iter()
        .filter_map(|&atom_id| system.atom(atom_id))
        .collect();
    if atoms.is_empty() {
        return Err(EngineError::EmptyResidue {
            residue: describe(system, residue),
        });
    }

    let massless = atoms.iter().find(|atom| atom.mass.is_none());
    let weighted: Vec<_> = atoms
        .iter()
        .filter_map(|atom| atom.mass.map(|mass| (atom.position, mass)))
        .collect();
    let weighted_center = match massless {
        None => geometry::center_of_mass(&weighted),
        Some(_) => None,
    };

    match (weighted_center, policy) {
        (Some(center), _) => Ok(center),
        (None, MassPolicy::GeometricFallback) => {
            warn!(
                residue = %describe(system, residue),
                "Missing atomic masses; using the center of geometry as center of mass."
            );
            center_of_geometry(system, residue_id)
        }
        (None, MassPolicy::Strict) => Err(EngineError::MissingMass {
            residue: describe(system, residue),
            atom: massless.map_or_else(|| "<all>".to_string(), |atom| atom.name.clone()),
        }),
    }
}

pub fn distance_center_of_mass(left: &ResidueProfile, right: &ResidueProfile) -> f64 {
    geometry::euclidean_distance(&left.center_of_mass, &right.center_of_mass)
}

pub fn distance_center_of_geometry(left: &ResidueProfile, right: &ResidueProfile) -> f64 {
    geometry::euclidean_distance(&left.center_of_geometry, &right.center_of_geometry)
}

/// Minimum atom-to-atom distance between the two residues.
///
/// Profiles always hold at least one position, so the minimum exists; a self-pair
/// is exactly 0 because every atom is also paired with itself.
pub fn distance_nearest(left: &ResidueProfile, right: &ResidueProfile) -> f64 {
    geometry::min_pairwise_distance(&left.positions, &right.positions).unwrap_or(f64::NAN)
}

pub fn pair_record(left: &ResidueProfile, right: &ResidueProfile) -> PairRecord {
    PairRecord {
        name_left: left.name.clone(),
        id_left: left.sequence_number,
        name_right: right.name.clone(),
        id_right: right.sequence_number,
        distance_center_of_geometry: distance_center_of_geometry(left, right),
        distance_center_of_mass: distance_center_of_mass(left, right),
        distance_nearest: distance_nearest(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;

    fn add_residue(
        system: &mut MolecularSystem,
        seq: isize,
        name: &str,
        atoms: &[(&str, (f64, f64, f64), Option<f64>)],
    ) -> ResidueId {
        let chain_id = system.add_chain(0, 'A');
        let residue_id = system.add_residue(chain_id, seq, None, false, name).unwrap();
        for (atom_name, (x, y, z), mass) in atoms {
            let mut atom = Atom::new(atom_name, residue_id, Point3::new(*x, *y, *z));
            atom.mass = *mass;
            system.add_atom_to_residue(residue_id, atom);
        }
        residue_id
    }

    #[test]
    fn center_of_mass_is_mass_weighted() {
        let mut system = MolecularSystem::new();
        let id = add_residue(
            &mut system,
            1,
            "ALA",
            &[
                ("C1", (0.0, 0.0, 0.0), Some(3.0)),
                ("C2", (4.0, 0.0, 0.0), Some(1.0)),
            ],
        );

        let com = center_of_mass(&system, id, MassPolicy::Strict).unwrap();
        let cog = center_of_geometry(&system, id).unwrap();

        assert!((com - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-12);
        assert!((cog - Point3::new(2.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn strict_policy_fails_on_missing_mass() {
        let mut system = MolecularSystem::new();
        let id = add_residue(
            &mut system,
            1,
            "UNL",
            &[
                ("C1", (0.0, 0.0, 0.0), Some(12.0)),
                ("X1", (4.0, 0.0, 0.0), None),
            ],
        );

        let result = center_of_mass(&system, id, MassPolicy::Strict);
        match result {
            Err(EngineError::MissingMass { residue, atom }) => {
                assert_eq!(atom, "X1");
                assert_eq!(residue, "UNL A:1");
            }
            other => panic!("expected MissingMass, got {other:?}"),
        }
    }

    #[test]
    fn fallback_policy_uses_center_of_geometry_on_missing_mass() {
        let mut system = MolecularSystem::new();
        let id = add_residue(
            &mut system,
            1,
            "UNL",
            &[
                ("C1", (0.0, 0.0, 0.0), Some(12.0)),
                ("X1", (4.0, 0.0, 0.0), None),
            ],
        );

        let com = center_of_mass(&system, id, MassPolicy::GeometricFallback).unwrap();
        assert!((com - Point3::new(2.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn zero_total_mass_is_treated_as_missing() {
        let mut system = MolecularSystem::new();
        let id = add_residue(&mut system, 1, "UNL", &[("X1", (1.0, 1.0, 1.0), Some(0.0))]);
        assert!(matches!(
            center_of_mass(&system, id, MassPolicy::Strict),
            Err(EngineError::MissingMass { .. })
        ));
        assert!(center_of_mass(&system, id, MassPolicy::GeometricFallback).is_ok());
    }

    #[test]
    fn empty_residue_is_an_error_for_both_centers() {
        let mut system = MolecularSystem::new();
        let id = add_residue(&mut system, 1, "GLY", &[]);

        assert!(matches!(
            center_of_geometry(&system, id),
            Err(EngineError::EmptyResidue { .. })
        ));
        assert!(matches!(
            center_of_mass(&system, id, MassPolicy::GeometricFallback),
            Err(EngineError::EmptyResidue { .. })
        ));
        assert!(matches!(
            ResidueProfile::build(&system, id, MassPolicy::Strict),
            Err(EngineError::EmptyResidue { .. })
        ));
    }

    #[test]
    fn pair_record_for_two_single_atom_residues() {
        let mut system = MolecularSystem::new();
        let a = add_residue(&mut system, 1, "ALA", &[("CA", (0.0, 0.0, 0.0), Some(1.0))]);
        let b = add_residue(&mut system, 2, "GLY", &[("CA", (3.0, 4.0, 0.0), Some(1.0))]);
        let pa = ResidueProfile::build(&system, a, MassPolicy::Strict).unwrap();
        let pb = ResidueProfile::build(&system, b, MassPolicy::Strict).unwrap();

        let record = pair_record(&pa, &pb);
        assert_eq!(record.name_left, "ALA");
        assert_eq!(record.id_left, 1);
        assert_eq!(record.name_right, "GLY");
        assert_eq!(record.id_right, 2);
        assert_eq!(record.distance_center_of_mass, 5.0);
        assert_eq!(record.distance_center_of_geometry, 5.0);
        assert_eq!(record.distance_nearest, 5.0);

        let self_record = pair_record(&pa, &pa);
        assert_eq!(self_record.distance_center_of_mass, 0.0);
        assert_eq!(self_record.distance_center_of_geometry, 0.0);
        assert_eq!(self_record.distance_nearest, 0.0);
    }

    #[test]
    fn nearest_distance_is_not_bounded_by_center_distance() {
        // The centers nearly coincide while every atom pair stays far apart.
        let mut system = MolecularSystem::new();
        let a = add_residue(
            &mut system,
            1,
            "LYS",
            &[
                ("C1", (-5.0, 0.0, 0.0), Some(12.0)),
                ("C2", (5.0, 0.0, 0.0), Some(12.0)),
            ],
        );
        let b = add_residue(&mut system, 2, "GLY", &[("CA", (0.0, 1.0, 0.0), Some(12.0))]);
        let pa = ResidueProfile::build(&system, a, MassPolicy::Strict).unwrap();
        let pb = ResidueProfile::build(&system, b, MassPolicy::Strict).unwrap();

        let record = pair_record(&pa, &pb);
        assert_eq!(record.distance_center_of_geometry, 1.0);
        assert!(record.distance_nearest > record.distance_center_of_geometry);
        assert!((record.distance_nearest - 26.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn nearest_distance_matches_brute_force_over_atoms() {
        let mut system = MolecularSystem::new();
        let a = add_residue(
            &mut system,
            1,
            "SER",
            &[
                ("N", (0.0, 0.0, 0.0), Some(14.0)),
                ("CA", (1.4, 0.3, -0.2), Some(12.0)),
                ("OG", (2.1, 1.7, 0.9), Some(16.0)),
            ],
        );
        let b = add_residue(
            &mut system,
            2,
            "THR",
            &[
                ("N", (4.0, 2.0, 1.0), Some(14.0)),
                ("CA", (5.5, 2.2, 0.4), Some(12.0)),
            ],
        );
        let pa = ResidueProfile::build(&system, a, MassPolicy::Strict).unwrap();
        let pb = ResidueProfile::build(&system, b, MassPolicy::Strict).unwrap();

        let mut expected = f64::INFINITY;
        for p in &pa.positions {
            for q in &pb.positions {
                let d = ((p.x - q.x).powi(2) + (p.y - q.y).powi(2) + (p.z - q.z).powi(2)).sqrt();
                expected = expected.min(d);
            }
        }

        let record = pair_record(&pa, &pb);
        assert!((record.distance_nearest - expected).abs() < 1e-12);
        assert_eq!(pair_record(&pb, &pa).distance_nearest, record.distance_nearest);
    }
}
