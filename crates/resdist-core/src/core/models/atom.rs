use super::ids::ResidueId;
use crate::core::utils::elements;
use nalgebra::Point3;

/// Represents an atom of a parsed structure.
///
/// Atoms carry only what the proximity analysis needs: where the atom is,
/// what element it is and, when the element is known, its atomic mass.
/// An atom is not modified after the structure has been loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The serial number from the source file (0 when built by hand).
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "N", "OG1").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The element symbol, upper case (e.g., "C", "FE"). Empty when unknown.
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Crystallographic occupancy, used to pick between alternate locations.
    pub occupancy: f64,
    /// Atomic mass in Daltons, `None` when the element is not recognized.
    pub mass: Option<f64>,
}

impl Atom {
    /// Creates a new `Atom` with no element and no mass.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            serial: 0,
            name: name.to_string(),
            residue_id,
            element: String::new(),
            position,
            occupancy: 1.0,
            mass: None,
        }
    }

    /// Sets the element and derives the mass from the element table.
    ///
    /// Unknown symbols clear the mass rather than guessing one.
    pub fn with_element(mut self, symbol: &str) -> Self {
        self.element = symbol.trim().to_ascii_uppercase();
        self.mass = elements::atomic_mass(&self.element);
        self
    }

    /// Overrides the mass explicitly, independent of the element.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::ResidueId;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let residue_id = ResidueId::default();
        let atom = Atom::new("CA", residue_id, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.name, "CA");
        assert_eq!(atom.residue_id, residue_id);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.serial, 0);
        assert_eq!(atom.element, "");
        assert_eq!(atom.occupancy, 1.0);
        assert!(atom.mass.is_none());
    }

    #[test]
    fn with_element_assigns_mass_from_table() {
        let atom = Atom::new("CA", ResidueId::default(), Point3::origin()).with_element("c");
        assert_eq!(atom.element, "C");
        assert_eq!(atom.mass, Some(12.0107));
    }

    #[test]
    fn with_element_leaves_mass_empty_for_unknown_symbol() {
        let atom = Atom::new("X1", ResidueId::default(), Point3::origin()).with_element("Xx");
        assert_eq!(atom.element, "XX");
        assert!(atom.mass.is_none());
    }

    #[test]
    fn with_mass_overrides_element_mass() {
        let atom = Atom::new("C1", ResidueId::default(), Point3::origin())
            .with_element("C")
            .with_mass(1.0);
        assert_eq!(atom.mass, Some(1.0));
    }
}
