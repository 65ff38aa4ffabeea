use super::ids::{AtomId, ChainId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    /// Residue sequence number from the source file.
    pub sequence_number: isize,
    pub insertion_code: Option<char>,
    /// Whether the residue came from HETATM records.
    pub hetero: bool,
    /// Residue name (e.g., "ALA", "HOH").
    pub name: String,
    pub chain_id: ChainId,
    pub(crate) atoms: Vec<AtomId>,
}

impl Residue {
    pub(crate) fn new(
        sequence_number: isize,
        insertion_code: Option<char>,
        hetero: bool,
        name: &str,
        chain_id: ChainId,
    ) -> Self {
        Self {
            sequence_number,
            insertion_code,
            hetero,
            name: name.to_string(),
            chain_id,
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_id: AtomId) {
        self.atoms.push(atom_id);
    }

    /// Atoms in insertion order.
    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}
