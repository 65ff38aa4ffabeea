use super::atom::Atom;
use super::chain::Chain;
use super::ids::{AtomId, ChainId, ResidueId, ResidueKey};
use super::residue::Residue;
use slotmap::SlotMap;
use std::collections::HashMap;

/// Represents a parsed structure: chains, their residues and the residues' atoms.
///
/// Storage is arena-based so that ids stay valid for the lifetime of the system.
/// A chain is identified by its model index and chain letter, so the same chain
/// in two models is stored twice. Chains remember the order in which they were
/// first seen, and each chain keeps its residues in insertion order, which
/// together define the canonical residue order used by the analysis.
#[derive(Debug, Clone, Default)]
pub struct MolecularSystem {
    /// Primary storage for atoms.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains.
    chains: SlotMap<ChainId, Chain>,
    /// Chains in order of first appearance.
    chain_order: Vec<ChainId>,
    /// Lookup map for chains by model index and chain letter.
    chain_id_map: HashMap<(usize, char), ChainId>,
    /// Lookup map for residues by model index and file-level key.
    residue_key_map: HashMap<(usize, ResidueKey), ResidueId>,
}

impl MolecularSystem {
    /// Creates a new, empty molecular system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Returns an iterator over all atoms in the system.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Retrieves an immutable reference to a residue by its ID.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Retrieves an immutable reference to a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all chains in order of first appearance.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chain_order
            .iter()
            .filter_map(|&id| self.chains.get(id).map(|chain| (id, chain)))
    }

    /// Returns the IDs of all residues, model by model and chain by chain, in file order.
    ///
    /// This is the order in which residues enter the pair enumeration.
    pub fn residues_in_order(&self) -> Vec<ResidueId> {
        self.chains_iter()
            .flat_map(|(_, chain)| chain.residues().iter().copied())
            .collect()
    }

    /// Returns the atoms of a residue in insertion order.
    ///
    /// # Return
    ///
    /// Returns `None` if the residue does not exist.
    pub fn residue_atoms(&self, residue_id: ResidueId) -> Option<Vec<&Atom>> {
        let residue = self.residues.get(residue_id)?;
        Some(
            residue
                .atoms()
                .iter()
                .filter_map(|&atom_id| self.atoms.get(atom_id))
                .collect(),
        )
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Adds a new chain to the system or returns the existing one.
    ///
    /// This method is idempotent; if a chain with the given model index and
    /// letter already exists, it returns the existing chain ID without creating
    /// a duplicate.
    pub fn add_chain(&mut self, model: usize, id: char) -> ChainId {
        if let Some(&chain_id) = self.chain_id_map.get(&(model, id)) {
            return chain_id;
        }
        let chain_id = self.chains.insert(Chain::new(model, id));
        self.chain_id_map.insert((model, id), chain_id);
        self.chain_order.push(chain_id);
        chain_id
    }

    /// Adds a new residue to a chain or returns the existing one.
    ///
    /// This method is idempotent on the residue key (model, chain, hetero flag,
    /// sequence number, insertion code). A repeated key keeps the name it was
    /// first registered with.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` (e.g., if the
    /// chain doesn't exist).
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        sequence_number: isize,
        insertion_code: Option<char>,
        hetero: bool,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (
            chain.model,
            ResidueKey::new(chain.id, hetero, sequence_number, insertion_code),
        );

        if let Some(&residue_id) = self.residue_key_map.get(&key) {
            return Some(residue_id);
        }

        let residue = Residue::new(sequence_number, insertion_code, hetero, name, chain_id);
        let residue_id = self.residues.insert(residue);
        self.residue_key_map.insert(key, residue_id);
        chain.residues.push(residue_id);

        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// The atom's `residue_id` is overwritten with the target residue.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if successful, otherwise `None` (e.g., if the residue doesn't exist).
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, mut atom: Atom) -> Option<AtomId> {
        if !self.residues.contains_key(residue_id) {
            return None;
        }

        atom.residue_id = residue_id;
        let atom_id = self.atoms.insert(atom);

        let residue = self.residues.get_mut(residue_id)?;
        residue.add_atom(atom_id);

        Some(atom_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn atom(name: &str, x: f64) -> Atom {
        Atom::new(name, ResidueId::default(), Point3::new(x, 0.0, 0.0))
    }

    #[test]
    fn add_chain_is_idempotent() {
        let mut system = MolecularSystem::new();
        let first = system.add_chain(0, 'A');
        let second = system.add_chain(0, 'A');
        assert_eq!(first, second);
        assert_eq!(system.chain_count(), 1);
    }

    #[test]
    fn same_chain_letter_in_another_model_is_a_new_chain() {
        let mut system = MolecularSystem::new();
        let first = system.add_chain(0, 'A');
        let second = system.add_chain(1, 'A');
        assert_ne!(first, second);
        assert_eq!(system.chain(second).unwrap().model, 1);

        let r1 = system.add_residue(first, 1, None, false, "ALA").unwrap();
        let r2 = system.add_residue(second, 1, None, false, "ALA").unwrap();
        assert_ne!(r1, r2);
        assert_eq!(system.residues_in_order(), vec![r1, r2]);
    }

    #[test]
    fn add_residue_is_idempotent_on_key() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain(0, 'A');
        let first = system.add_residue(chain_id, 1, None, false, "ALA").unwrap();
        let second = system.add_residue(chain_id, 1, None, false, "GLY").unwrap();
        assert_eq!(first, second);
        assert_eq!(system.residue(first).unwrap().name, "ALA");
        assert_eq!(system.chain(chain_id).unwrap().residues(), &[first]);
    }

    #[test]
    fn add_residue_distinguishes_insertion_codes_and_hetero_flag() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain(0, 'A');
        let plain = system.add_residue(chain_id, 5, None, false, "ALA").unwrap();
        let inserted = system
            .add_residue(chain_id, 5, Some('A'), false, "GLY")
            .unwrap();
        let hetero = system.add_residue(chain_id, 5, None, true, "HOH").unwrap();
        assert_ne!(plain, inserted);
        assert_ne!(plain, hetero);
        assert_eq!(system.residue_count(), 3);
        assert_eq!(system.residue(inserted).unwrap().insertion_code, Some('A'));
    }

    #[test]
    fn add_residue_fails_for_unknown_chain() {
        let mut system = MolecularSystem::new();
        system.add_chain(0, 'A');
        let missing = ChainId::from(slotmap::KeyData::from_ffi(99));
        assert!(system.add_residue(missing, 1, None, false, "ALA").is_none());
    }

    #[test]
    fn add_atom_to_residue_sets_parent_and_registers_atom() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain(0, 'A');
        let residue_id = system.add_residue(chain_id, 1, None, false, "ALA").unwrap();
        let atom_id = system.add_atom_to_residue(residue_id, atom("CA", 1.0)).unwrap();

        assert_eq!(system.atom(atom_id).unwrap().residue_id, residue_id);
        assert_eq!(system.residue(residue_id).unwrap().atoms(), &[atom_id]);
        assert_eq!(system.atom_count(), 1);
    }

    #[test]
    fn residues_in_order_follows_chain_then_insertion_order() {
        let mut system = MolecularSystem::new();
        let chain_b = system.add_chain(0, 'B');
        let chain_a = system.add_chain(0, 'A');
        let b1 = system.add_residue(chain_b, 10, None, false, "ALA").unwrap();
        let a1 = system.add_residue(chain_a, 1, None, false, "GLY").unwrap();
        let b2 = system.add_residue(chain_b, 2, None, false, "SER").unwrap();

        assert_eq!(system.residues_in_order(), vec![b1, b2, a1]);
    }

    #[test]
    fn residue_atoms_returns_atoms_in_insertion_order() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain(0, 'A');
        let residue_id = system.add_residue(chain_id, 1, None, false, "ALA").unwrap();
        system.add_atom_to_residue(residue_id, atom("N", 0.0));
        system.add_atom_to_residue(residue_id, atom("CA", 1.0));

        let names: Vec<_> = system
            .residue_atoms(residue_id)
            .unwrap()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["N", "CA"]);
    }
}
