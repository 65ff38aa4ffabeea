use super::ids::ResidueId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    /// Chain identifier (e.g., 'A', 'B').
    pub id: char,
    /// Zero-based index of the model the chain belongs to, in file order.
    pub model: usize,
    pub(crate) residues: Vec<ResidueId>,
}

impl Chain {
    pub(crate) fn new(model: usize, id: char) -> Self {
        Self {
            id,
            model,
            residues: Vec::new(),
        }
    }

    /// Residues of this chain in insertion order.
    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }
}
