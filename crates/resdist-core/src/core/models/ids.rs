use slotmap::new_key_type;
use std::fmt;

new_key_type! {
    pub struct AtomId;
    pub struct ResidueId;
    pub struct ChainId;
}

/// Identifies a residue the way structure files do: by its chain, its
/// hetero flag, its sequence number and an optional insertion code.
///
/// Two records with the same key belong to the same residue, even when
/// they are not adjacent in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResidueKey {
    pub chain_id: char,
    pub hetero: bool,
    pub sequence_number: isize,
    pub insertion_code: Option<char>,
}

impl ResidueKey {
    pub fn new(
        chain_id: char,
        hetero: bool,
        sequence_number: isize,
        insertion_code: Option<char>,
    ) -> Self {
        Self {
            chain_id,
            hetero,
            sequence_number,
            insertion_code,
        }
    }
}

impl fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.sequence_number)?;
        if let Some(code) = self.insertion_code {
            write!(f, "{}", code)?;
        }
        Ok(())
    }
}
