use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::ids::{ResidueId, ResidueKey};
use crate::core::models::system::MolecularSystem;
use crate::core::utils::elements;
use nalgebra::Point3;
use std::collections::HashMap;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, warn};

/// Shortest ATOM/HETATM line that still carries all three coordinates.
const MIN_ATOM_RECORD_LEN: usize = 54;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbMetadata {
    /// The four-character entry code from the HEADER record, if present.
    pub id_code: Option<String>,
    /// Number of MODEL records encountered (0 when the file has none).
    pub model_count: usize,
    /// Atoms for which no element (and therefore no mass) could be determined.
    pub atoms_without_element: usize,
    /// Alternate-location atoms discarded in favor of a higher-occupancy one.
    pub discarded_alt_locs: usize,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

struct PendingResidue {
    name: String,
    atoms: Vec<(f64, Atom)>,
    atom_index: HashMap<String, usize>,
}

/// Collects records before the system is built, so that alternate locations
/// can be resolved and residues split across the file are merged.
///
/// Chains and residues are keyed by model index as well, so each model
/// contributes its own copy of every residue.
#[derive(Default)]
struct PendingStructure {
    chain_order: Vec<(usize, char)>,
    residue_order: HashMap<(usize, char), Vec<ResidueKey>>,
    residues: HashMap<(usize, ResidueKey), PendingResidue>,
    discarded_alt_locs: usize,
}

impl PendingStructure {
    fn push_atom(
        &mut self,
        model: usize,
        key: ResidueKey,
        residue_name: &str,
        occupancy: f64,
        atom: Atom,
    ) {
        let chain = (model, key.chain_id);
        if !self.residue_order.contains_key(&chain) {
            self.chain_order.push(chain);
        }
        let chain_residues = self.residue_order.entry(chain).or_default();

        let residue = self.residues.entry((model, key)).or_insert_with(|| {
            chain_residues.push(key);
            PendingResidue {
                name: residue_name.to_string(),
                atoms: Vec::new(),
                atom_index: HashMap::new(),
            }
        });

        match residue.atom_index.get(&atom.name) {
            Some(&idx) => {
                // Alternate location: the highest occupancy wins, the first one on ties.
                if occupancy > residue.atoms[idx].0 {
                    residue.atoms[idx] = (occupancy, atom);
                }
                self.discarded_alt_locs += 1;
            }
            None => {
                residue.atom_index.insert(atom.name.clone(), residue.atoms.len());
                residue.atoms.push((occupancy, atom));
            }
        }
    }

    fn build(mut self) -> MolecularSystem {
        let mut system = MolecularSystem::new();
        for &(model, chain_char) in &self.chain_order {
            let chain_id = system.add_chain(model, chain_char);
            let keys = self
                .residue_order
                .remove(&(model, chain_char))
                .unwrap_or_default();
            for key in keys {
                let Some(pending) = self.residues.remove(&(model, key)) else {
                    continue;
                };
                let Some(residue_id) = system.add_residue(
                    chain_id,
                    key.sequence_number,
                    key.insertion_code,
                    key.hetero,
                    &pending.name,
                ) else {
                    continue;
                };
                for (_, atom) in pending.atoms {
                    system.add_atom_to_residue(residue_id, atom);
                }
            }
        }
        system
    }
}

pub struct PdbFile;

impl StructureFile for PdbFile {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(MolecularSystem, Self::Metadata), Self::Error> {
        let mut pending = PendingStructure::default();
        let mut metadata = PdbMetadata::default();
        let mut atom_records = 0usize;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            // Record names may be shorter than six columns ("END", "MODEL").
            let record_type = line.get(..6).unwrap_or(line.as_str()).trim();
            match record_type {
                "HEADER" => {
                    let id_code = slice_and_trim(&line, 62, 66);
                    if !id_code.is_empty() {
                        metadata.id_code = Some(id_code.to_string());
                    }
                }
                "MODEL" => {
                    metadata.model_count += 1;
                    if metadata.model_count == 2 {
                        debug!("Multiple models found; every model is read.");
                    }
                }
                "ATOM" | "HETATM" => {
                    let (key, residue_name, occupancy, atom) =
                        parse_atom_record(&line, line_num, record_type == "HETATM")?;
                    if atom.mass.is_none() {
                        metadata.atoms_without_element += 1;
                    }
                    // Atoms before the first MODEL record belong to model 0 as well.
                    let model = metadata.model_count.saturating_sub(1);
                    pending.push_atom(model, key, &residue_name, occupancy, atom);
                    atom_records += 1;
                }
                "END" => break,
                _ => {}
            }
        }

        if atom_records == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        if metadata.atoms_without_element > 0 {
            warn!(
                count = metadata.atoms_without_element,
                "Some atoms have no recognizable element and therefore no mass."
            );
        }

        metadata.discarded_alt_locs = pending.discarded_alt_locs;
        let system = pending.build();
        debug!(
            chains = system.chain_count(),
            residues = system.residue_count(),
            atoms = system.atom_count(),
            "PDB structure parsed."
        );
        Ok((system, metadata))
    }
}

fn parse_atom_record(
    line: &str,
    line_num: usize,
    is_hetatm: bool,
) -> Result<(ResidueKey, String, f64, Atom), PdbError> {
    if line.len() < MIN_ATOM_RECORD_LEN {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::LineTooShort,
        });
    }

    let serial_str = slice_and_trim(line, 6, 11);
    let raw_name = line.get(12..16).unwrap_or("");
    let name_str = raw_name.trim();
    let residue_name = slice_and_trim(line, 17, 20);
    let chain_char = line.get(21..22).and_then(|s| s.chars().next()).unwrap_or(' ');
    let res_seq_str = slice_and_trim(line, 22, 26);
    let insertion_code = line
        .get(26..27)
        .and_then(|s| s.chars().next())
        .filter(|c| !c.is_whitespace());

    if name_str.is_empty() {
        return Err(PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::MissingRequiredField {
                columns: "13-16".into(),
            },
        });
    }
    let sequence_number: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidInt {
            columns: "23-26".into(),
            value: res_seq_str.into(),
        },
    })?;

    let x = parse_float(line, line_num, 30, 38)?;
    let y = parse_float(line, line_num, 38, 46)?;
    let z = parse_float(line, line_num, 46, 54)?;

    // Serial numbers overflow five digits in large entries; they are informational only.
    let serial = serial_str.parse().unwrap_or(0);
    let occupancy = slice_and_trim(line, 54, 60).parse().unwrap_or(1.0);

    let element_column = slice_and_trim(line, 76, 78);
    let element = if elements::is_known_element(element_column) {
        Some(element_column.to_ascii_uppercase())
    } else {
        elements::infer_element_from_atom_name(raw_name)
    };

    let mut atom = Atom::new(name_str, ResidueId::default(), Point3::new(x, y, z));
    if let Some(symbol) = element {
        atom = atom.with_element(&symbol);
    }
    atom.serial = serial;
    atom.occupancy = occupancy;

    let key = ResidueKey::new(chain_char, is_hetatm, sequence_number, insertion_code);
    Ok((key, residue_name.to_string(), occupancy, atom))
}
