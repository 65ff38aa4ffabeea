use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Residue {residue} has no atoms; its center and nearest-atom distance are undefined")]
    EmptyResidue { residue: String },

    #[error("Atom '{atom}' of residue {residue} has no mass; cannot compute the center of mass")]
    MissingMass { residue: String, atom: String },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
