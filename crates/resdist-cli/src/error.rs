use resdist::core::io::pdb::PdbError;
use resdist::core::io::table::TableError;
use resdist::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Failed to retrieve structure '{code}': {reason}")]
    Retrieval { code: String, reason: String },

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: PdbError,
    },

    #[error("Failed to write results: {0}")]
    OutputWrite(#[from] TableError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Argument(_) => 2,
            CliError::Engine(EngineError::Config(_)) => 2,
            CliError::Retrieval { .. } => 3,
            CliError::FileParsing { .. } => 4,
            CliError::Engine(EngineError::EmptyResidue { .. }) => 5,
            CliError::Engine(EngineError::MissingMass { .. }) => 6,
            CliError::OutputWrite(_) => 7,
            CliError::Engine(EngineError::Internal(_)) | CliError::Io(_) | CliError::Other(_) => 1,
        }
    }
}
