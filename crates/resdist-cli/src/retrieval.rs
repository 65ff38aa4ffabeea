use crate::error::{CliError, Result};
use flate2::read::MultiGzDecoder;
use futures_util::StreamExt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::{debug, info};

/// A downloaded structure file living in its own temporary directory.
///
/// The directory and the file are removed when this value is dropped.
#[derive(Debug)]
pub struct RetrievedStructure {
    _dir: TempDir,
    path: PathBuf,
}

impl RetrievedStructure {
    /// Path of the decompressed `pdb<id>.ent` file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Downloads entries from a wwPDB-style "divided" archive.
#[derive(Debug, Clone)]
pub struct Retriever {
    base_url: String,
}

impl Retriever {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `<base>/<mid>/pdb<id>.ent.gz`, where `<mid>` is the 2nd and 3rd character of the id.
    pub fn download_url(&self, code: &str) -> Result<String> {
        let id = validate_pdb_code(code)?;
        Ok(format!(
            "{}/{}/pdb{}.ent.gz",
            self.base_url.trim_end_matches('/'),
            &id[1..3],
            id
        ))
    }

    /// Fetches the entry for `code` and stores it decompressed in a fresh temporary directory.
    pub async fn retrieve(&self, code: &str) -> Result<RetrievedStructure> {
        let id = validate_pdb_code(code)?;
        let url = self.download_url(&id)?;
        let failed = |reason: String| CliError::Retrieval {
            code: code.to_string(),
            reason,
        };

        info!("Downloading structure {} from {}", id, url);
        let response = reqwest::get(&url)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| failed(e.to_string()))?;

        let mut compressed: Vec<u8> =
            Vec::with_capacity(response.content_length().unwrap_or(0) as usize);
        let mut stream = response.bytes_stream();
        while let Some(item) = stream.next().await {
            let chunk = item.map_err(|e| failed(e.to_string()))?;
            compressed.extend_from_slice(&chunk);
        }
        debug!(bytes = compressed.len(), "Download complete.");

        let retrieved = store(code, &id, &compressed, &std::env::temp_dir())?;
        info!("Structure {} stored at {:?}", id, retrieved.path());
        Ok(retrieved)
    }
}

/// Decompresses `compressed` into `pdb<id>.ent` inside a new temporary directory under `parent`.
///
/// Every failure, including the local file system ones, is reported as a
/// retrieval error for `code`.
fn store(code: &str, id: &str, compressed: &[u8], parent: &Path) -> Result<RetrievedStructure> {
    let failed = |stage: &str, e: io::Error| CliError::Retrieval {
        code: code.to_string(),
        reason: format!("{} failed: {}", stage, e),
    };

    let dir = Builder::new()
        .prefix("resdist-")
        .tempdir_in(parent)
        .map_err(|e| failed("creating a temporary directory", e))?;
    let path = dir.path().join(format!("pdb{}.ent", id));
    let mut file = File::create(&path).map_err(|e| failed("creating the structure file", e))?;
    gunzip_to(compressed, &mut file).map_err(|e| failed("decompression", e))?;
    file.sync_all().map_err(|e| failed("writing the structure file", e))?;

    Ok(RetrievedStructure { _dir: dir, path })
}

/// Checks that `code` is a four-character alphanumeric PDB id and returns it lowercased.
pub fn validate_pdb_code(code: &str) -> Result<String> {
    let trimmed = code.trim();
    if trimmed.len() == 4 && trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(trimmed.to_ascii_lowercase())
    } else {
        Err(CliError::Retrieval {
            code: code.to_string(),
            reason: "a PDB id must be exactly four alphanumeric characters".to_string(),
        })
    }
}

fn gunzip_to(compressed: impl Read, out: &mut impl Write) -> io::Result<u64> {
    let mut decoder = MultiGzDecoder::new(compressed);
    io::copy(&mut decoder, out)
}
