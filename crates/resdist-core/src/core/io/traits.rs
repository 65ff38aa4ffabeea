use crate::core::models::system::MolecularSystem;
use flate2::read::MultiGzDecoder;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading molecular structure file formats.
///
/// Implementors handle format-specific parsing; the provided
/// [`read_from_path`](StructureFile::read_from_path) takes care of opening the
/// file and transparently decompressing `.gz` inputs.
pub trait StructureFile {
    /// The type of metadata associated with the file format.
    type Metadata;

    /// The error type for I/O and parse failures.
    type Error: Error + From<io::Error>;

    /// Reads a molecular system from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(MolecularSystem, Self::Metadata), Self::Error>;

    /// Reads a molecular system from a file path.
    ///
    /// Paths ending in `.gz` are decompressed on the fly.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<(MolecularSystem, Self::Metadata), Self::Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        if is_gzip_path(path) {
            let mut reader = BufReader::new(MultiGzDecoder::new(file));
            Self::read_from(&mut reader)
        } else {
            let mut reader = BufReader::new(file);
            Self::read_from(&mut reader)
        }
    }
}

fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn gzip_paths_are_detected_by_extension() {
        assert!(is_gzip_path(&PathBuf::from("pdb1abc.ent.gz")));
        assert!(is_gzip_path(&PathBuf::from("/tmp/x.GZ")));
        assert!(!is_gzip_path(&PathBuf::from("protein.pdb")));
        assert!(!is_gzip_path(&PathBuf::from("gz")));
    }
}
