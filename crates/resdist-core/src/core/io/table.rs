use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// A row type that can be written as a delimited table.
///
/// The header is declared statically so that an empty table still starts
/// with a header line. `HEADERS` must list the serialized fields in order.
pub trait TableRow: Serialize {
    const HEADERS: &'static [&'static str];
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to create output file in '{dir}': {source}", dir = dir.display())]
    Create {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write output file '{path}': {source}", path = path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Writes a header line followed by one CSV row per record.
pub fn write_rows<T: TableRow, W: Write>(rows: &[T], writer: W) -> Result<(), TableError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(T::HEADERS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the table to `path` atomically.
///
/// Rows are written to a temporary file next to the destination, which is
/// renamed over `path` only once everything has been written. On failure no
/// file (and no partial table) is left at `path`.
pub fn write_rows_to_path<T: TableRow>(rows: &[T], path: &Path) -> Result<(), TableError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut temp = NamedTempFile::new_in(&dir).map_err(|source| TableError::Create {
        dir: dir.clone(),
        source,
    })?;
    write_rows(rows, temp.as_file_mut())?;
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| TableError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        value: f64,
    }

    impl TableRow for Row {
        const HEADERS: &'static [&'static str] = &["name", "value"];
    }

    #[test]
    fn write_rows_emits_header_and_rows_in_order() {
        let rows = [
            Row {
                name: "ALA",
                value: 5.0,
            },
            Row {
                name: "GLY",
                value: 0.25,
            },
        ];
        let mut buffer = Vec::new();
        write_rows(&rows, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "name,value\nALA,5.0\nGLY,0.25\n"
        );
    }

    #[test]
    fn write_rows_emits_header_for_empty_table() {
        let mut buffer = Vec::new();
        write_rows::<Row, _>(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "name,value\n");
    }

    #[test]
    fn write_rows_to_path_creates_file_and_leaves_no_temporaries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        let rows = [Row {
            name: "SER",
            value: 1.5,
        }];

        write_rows_to_path(&rows, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\nSER,1.5\n");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn write_rows_to_path_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "stale").unwrap();

        write_rows_to_path::<Row>(&[], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
    }

    #[test]
    fn write_rows_to_path_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("table.csv");

        let result = write_rows_to_path::<Row>(&[], &path);

        assert!(matches!(result, Err(TableError::Create { .. })));
        assert!(!path.exists());
    }
}
