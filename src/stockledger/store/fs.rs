use super::LedgerStore;
use crate::error::{LedgerError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "inventory.txt";

/// The inventory as a single flat text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for FileStore {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LedgerError::MissingFile(self.path.clone()));
            }
            Err(e) => return Err(LedgerError::Io(e)),
        };
        Ok(content.lines().map(str::to_string).collect())
    }

    fn write_all(&mut self, contents: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        // Open, truncate, write: nothing from a longer previous file survives.
        fs::write(&self.path, contents)
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{load, persist};

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join(DEFAULT_FILE_NAME));
        match store.read_lines() {
            Err(LedgerError::MissingFile(path)) => assert_eq!(path, store.path()),
            other => panic!("expected missing file, got {:?}", other),
        }
    }

    #[test]
    fn crlf_lines_are_read_without_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        fs::write(
            &path,
            "Country,Code,Product,Cost,Quantity\r\nFrance,SKU00012,Shoe,5,1\r\n",
        )
        .unwrap();
        let store = FileStore::new(&path);
        let records = load(&store).unwrap();
        assert_eq!(records[0].quantity, 1);
    }

    #[test]
    fn persist_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        let original = "Country,Code,Product,Cost,Quantity\nFrance,SKU00012,Running Shoe,50,10\n";
        fs::write(&path, original).unwrap();

        let mut store = FileStore::new(&path);
        let records = load(&store).unwrap();
        persist(&mut store, &records).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }

    #[test]
    fn write_failure_is_a_persist_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in the file's place makes the rewrite fail.
        let path = dir.path().join(DEFAULT_FILE_NAME);
        fs::create_dir(&path).unwrap();
        let mut store = FileStore::new(&path);
        assert!(matches!(
            persist(&mut store, &[]),
            Err(LedgerError::Persist { .. })
        ));
    }
}
