//! Paper source backed by a local directory of documents.

use super::{check_id, ByteStream, FetchError, Fetcher, DEFAULT_SUFFIX};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Reads `<root>/<id><suffix>` from disk.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
    suffix: String,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path the given id maps to. Does not check that it exists.
    pub fn path_for(&self, id: &str) -> Result<PathBuf, FetchError> {
        check_id(id)?;
        Ok(self.root.join(format!("{}{}", id, self.suffix)))
    }
}

impl Fetcher for DirFetcher {
    fn fetch(&self, id: &str) -> Result<ByteStream, FetchError> {
        let path = self.path_for(id)?;
        match File::open(&path) {
            Ok(f) => Ok(Box::new(f)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(FetchError::NotFound { id: id.to_string() })
            }
            Err(e) => Err(FetchError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn reads_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("p42.pdf"), b"%PDF-1.4").unwrap();
        let fetcher = DirFetcher::new(dir.path());
        let mut out = Vec::new();
        fetcher.fetch("p42").unwrap().read_to_end(&mut out).unwrap();
        assert_eq!(out, b"%PDF-1.4");
    }

    #[test]
    fn missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = DirFetcher::new(dir.path());
        match fetcher.fetch("nope") {
            Err(FetchError::NotFound { id }) => assert_eq!(id, "nope"),
            Err(other) => panic!("expected NotFound, got {:?}", other),
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn custom_suffix_and_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = DirFetcher::new(dir.path()).with_suffix(".txt");
        assert_eq!(
            fetcher.path_for("abc").unwrap(),
            dir.path().join("abc.txt")
        );
        assert!(matches!(fetcher.fetch("../abc"), Err(FetchError::Io(_))));
    }
}
