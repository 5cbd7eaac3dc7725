use std::collections::HashMap;
use std::io;
use std::path::Path;

use parking_lot::Mutex;

/// Byte-level persistence behind the document provider, keyed by the
/// document's uri string.
pub trait Storage: Send + Sync {
    fn read(&self, uri: &str) -> io::Result<Vec<u8>>;
    fn write(&self, uri: &str, bytes: &[u8]) -> io::Result<()>;
    fn delete(&self, uri: &str) -> io::Result<()>;
}

/// Stores documents on the local filesystem, treating uris as paths
/// (a `file://` prefix is tolerated and stripped).
#[derive(Debug, Default)]
pub struct FileStorage;

impl FileStorage {
    fn path(uri: &str) -> &Path {
        Path::new(uri.strip_prefix("file://").unwrap_or(uri))
    }
}

impl Storage for FileStorage {
    fn read(&self, uri: &str) -> io::Result<Vec<u8>> {
        std::fs::read(Self::path(uri))
    }

    fn write(&self, uri: &str, bytes: &[u8]) -> io::Result<()> {
        std::fs::write(Self::path(uri), bytes)
    }

    fn delete(&self, uri: &str) -> io::Result<()> {
        std::fs::remove_file(Self::path(uri))
    }
}

/// In-memory storage used by tests and by hosts that do their own
/// filesystem access.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, uri: impl Into<String>, bytes: Vec<u8>) {
        self.files.lock().insert(uri.into(), bytes);
    }

    pub fn get(&self, uri: &str) -> Option<Vec<u8>> {
        self.files.lock().get(uri).cloned()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, uri: &str) -> io::Result<Vec<u8>> {
        self.get(uri)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no entry for {uri}")))
    }

    fn write(&self, uri: &str, bytes: &[u8]) -> io::Result<()> {
        self.insert(uri, bytes.to_vec());
        Ok(())
    }

    fn delete(&self, uri: &str) -> io::Result<()> {
        self.files
            .lock()
            .remove(uri)
            .map(|_| ())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no entry for {uri}")))
    }
}
