//! Filesystem capability used to open driver logs.
//!
//! The scan only needs `open`; closing is tied to the returned reader, so the
//! stream is released when the reader is dropped on any exit path.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub trait LogSource {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>>;
}

/// Reads logs from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LogSource for LocalFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
pub mod memory {
    use super::LogSource;
    use std::collections::BTreeMap;
    use std::io::{self, BufRead, Cursor};
    use std::path::{Path, PathBuf};

    /// In-memory log store for tests.
    #[derive(Debug, Default)]
    pub struct InMemory {
        files: BTreeMap<PathBuf, Vec<u8>>,
    }

    impl InMemory {
        pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
            self.files.insert(path.into(), contents.into());
            self
        }
    }

    impl LogSource for InMemory {
        fn open(&self, path: &Path) -> io::Result<Box<dyn BufRead + '_>> {
            match self.files.get(path) {
                Some(bytes) => Ok(Box::new(Cursor::new(bytes.as_slice()))),
                None => Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such log: {}", path.display()),
                )),
            }
        }
    }
}
