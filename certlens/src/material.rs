//! The unit of input: the full contents of one file plus the name it is
//! reported under.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Name reported for material read from standard input.
pub const STDIN_NAME: &str = "(stdin)";

/// Raw bytes of a key or certificate file.
///
/// Created once per file read and consumed by a single classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMaterial {
    bytes: Vec<u8>,
    filename: String,
}

impl RawMaterial {
    pub fn new(bytes: impl Into<Vec<u8>>, filename: impl Into<String>) -> Self {
        RawMaterial {
            bytes: bytes.into(),
            filename: filename.into(),
        }
    }

    /// Reads the whole file at `path`. The path is kept as the filename.
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        Ok(Self::new(bytes, path.to_string_lossy()))
    }

    /// Drains `reader` to the end, reporting it as standard input.
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::new(bytes, STDIN_NAME))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Replaces the reported name, e.g. with a path relative to a scan root.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }
}
