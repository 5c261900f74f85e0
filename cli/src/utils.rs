use std::io;

use certlens::RawMaterial;

use crate::error::{Error, Result};

/// Read input from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<RawMaterial> {
    match file {
        Some(path) => RawMaterial::from_path(path).map_err(|source| Error::Read {
            path: path.to_string(),
            source,
        }),
        None => RawMaterial::from_reader(io::stdin().lock()).map_err(Error::Stdin),
    }
}
