//! Loading and appending declaration documents

use super::model::{LibraryDeclaration, SourceDeclaration};
use crate::error::LibraryError;
use crate::model::Library;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Parse a declaration document into a library
///
/// Fails on the first source that is incomplete or whose name and timestamp
/// counts differ.
pub fn load_library(document: &str) -> Result<Library, LibraryError> {
    let declaration: LibraryDeclaration = toml::from_str(document)?;

    let library = declaration
        .into_sources()
        .map(SourceDeclaration::into_source)
        .collect::<Result<Library, _>>()?;

    log::debug!("Parsed {} source(s) from declaration", library.source_count());
    Ok(library)
}

/// Read and parse a declaration file
pub fn load_library_file(path: &Path) -> Result<Library, LibraryError> {
    let document = fs::read_to_string(path).map_err(|source| LibraryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_library(&document)
}

/// Append one source to a declaration file, creating the file if needed
pub fn append_source(path: &Path, source: &SourceDeclaration) -> Result<(), LibraryError> {
    let declaration = LibraryDeclaration {
        source: vec![source.clone()],
        ..Default::default()
    };
    let encoded = toml::to_string(&declaration)?;

    let write_err = |source| LibraryError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(b"\n").map_err(write_err)?;
    file.write_all(encoded.as_bytes()).map_err(write_err)?;

    log::info!("Added '{}' to {:?}", source.name, path);
    Ok(())
}
