use std::path::Path;

use serde::de::DeserializeOwned;

use crate::Error;

/// Deserializes one catalog CSV file into typed rows.
///
/// # Errors
///
/// Returns [`Error::InvalidCatalog`] with the offending path for unreadable
/// files or malformed rows; catalog problems are startup-fatal.
pub fn deserialize_catalog_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|err| Error::InvalidCatalog(format!("{}: {err}", path.display())))?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|err| Error::InvalidCatalog(format!("{}: {err}", path.display())))
}
