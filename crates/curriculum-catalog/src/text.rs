use std::fs;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// Read a whole catalog file as UTF-8. The handle is closed before returning.
pub(crate) fn read_catalog(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CatalogError::io(path, source))
}

/// Split the body of a `[...]` id list: `"a", "b"` becomes `["a", "b"]`.
///
/// Blank pieces are dropped before quotes are stripped, so `""` survives as an
/// empty id.
pub(crate) fn split_id_list(body: &str) -> Vec<String> {
    body.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.trim_matches('"').to_string())
        .collect()
}
