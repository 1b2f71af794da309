use crate::app::domain::FileKind;
use crate::app::infrastructure::error::{PlaygroundError, Result};

/// Normalize a user-typed file name.
///
/// Trims surrounding whitespace and rejects empty names and path
/// separators (the store is flat).
pub fn normalize_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(PlaygroundError::InvalidName("name is empty".to_string()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(PlaygroundError::InvalidName(format!(
            "\"{}\" contains a path separator",
            name
        )));
    }
    if name == "." || name == ".." {
        return Err(PlaygroundError::InvalidName(format!("\"{}\" is reserved", name)));
    }
    Ok(name.to_string())
}

/// Name for a newly added file: keeps an explicit extension, otherwise
/// appends the one for `kind`.
pub fn name_for_new_file(raw: &str, kind: FileKind) -> Result<String> {
    let name = normalize_name(raw)?;
    if name.contains('.') {
        Ok(name)
    } else {
        Ok(format!("{}.{}", name, kind.extension()))
    }
}

/// Target name for a rename.
///
/// If `new_raw` contains a `.` it is used as typed; otherwise the old
/// file's extension is carried over, so renaming `utils.js` to `helpers`
/// yields `helpers.js`.
pub fn name_for_rename(old: &str, new_raw: &str) -> Result<String> {
    let name = normalize_name(new_raw)?;
    if name.contains('.') {
        return Ok(name);
    }
    match extension_of(old) {
        Some(ext) => Ok(format!("{}.{}", name, ext)),
        None => Ok(name),
    }
}

/// Extension of a name without the dot, if it has a non-empty one.
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}
