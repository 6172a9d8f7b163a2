//! 新建 / 重命名时的文件名规则

use super::error::KernelError;
use std::path::Path;

/// Trimmed user input, rejected when blank or when it is not a single path component.
pub fn validate_name(input: &str) -> Result<String, KernelError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(KernelError::EmptyInput);
    }
    if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(KernelError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}

/// `notes` -> `notes.md`; names that already carry an extension are kept.
pub fn with_default_extension(name: &str, extension: &str) -> String {
    if Path::new(name).extension().is_some() {
        name.to_string()
    } else {
        format!("{name}.{extension}")
    }
}

/// Split a file name into the stem shown in the rename prompt and the
/// extension that is put back afterwards. Only the last dot counts.
pub fn split_stem(name: &str) -> (String, Option<String>) {
    let path = Path::new(name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => (
            stem.to_string_lossy().to_string(),
            Some(ext.to_string_lossy().to_string()),
        ),
        _ => (name.to_string(), None),
    }
}

/// New name for a rename: the original extension is appended whatever the input says.
pub fn renamed_name(input: &str, extension: Option<&str>) -> Result<String, KernelError> {
    let name = validate_name(input)?;
    Ok(match extension {
        Some(ext) => format!("{name}.{ext}"),
        None => name,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/naming.rs"]
mod tests;
