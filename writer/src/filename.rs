use crate::error::SplitError;

/// Turn a heading title into a safe file or folder name: surrounding
/// whitespace goes, and so does every character except alphanumerics,
/// `-`, `_`, `.` and space. Titles that leave nothing usable (or a
/// bare `.`/`..`) are an error.
pub fn valid_filename(title: &str) -> Result<String, SplitError> {
    let name: String = title
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ' '))
        .collect();

    if name.is_empty() || name == "." || name == ".." {
        return Err(SplitError::InvalidFilename(title.to_string()));
    }
    Ok(name)
}
