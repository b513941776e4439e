//! The small JSON files kept in the config directory
//!
//! `config.json` and `session.json` are both optional: a missing or blank
//! file reads as the type's default. Writes land in a sibling `.tmp` file
//! first and are renamed into place.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{FinanceError, FinanceResult};

/// Read a config file, falling back to `T::default()` when there is nothing to read
pub fn read_json<T, P>(path: P) -> FinanceResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(FinanceError::Io(format!("{}: {}", path.display(), e))),
    };

    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&text)
        .map_err(|e| FinanceError::Config(format!("{} is not valid JSON: {}", path.display(), e)))
}

/// Replace a config file in one step
pub fn write_json_atomic<T, P>(path: P, data: &T) -> FinanceResult<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let mut body = serde_json::to_vec_pretty(data)?;
    body.push(b'\n');

    let staging = path.with_extension("json.tmp");
    fs::write(&staging, &body)?;
    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }
    Ok(())
}

/// Delete a config file; `false` when it was already gone
pub fn remove_if_exists<P: AsRef<Path>>(path: P) -> FinanceResult<bool> {
    match fs::remove_file(path.as_ref()) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Sample {
        base_url: String,
        retries: u32,
    }

    #[test]
    fn test_missing_or_blank_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");

        let data: Sample = read_json(&path).unwrap();
        assert_eq!(data, Sample::default());

        fs::write(&path, "  \n").unwrap();
        let data: Sample = read_json(&path).unwrap();
        assert_eq!(data, Sample::default());
    }

    #[test]
    fn test_write_creates_directory_and_leaves_no_staging_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let data = Sample {
            base_url: "http://localhost:5000".to_string(),
            retries: 1,
        };

        write_json_atomic(&path, &data).unwrap();
        assert!(!temp_dir.path().join("nested").join("config.json.tmp").exists());

        let loaded: Sample = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<Sample, _> = read_json(&path);
        assert!(matches!(result, Err(FinanceError::Config(_))));
    }

    #[test]
    fn test_remove_if_exists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(&path, r#"{"accessToken":"t"}"#).unwrap();

        assert!(remove_if_exists(&path).unwrap());
        assert!(!path.exists());
        assert!(!remove_if_exists(&path).unwrap());
    }
}
