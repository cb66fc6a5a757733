use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// Read and parse a JSON file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&content)?))
}

/// Load a JSON store, falling back to `T::default()` on any failure.
///
/// A missing file is normal on first run. Anything else means existing data is being
/// ignored, so it is logged at error level.
pub fn load_or_default<T: DeserializeOwned + Default, P: AsRef<Path>>(path: P, what: &str) -> T {
    let path = path.as_ref();
    match read_json(path) {
        Ok(Some(value)) => {
            tracing::info!(path = %path.display(), "loaded {}", what);
            value
        }
        Ok(None) => {
            tracing::info!(path = %path.display(), "no {} file yet, starting empty", what);
            T::default()
        }
        Err(e) => {
            tracing::error!(
                path = %path.display(),
                error = %e,
                "could not load {}; starting EMPTY and ignoring the file's contents",
                what
            );
            T::default()
        }
    }
}

/// Write `value` as pretty JSON, replacing the whole file.
///
/// Writes to a sibling temp file first and renames it over the target, so a failed
/// write never leaves a half-written store behind.
pub fn save_json<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, json)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let value: Option<Vec<u32>> = read_json(dir.path().join("absent.json")).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_save_and_read_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut data = HashMap::new();
        data.insert("a".to_string(), 1u32);
        save_json(&path, &data).unwrap();

        let reloaded: HashMap<String, u32> = read_json(&path).unwrap().unwrap();
        assert_eq!(reloaded, data);
        assert!(!dir.path().join("store.json.tmp").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        // A non-empty directory at the target path makes the rename fail.
        let path = dir.path().join("store.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        assert!(save_json(&path, &vec![1u32, 2, 3]).is_err());
        assert!(!dir.path().join("store.json.tmp").exists());
    }

    #[test]
    fn test_load_or_default_on_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{'name': 'bad json',,}").unwrap();

        let value: Vec<u32> = load_or_default(&path, "test store");
        assert!(value.is_empty());
    }
}
