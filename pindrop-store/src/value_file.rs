//! Single-value file primitives shared by the stores.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use pindrop_core::error::{PindropError, Result};

/// Reads the whole value, or `None` when the file has never been written.
///
/// Absence is a distinct state from an empty file; callers map `None` to
/// their own "not configured" error.
pub(crate) fn read_value(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Overwrites the value wholesale.
///
/// Writes to a sibling temp file, sets 0600, then renames over the target so
/// a concurrent reader sees either the old value or the new one, never a
/// partial write.
pub(crate) fn write_value(path: &Path, value: &str) -> Result<()> {
    let tmp = tmp_path(path);
    fs::write(&tmp, value)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(&tmp, path)?;
    debug!(path = %path.display(), "Value persisted");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Resolves the user's home directory.
pub(crate) fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or(PindropError::HomeDirUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempdir().unwrap();
        let value = read_value(&dir.path().join(".pindrop-x")).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_round_trip_preserves_exact_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".pindrop-x");

        write_value(&path, "x.example.net").unwrap();
        assert_eq!(read_value(&path).unwrap().unwrap(), "x.example.net");

        // Empty string is a written value, not absence
        write_value(&path, "").unwrap();
        assert_eq!(read_value(&path).unwrap().unwrap(), "");
    }

    #[test]
    fn test_overwrite_is_wholesale() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".pindrop-x");

        write_value(&path, "first-domain.example.net").unwrap();
        write_value(&path, "second").unwrap();
        assert_eq!(read_value(&path).unwrap().unwrap(), "second");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".pindrop-x");

        write_value(&path, "value").unwrap();
        assert!(!tmp_path(&path).exists());
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_permissions_are_0600() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join(".pindrop-x");
        write_value(&path, "secret").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
