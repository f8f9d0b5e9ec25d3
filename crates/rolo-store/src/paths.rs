use crate::error::{Result, StoreError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "rolo";
const BOOK_FILENAME: &str = "addressbook.json";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(StoreError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    restrict_dir_permissions(&dir)?;
    Ok(dir)
}

pub fn book_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(BOOK_FILENAME))
}

pub fn book_path_in(dir: &Path) -> PathBuf {
    dir.join(BOOK_FILENAME)
}

/// Explicit path when given, the per-user data directory otherwise.
pub fn resolve_book_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(StoreError::InvalidDataPath(path));
            }
            Ok(path)
        }
        None => book_path(),
    }
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{book_path_in, resolve_book_path};
    use std::path::{Path, PathBuf};

    #[test]
    fn book_path_in_appends_filename() {
        let path = book_path_in(Path::new("/tmp/rolo"));
        assert_eq!(path, PathBuf::from("/tmp/rolo/addressbook.json"));
    }

    #[test]
    fn resolve_book_path_prefers_custom() {
        let custom = PathBuf::from("/tmp/custom.json");
        let resolved = resolve_book_path(Some(custom.clone())).expect("resolve");
        assert_eq!(resolved, custom);
    }

    #[test]
    fn resolve_book_path_rejects_empty_custom() {
        assert!(resolve_book_path(Some(PathBuf::new())).is_err());
    }
}
