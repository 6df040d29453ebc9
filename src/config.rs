//! Locating the CoolProp shared library.
//!
//! Search order:
//!
//! 1. `COOLPROP_PATH` (from the environment or a `.env` file): the
//!    library file itself or the directory that holds it.
//! 2. Standard install directories for the platform.
//! 3. The system loader search path.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing::{debug, warn};

use crate::sys::CoolPropLibrary;

/// Environment variable naming the library file or its directory.
pub const PATH_VAR: &str = "COOLPROP_PATH";

/// Where the library is expected to be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryLocation {
    File(PathBuf),
    Dir(PathBuf),
    /// Let the platform loader search for it.
    System,
}

impl LibraryLocation {
    /// Classify an explicit path, `None` if it does not exist.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if path.is_file() {
            Some(Self::File(path.to_path_buf()))
        } else if path.is_dir() {
            Some(Self::Dir(path.to_path_buf()))
        } else {
            None
        }
    }
}

/// Load `.env` once per process: working directory first, then the
/// crate directory, then next to the executable.
pub fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        if dotenvy::dotenv().is_ok() { return; }
        if let Ok(dir) = env::var("CARGO_MANIFEST_DIR") {
            let p = PathBuf::from(dir).join(".env");
            if p.exists() { let _ = dotenvy::from_path(&p); return; }
        }
        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                let p = dir.join(".env");
                if p.exists() { let _ = dotenvy::from_path(&p); }
            }
        }
    });
}

fn standard_dirs() -> &'static [&'static str] {
    if cfg!(target_os = "windows") {
        &[r"C:\Program Files\CoolProp", r"C:\Program Files (x86)\CoolProp"]
    } else if cfg!(target_os = "macos") {
        &["/usr/local/lib", "/opt/homebrew/lib", "/opt/coolprop"]
    } else {
        &["/usr/local/lib", "/usr/lib", "/opt/coolprop"]
    }
}

fn dir_has_library(dir: &Path) -> bool {
    CoolPropLibrary::candidate_names()
        .iter()
        .any(|name| dir.join(name).exists())
}

/// Resolve the library location.  Never fails: when nothing explicit is
/// found the system loader gets the last word.
pub fn find_library() -> LibraryLocation {
    load_dotenv();

    if let Ok(raw) = env::var(PATH_VAR) {
        match LibraryLocation::from_path(&raw) {
            Some(loc) => {
                debug!(?loc, "using {PATH_VAR}");
                return loc;
            }
            None => warn!("{PATH_VAR}={raw} does not exist, falling back to standard locations"),
        }
    }

    for dir in standard_dirs() {
        let dir = Path::new(dir);
        if dir_has_library(dir) {
            debug!(dir = %dir.display(), "found CoolProp in standard location");
            return LibraryLocation::Dir(dir.to_path_buf());
        }
    }

    debug!("CoolProp not found in standard locations, using system search path");
    LibraryLocation::System
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_path_is_not_a_location() {
        assert_eq!(LibraryLocation::from_path("/nonexistent/libCoolProp.so"), None);
    }

    #[test]
    fn existing_directory_is_a_dir_location() {
        let dir = env::temp_dir();
        assert_eq!(LibraryLocation::from_path(&dir), Some(LibraryLocation::Dir(dir)));
    }
}
