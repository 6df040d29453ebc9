//! Low-level FFI bindings for the CoolProp shared library.
//!
//! The library is loaded at runtime via [`libloading`] and the three
//! entry points this crate needs are resolved once, up front:
//!
//! * `PropsSI`
//! * `HAPropsSI`
//! * `get_global_param_string`

#![allow(non_snake_case)]

use std::ffi::{CString, NulError};
use std::os::raw::{c_char, c_double, c_int, c_long};
use std::path::Path;

use libloading::Library;

// ── CoolProp constants ──────────────────────────────────────────────

/// Size of the buffer handed to `get_global_param_string`.
pub const COOLPROP_STRLEN: usize = 4096;

/// Parameter name of the last-error message.
pub const ERRSTRING_PARAM: &str = "errstring";

// ── Error type ──────────────────────────────────────────────────────
#[derive(Debug)]
pub enum CoolPropSysError {
    /// The shared library could not be found or loaded.
    LibraryLoadFailed(String),
    /// A required symbol was not found in the library.
    SymbolNotFound(String),
}

impl std::fmt::Display for CoolPropSysError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LibraryLoadFailed(msg) => write!(f, "CoolProp library load failed: {msg}"),
            Self::SymbolNotFound(sym) => {
                write!(f, "Symbol not found in CoolProp library: {sym}")
            }
        }
    }
}

impl std::error::Error for CoolPropSysError {}

impl From<CoolPropSysError> for crate::Error {
    fn from(e: CoolPropSysError) -> Self {
        match e {
            CoolPropSysError::LibraryLoadFailed(msg) => Self::LibraryNotFound(msg),
            CoolPropSysError::SymbolNotFound(sym) => Self::SymbolNotFound(sym),
        }
    }
}

// ── Function pointer type aliases ───────────────────────────────────

/// PropsSI(output, name1, prop1, name2, prop2, ref) -> double
type FnPropsSI = unsafe extern "C" fn(
    *const c_char,
    *const c_char,
    c_double,
    *const c_char,
    c_double,
    *const c_char,
) -> c_double;

/// HAPropsSI(output, name1, prop1, name2, prop2, name3, prop3) -> double
type FnHAPropsSI = unsafe extern "C" fn(
    *const c_char,
    *const c_char,
    c_double,
    *const c_char,
    c_double,
    *const c_char,
    c_double,
) -> c_double;

/// get_global_param_string(param, output, n) -> 1 on success
type FnGetGlobalParamString = unsafe extern "C" fn(*const c_char, *mut c_char, c_int) -> c_long;

// ── Dynamic library wrapper ─────────────────────────────────────────

/// Holds a dynamically-loaded CoolProp shared library with
/// **pre-resolved function pointers**.
///
/// All methods are `unsafe`: they forward raw pointers to C++ code the
/// Rust compiler cannot check.
pub struct CoolPropLibrary {
    /// Must stay alive to keep the function pointers valid.
    _lib: Library,

    fn_props_si: FnPropsSI,
    fn_ha_props_si: FnHAPropsSI,
    fn_get_global_param_string: FnGetGlobalParamString,
}

impl CoolPropLibrary {
    // ── Symbol resolution ───────────────────────────────────────────

    fn resolve<T: Copy>(lib: &Library, name: &[u8]) -> Result<T, CoolPropSysError> {
        // SAFETY: the type aliases above match CoolProp's exported C API.
        let sym: libloading::Symbol<T> = unsafe { lib.get(name) }.map_err(|_| {
            let display =
                String::from_utf8_lossy(&name[..name.len().saturating_sub(1)]).to_string();
            CoolPropSysError::SymbolNotFound(display)
        })?;
        Ok(*sym)
    }

    fn resolve_all(lib: Library) -> Result<Self, CoolPropSysError> {
        Ok(Self {
            fn_props_si: Self::resolve(&lib, b"PropsSI\0")?,
            fn_ha_props_si: Self::resolve(&lib, b"HAPropsSI\0")?,
            fn_get_global_param_string: Self::resolve(&lib, b"get_global_param_string\0")?,
            _lib: lib,
        })
    }

    // ── Constructors ────────────────────────────────────────────────

    /// Shared-library file names tried on this platform, in order.
    pub fn candidate_names() -> &'static [&'static str] {
        if cfg!(target_os = "windows") {
            &["CoolProp.dll", "libCoolProp.dll"]
        } else if cfg!(target_os = "macos") {
            &["libCoolProp.dylib", "CoolProp.dylib"]
        } else {
            &["libCoolProp.so", "CoolProp.so"]
        }
    }

    /// Load CoolProp from a **directory** containing the shared library.
    ///
    /// A candidate that exists but fails to load (wrong architecture,
    /// missing runtime) is reported and the next one is tried.
    pub fn load_from_dir(dir: &Path) -> Result<Self, CoolPropSysError> {
        let candidates = Self::candidate_names();
        let mut errors = Vec::new();

        for name in candidates {
            let full = dir.join(name);
            if full.exists() {
                match unsafe { Library::new(&full) } {
                    Ok(lib) => return Self::resolve_all(lib),
                    Err(e) => errors.push(format!("{}: {e}", full.display())),
                }
            }
        }

        let detail = if errors.is_empty() {
            format!(
                "No CoolProp library found in {} (tried: {candidates:?})",
                dir.display()
            )
        } else {
            format!(
                "CoolProp library found but could not be loaded:\n  - {}",
                errors.join("\n  - ")
            )
        };
        Err(CoolPropSysError::LibraryLoadFailed(detail))
    }

    /// Load CoolProp from an **exact file path**.
    pub fn load_from_file(path: &Path) -> Result<Self, CoolPropSysError> {
        let lib = unsafe { Library::new(path) }
            .map_err(|e| CoolPropSysError::LibraryLoadFailed(format!("{}: {e}", path.display())))?;
        Self::resolve_all(lib)
    }

    /// Load CoolProp through the system loader search path
    /// (`PATH` / `LD_LIBRARY_PATH` / `DYLD_LIBRARY_PATH`).
    pub fn load_system() -> Result<Self, CoolPropSysError> {
        let candidates = Self::candidate_names();
        for name in candidates {
            if let Ok(lib) = unsafe { Library::new(*name) } {
                return Self::resolve_all(lib);
            }
        }
        Err(CoolPropSysError::LibraryLoadFailed(format!(
            "No CoolProp library on the system search path (tried: {candidates:?})"
        )))
    }

    // ── CoolProp function wrappers ──────────────────────────────────

    /// Pure-fluid property in SI units.  Returns `_HUGE` or NaN on
    /// failure.
    pub unsafe fn PropsSI(
        &self,
        output: *const c_char,
        name1: *const c_char,
        prop1: c_double,
        name2: *const c_char,
        prop2: c_double,
        fluid: *const c_char,
    ) -> c_double {
        unsafe { (self.fn_props_si)(output, name1, prop1, name2, prop2, fluid) }
    }

    /// Humid-air property in SI units.  Returns `_HUGE` or NaN on
    /// failure.
    pub unsafe fn HAPropsSI(
        &self,
        output: *const c_char,
        name1: *const c_char,
        prop1: c_double,
        name2: *const c_char,
        prop2: c_double,
        name3: *const c_char,
        prop3: c_double,
    ) -> c_double {
        unsafe { (self.fn_ha_props_si)(output, name1, prop1, name2, prop2, name3, prop3) }
    }

    /// Copy a global string parameter (e.g. `"errstring"`) into
    /// `output`, at most `n` bytes.  Returns 1 on success.
    pub unsafe fn get_global_param_string(
        &self,
        param: *const c_char,
        output: *mut c_char,
        n: c_int,
    ) -> c_long {
        unsafe { (self.fn_get_global_param_string)(param, output, n) }
    }
}

// ── String helpers ──────────────────────────────────────────────────

/// Convert a Rust `&str` into a NUL-terminated C string.
pub fn to_c_string(s: &str) -> Result<CString, NulError> {
    CString::new(s)
}

/// Convert a NUL-terminated (or fully-filled) `c_char` buffer back
/// into a trimmed Rust `String`.
pub fn from_c_string(buffer: &[c_char]) -> String {
    let bytes: Vec<u8> = buffer
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_c_string_stops_at_nul_and_trims() {
        let mut buf = [0 as c_char; 16];
        for (i, b) in b" bad fluid \0junk".iter().enumerate() {
            buf[i] = *b as c_char;
        }
        assert_eq!(from_c_string(&buf), "bad fluid");
    }

    #[test]
    fn from_c_string_handles_full_buffer() {
        let buf: Vec<c_char> = b"abc".iter().map(|&b| b as c_char).collect();
        assert_eq!(from_c_string(&buf), "abc");
    }

    #[test]
    fn to_c_string_rejects_interior_nul() {
        assert!(to_c_string("Wa\0ter").is_err());
        assert_eq!(to_c_string("Water").unwrap().as_bytes(), b"Water");
    }

    #[test]
    fn missing_directory_reports_candidates() {
        let err = CoolPropLibrary::load_from_dir(Path::new("/nonexistent/coolprop"))
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains("No CoolProp library found"), "{err}");
    }
}
