use std::os::raw::{c_char, c_int};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::backend::PropertyEngine;
use crate::config::{self, LibraryLocation};
use crate::error::*;
use crate::sys::*;

// ── Global lock (CoolProp's error string is process-wide) ───────────
// Every native call goes through this lock so two calls never
// interleave inside the library.  It does not span a call and the
// following `last_error`, see `PropertyEngine` for what that means.
static COOLPROP_LOCK: Mutex<()> = Mutex::new(());

/// [`PropertyEngine`] backed by the CoolProp shared library.
pub struct CoolProp {
    lib: CoolPropLibrary,
}

impl CoolProp {
    /// Locate and load CoolProp (`COOLPROP_PATH`, `.env`, standard
    /// directories, system search path).
    pub fn discover() -> Result<Self> {
        Self::load(config::find_library())
    }

    /// Load CoolProp from a library file or a directory containing it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let loc = LibraryLocation::from_path(path)
            .ok_or_else(|| Error::LibraryNotFound(path.display().to_string()))?;
        Self::load(loc)
    }

    pub fn load(loc: LibraryLocation) -> Result<Self> {
        let lib = match &loc {
            LibraryLocation::File(file) => CoolPropLibrary::load_from_file(file)?,
            LibraryLocation::Dir(dir) => CoolPropLibrary::load_from_dir(dir)?,
            LibraryLocation::System => CoolPropLibrary::load_system()?,
        };
        debug!(?loc, "CoolProp loaded");
        Ok(Self { lib })
    }

    /// Acquire the global CoolProp lock, recovering gracefully from
    /// poisoning instead of panicking.
    fn lock_coolprop() -> Result<MutexGuard<'static, ()>> {
        COOLPROP_LOCK.lock().map_err(|_| Error::Engine {
            message: "CoolProp global lock is poisoned (a previous call panicked)".into(),
        })
    }

    /// Marshal a name argument; an interior NUL cannot cross the C ABI.
    fn c_arg(s: &str) -> Result<std::ffi::CString> {
        to_c_string(s).map_err(|_| Error::Engine {
            message: format!("argument {s:?} contains a NUL byte"),
        })
    }
}

impl PropertyEngine for CoolProp {
    fn props_si(
        &self,
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        fluid: &str,
    ) -> Result<f64> {
        let c_output = Self::c_arg(output)?;
        let c_name1 = Self::c_arg(name1)?;
        let c_name2 = Self::c_arg(name2)?;
        let c_fluid = Self::c_arg(fluid)?;

        let _guard = Self::lock_coolprop()?;
        debug!(output, name1, value1, name2, value2, fluid, "PropsSI");
        let raw = unsafe {
            self.lib.PropsSI(
                c_output.as_ptr(),
                c_name1.as_ptr(),
                value1,
                c_name2.as_ptr(),
                value2,
                c_fluid.as_ptr(),
            )
        };
        Ok(raw)
    }

    fn ha_props_si(
        &self,
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        name3: &str, value3: f64,
    ) -> Result<f64> {
        let c_output = Self::c_arg(output)?;
        let c_name1 = Self::c_arg(name1)?;
        let c_name2 = Self::c_arg(name2)?;
        let c_name3 = Self::c_arg(name3)?;

        let _guard = Self::lock_coolprop()?;
        debug!(output, name1, value1, name2, value2, name3, value3, "HAPropsSI");
        let raw = unsafe {
            self.lib.HAPropsSI(
                c_output.as_ptr(),
                c_name1.as_ptr(),
                value1,
                c_name2.as_ptr(),
                value2,
                c_name3.as_ptr(),
                value3,
            )
        };
        Ok(raw)
    }

    fn last_error(&self) -> String {
        let Ok(_guard) = Self::lock_coolprop() else {
            return String::new();
        };
        let Ok(param) = to_c_string(ERRSTRING_PARAM) else {
            return String::new();
        };
        let mut buf = vec![0 as c_char; COOLPROP_STRLEN];

        let ok = unsafe {
            self.lib.get_global_param_string(
                param.as_ptr(),
                buf.as_mut_ptr(),
                COOLPROP_STRLEN as c_int,
            )
        };
        if ok != 1 {
            warn!("get_global_param_string(\"{ERRSTRING_PARAM}\") failed");
            return String::new();
        }
        from_c_string(&buf)
    }
}
