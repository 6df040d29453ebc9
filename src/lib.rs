//! # coolprop-eng
//!
//! Engineering-unit spreadsheet functions over
//! [CoolProp](http://www.coolprop.org/) — pure-fluid and humid-air
//! properties in °C, bar and kJ/kg instead of K, Pa and J/kg.
//!
//! ## Highlights
//!
//! * **Forgiving names** — `"temperature"`, `"Temp"`, `"t"` all mean `T`
//! * **Engineering units** — °C, bar, kJ/kg, kJ/(kg·K) in and out
//! * **Humid air** — `evaluate_ha("RH", "Tdb", 25.0, "P", 1.01325, "W", 0.01)`
//! * **Readable failures** — NaN / 1e308 sentinels become [`Error::Computation`]
//!   carrying CoolProp's own message
//! * **Spreadsheet surface** — [`Calculator::tmpr`] / [`Calculator::tmpa`]
//!   take loosely-typed [`Cell`]s and return a number or `"Error: …"`
//!
//! ## Quick example
//!
//! ```no_run
//! use coolprop_eng::Calculator;
//!
//! let calc = Calculator::new()?;
//!
//! // Saturated water at 1 bar, °C
//! let t = calc.evaluate("T", "P", 1.0, "Q", 0.0, "Water")?;
//! println!("Tsat(1 bar) = {t:.2} °C");
//!
//! // Latent heat, kJ/kg
//! let hv = calc.evaluate("enthalpy", "P", 1.0, "Q", 1.0, "Water")?;
//! let hl = calc.evaluate("enthalpy", "P", 1.0, "Q", 0.0, "Water")?;
//! println!("h_fg = {:.1} kJ/kg", hv - hl);
//! # Ok::<(), coolprop_eng::Error>(())
//! ```
//!
//! ## Library discovery
//!
//! [`Calculator::new`] reads `COOLPROP_PATH` (environment or `.env`),
//! then standard install directories, then the system loader path.  Use
//! [`Calculator::from_path`] to point at a file directly, or
//! [`Calculator::with_engine`] to plug in any [`PropertyEngine`].
//!
//! ## Thread safety
//!
//! Native calls are serialized through a global lock, but CoolProp's
//! error string is process-wide: diagnostic messages are best-effort
//! when several threads fail at the same time.

// ── Internal modules ─────────────────────────────────────────────────
pub mod backend;
pub mod calculator;
pub mod cell;
pub mod config;
pub mod converter;
pub mod domain;
pub mod error;
pub mod names;
pub mod request;
pub mod sys;

// ── Public re-exports ────────────────────────────────────────────────
pub use backend::PropertyEngine;
pub use backend::coolprop::CoolProp;
pub use calculator::{Calculator, is_sentinel};
pub use cell::Cell;
pub use converter::{UnitRule, from_si, to_si};
pub use domain::Domain;
pub use error::{Error, Result};
pub use names::normalize;
pub use request::{Argument, FluidRequest, HumidAirRequest, Input};
