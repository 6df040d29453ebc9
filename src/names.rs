//! Property-name normalization.
//!
//! Spreadsheet users type `temperature`, `Temp`, `t` or `T` and expect
//! the same result.  CoolProp, on the other hand, wants one exact,
//! case-sensitive token per property.  This module maps the former onto
//! the latter with one static table per [`Domain`].
//!
//! | Typed                         | Pure fluid | Humid air |
//! |-------------------------------|------------|-----------|
//! | `t`, `temperature`, `temp`    | `T`        | `T` (`t` only) |
//! | `p`, `pressure`               | `P`        | `P` (`p` only) |
//! | `h`, `enthalpy`, `hmass`      | `H`        | –         |
//! | `rh`, `relhum`                | –          | `R`       |
//! | `mu`, `viscosity`             | `MU`       | `MU`      |
//!
//! Unknown names are returned verbatim so CoolProp can judge them itself.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::Domain;

// ────────────────────────────────────────────────────────────────────
//  Alias tables (lower-case alias → canonical token)
// ────────────────────────────────────────────────────────────────────

const PURE_FLUID_ALIASES: &[(&str, &str)] = &[
    // ── State variables ─────────────────────────────────────────────
    ("t", "T"),
    ("temp", "T"),
    ("temperature", "T"),
    ("p", "P"),
    ("pres", "P"),
    ("pressure", "P"),
    ("q", "Q"),
    ("x", "Q"),
    ("quality", "Q"),
    // ── Mass-specific energies ──────────────────────────────────────
    ("h", "H"),
    ("enth", "H"),
    ("enthalpy", "H"),
    ("hmass", "H"),
    ("u", "U"),
    ("internalenergy", "U"),
    ("umass", "U"),
    ("s", "S"),
    ("entr", "S"),
    ("entropy", "S"),
    ("smass", "S"),
    ("g", "G"),
    ("gmass", "G"),
    ("helmholtzmass", "HELMHOLTZMASS"),
    ("helmoltzmass", "HELMHOLTZMASS"),
    // ── Molar quantities ────────────────────────────────────────────
    ("umolar", "Umolar"),
    ("smolar", "Smolar"),
    ("cpmolar", "Cpmolar"),
    ("cvmolar", "Cvmolar"),
    ("helmholtzmolar", "HELMHOLTZMOLAR"),
    ("smolar_residual", "Smolar_residual"),
    // ── Densities ───────────────────────────────────────────────────
    ("rho", "D"),
    ("dens", "D"),
    ("dmass", "D"),
    ("dmolar", "Dmolar"),
    ("dmol", "Dmolar"),
    // ── Heat capacities ─────────────────────────────────────────────
    ("cv", "Cvmass"),
    ("cvmass", "Cvmass"),
    ("cp", "Cpmass"),
    ("cpmass", "Cpmass"),
    // ── Reduced state / Helmholtz terms ─────────────────────────────
    ("delta", "Delta"),
    ("tau", "Tau"),
    ("alpha0", "Alpha0"),
    ("alphar", "Alphar"),
    ("bvirial", "Bvirial"),
    ("cvirial", "Cvirial"),
    // ── Derived and transport properties ────────────────────────────
    ("a", "A"),
    ("speed_of_sound", "A"),
    ("k", "K"),
    ("conductivity", "K"),
    ("mu", "MU"),
    ("viscosity", "MU"),
    ("z", "Z"),
    ("prandtl", "Prandtl"),
    ("gamma", "gamma"),
    ("fh", "FH"),
    ("isobaric_expansion_coefficient", "isobaric_expansion_coefficient"),
    ("isothermal_compressibility", "isothermal_compressibility"),
    ("surface_tension", "surface_tension"),
    ("phase", "Phase"),
    // ── Fluid constants ─────────────────────────────────────────────
    ("mm", "MM"),
    ("molar_mass", "MM"),
    ("dipole_moment", "DIPOLE_MOMENT"),
    ("dipoe_moment", "DIPOLE_MOMENT"),
    ("pcrit", "Pcrit"),
    ("p_critical", "Pcrit"),
    ("tcrit", "Tcrit"),
    ("rhocrit", "rhocrit"),
    ("ptriple", "ptriple"),
    ("ttriple", "Ttriple"),
    ("t_freeze", "T_freeze"),
    ("pmax", "pmax"),
    ("pmin", "pmin"),
    ("tmax", "Tmax"),
    ("tmin", "Tmin"),
    ("p_reducing", "p_reducing"),
    ("t_reducing", "T_reducing"),
    ("rhomass_reducing", "rhomass_reducing"),
];

const HUMID_AIR_ALIASES: &[(&str, &str)] = &[
    // ── Temperatures ────────────────────────────────────────────────
    ("t", "T"),
    ("tdb", "T"),
    ("t_db", "T"),
    ("twb", "Twb"),
    ("t_wb", "Twb"),
    ("wetbulb", "Twb"),
    ("tdp", "Tdp"),
    ("t_dp", "Tdp"),
    ("dewpoint", "Tdp"),
    // ── Pressures ───────────────────────────────────────────────────
    ("p", "P"),
    ("p_w", "P_w"),
    // ── Moisture content ────────────────────────────────────────────
    ("r", "R"),
    ("rh", "R"),
    ("relhum", "R"),
    ("w", "W"),
    ("omega", "W"),
    ("humrat", "W"),
    ("psi_w", "Psi_w"),
    ("y", "Psi_w"),
    // ── Energies per kg dry air / humid air ─────────────────────────
    ("hda", "Hda"),
    ("hha", "Hha"),
    ("sda", "Sda"),
    ("sha", "Sha"),
    ("cda", "Cda"),
    ("cpda", "Cda"),
    ("cha", "Cha"),
    ("cpha", "Cha"),
    // ── Volumes and densities ───────────────────────────────────────
    ("vda", "Vda"),
    ("vha", "Vha"),
    ("dda", "Dda"),
    ("rhoda", "Dda"),
    ("dha", "Dha"),
    ("rhoha", "Dha"),
    // ── Transport / misc ────────────────────────────────────────────
    ("k", "K"),
    ("conductivity", "K"),
    ("mu", "MU"),
    ("viscosity", "MU"),
    ("z", "Z"),
];

static PURE_FLUID: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| PURE_FLUID_ALIASES.iter().copied().collect());

static HUMID_AIR: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HUMID_AIR_ALIASES.iter().copied().collect());

fn table(domain: Domain) -> &'static HashMap<&'static str, &'static str> {
    match domain {
        Domain::PureFluid => &PURE_FLUID,
        Domain::HumidAir => &HUMID_AIR,
    }
}

// ────────────────────────────────────────────────────────────────────
//  Public API
// ────────────────────────────────────────────────────────────────────

/// Map a free-form property name onto the canonical CoolProp token.
///
/// Lookup is case-insensitive.  A miss returns `raw` untouched (not
/// lower-cased).
///
/// ```
/// use coolprop_eng::{normalize, Domain};
///
/// assert_eq!(normalize(Domain::PureFluid, "Enthalpy"), "H");
/// assert_eq!(normalize(Domain::HumidAir, "RH"), "R");
/// assert_eq!(normalize(Domain::PureFluid, "Hmolar"), "Hmolar");
/// ```
pub fn normalize(domain: Domain, raw: &str) -> &str {
    lookup(domain, raw).unwrap_or(raw)
}

/// Canonical token for `raw`, or `None` if the alias is unknown.
pub fn lookup(domain: Domain, raw: &str) -> Option<&'static str> {
    table(domain).get(raw.to_lowercase().as_str()).copied()
}

/// Every `(alias, canonical)` pair known for `domain`, in table order.
pub fn aliases(domain: Domain) -> impl Iterator<Item = (&'static str, &'static str)> {
    let entries = match domain {
        Domain::PureFluid => PURE_FLUID_ALIASES,
        Domain::HumidAir => HUMID_AIR_ALIASES,
    };
    entries.iter().copied()
}
