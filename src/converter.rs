//! Engineering-unit ⇄ SI conversion for CoolProp values.
//!
//! CoolProp works in strict SI: **K, Pa, J/kg, J/(kg·K)**.  Spreadsheet
//! users work in **°C, bar, kJ/kg, kJ/(kg·K)**.  Every canonical property
//! token maps to one [`UnitRule`]; tokens without an entry convert as
//! identity.
//!
//! # Pure fluid
//!
//! | Token                                   | Engineering  | SI        | Rule        |
//! |-----------------------------------------|--------------|-----------|-------------|
//! | `T`                                     | °C           | K         | ± 273.15    |
//! | `P`                                     | bar          | Pa        | × 1e5       |
//! | `H`, `U`                                | kJ/kg        | J/kg      | × 1000      |
//! | `S`, `Cvmass`, `Cpmass`, `Cp`           | kJ/(kg·K)    | J/(kg·K)  | × 1000      |
//! | anything else (`D`, `Q`, `MU`, `K`, …)  | SI           | SI        | identity    |
//!
//! # Humid air
//!
//! | Token                                   | Engineering  | SI        | Rule        |
//! |-----------------------------------------|--------------|-----------|-------------|
//! | `T`, `Twb`, `Tdp`                       | °C           | K         | ± 273.15    |
//! | `P`, `P_w`                              | bar          | Pa        | × 1e5       |
//! | `Hda`, `Hha`                            | kJ/kg        | J/kg      | × 1000      |
//! | `Sda`, `Sha`, `Cda`, `Cha`              | kJ/(kg·K)    | J/(kg·K)  | × 1000      |
//! | anything else (`W`, `R`, `MU`, `K`, …)  | SI           | SI        | identity    |

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::Domain;

/// Offset between degrees Celsius and kelvin.
pub const CELSIUS_OFFSET: f64 = 273.15;
/// Pascal per bar.
pub const PA_PER_BAR: f64 = 1e5;
/// J per kJ.
pub const J_PER_KJ: f64 = 1000.0;

// ────────────────────────────────────────────────────────────────────
//  UnitRule
// ────────────────────────────────────────────────────────────────────

/// A fixed, invertible engineering → SI transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitRule {
    /// Value is already SI.
    Identity,
    /// `si = eng + offset`
    Offset(f64),
    /// `si = eng × factor`
    Scale(f64),
}

impl UnitRule {
    /// Engineering → SI.
    pub fn to_si(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Offset(offset) => value + offset,
            Self::Scale(factor) => value * factor,
        }
    }

    /// SI → engineering.
    pub fn from_si(self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::Offset(offset) => value - offset,
            Self::Scale(factor) => value / factor,
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Unit tables
// ────────────────────────────────────────────────────────────────────

const CELSIUS: UnitRule = UnitRule::Offset(CELSIUS_OFFSET);
const BAR: UnitRule = UnitRule::Scale(PA_PER_BAR);
const KILO: UnitRule = UnitRule::Scale(J_PER_KJ);

const PURE_FLUID_RULES: &[(&str, UnitRule)] = &[
    ("T", CELSIUS),
    ("P", BAR),
    ("H", KILO),
    ("U", KILO),
    ("S", KILO),
    ("Cvmass", KILO),
    ("Cpmass", KILO),
    ("Cp", KILO),
];

const HUMID_AIR_RULES: &[(&str, UnitRule)] = &[
    ("T", CELSIUS),
    ("Twb", CELSIUS),
    ("Tdp", CELSIUS),
    ("P", BAR),
    ("P_w", BAR),
    ("Hda", KILO),
    ("Hha", KILO),
    ("Sda", KILO),
    ("Sha", KILO),
    ("Cda", KILO),
    ("Cha", KILO),
];

static PURE_FLUID: LazyLock<HashMap<&'static str, UnitRule>> =
    LazyLock::new(|| PURE_FLUID_RULES.iter().copied().collect());

static HUMID_AIR: LazyLock<HashMap<&'static str, UnitRule>> =
    LazyLock::new(|| HUMID_AIR_RULES.iter().copied().collect());

// ────────────────────────────────────────────────────────────────────
//  Public API
// ────────────────────────────────────────────────────────────────────

/// Rule for a canonical token, `None` if it converts as identity.
///
/// Matching is exact: pass tokens through [`normalize`](crate::normalize)
/// first.
pub fn rule(domain: Domain, canonical: &str) -> Option<UnitRule> {
    let table = match domain {
        Domain::PureFluid => &PURE_FLUID,
        Domain::HumidAir => &HUMID_AIR,
    };
    table.get(canonical).copied()
}

/// Every token with a non-identity rule in `domain`.
pub fn rules(domain: Domain) -> impl Iterator<Item = (&'static str, UnitRule)> {
    let entries = match domain {
        Domain::PureFluid => PURE_FLUID_RULES,
        Domain::HumidAir => HUMID_AIR_RULES,
    };
    entries.iter().copied()
}

/// Convert a caller-supplied engineering value to SI.
///
/// ```
/// use coolprop_eng::{to_si, Domain};
///
/// assert_eq!(to_si(Domain::PureFluid, "P", 1.0), 1e5);
/// ```
pub fn to_si(domain: Domain, canonical: &str, value: f64) -> f64 {
    rule(domain, canonical).unwrap_or(UnitRule::Identity).to_si(value)
}

/// Convert an SI value returned by CoolProp to engineering units.
pub fn from_si(domain: Domain, canonical: &str, value: f64) -> f64 {
    rule(domain, canonical).unwrap_or(UnitRule::Identity).from_si(value)
}
