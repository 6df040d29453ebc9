use serde::{Deserialize, Serialize};

/// Selects which alias table and unit table apply to a property name.
///
/// The two vocabularies overlap (`"t"`, `"p"`, `"k"`, …) but are kept
/// apart: an alias may resolve differently, and convert differently,
/// depending on the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    /// Pure fluids and predefined mixtures (`PropsSI`).
    PureFluid,
    /// Moist air as a fixed mixture model (`HAPropsSI`).
    HumidAir,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PureFluid => write!(f, "pure fluid"),
            Self::HumidAir => write!(f, "humid air"),
        }
    }
}
