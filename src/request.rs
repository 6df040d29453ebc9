//! Validated property requests.
//!
//! A request is only constructible from arguments that are present and
//! well-typed: every name non-empty, every value a finite number.  The
//! checks run in the same order for the typed constructors and for the
//! loosely-typed [`Cell`] ones: names (and fluid) first, values second.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{Error, Result};

/// Identifies a positional argument in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Argument {
    Output,
    /// 1-based name position.
    Name(u8),
    /// 1-based value position.
    Value(u8),
    Fluid,
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Output => write!(f, "output"),
            Self::Name(i) => write!(f, "name{i}"),
            Self::Value(i) => write!(f, "value{i}"),
            Self::Fluid => write!(f, "fluid"),
        }
    }
}

/// One `(name, value)` state input, as typed by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub name: String,
    pub value: f64,
}

/// Pure-fluid query: one output, two state inputs, a fluid.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidRequest {
    pub output: String,
    pub inputs: [Input; 2],
    pub fluid: String,
}

/// Humid-air query: one output, three state inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct HumidAirRequest {
    pub output: String,
    pub inputs: [Input; 3],
}

// ── Validation helpers ──────────────────────────────────────────────

fn require_name(argument: Argument, raw: Option<&str>) -> Result<String> {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(Error::MissingArgument { argument }),
    }
}

fn require_value(argument: Argument, raw: Option<f64>) -> Result<f64> {
    match raw {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(Error::NonNumeric { argument }),
    }
}

impl FluidRequest {
    pub fn new(
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        fluid: &str,
    ) -> Result<Self> {
        Self::build(
            Some(output),
            [Some(name1), Some(name2)],
            [Some(value1), Some(value2)],
            Some(fluid),
        )
    }

    /// Build from host cells laid out as
    /// `output, name1, value1, name2, value2, fluid`.
    pub fn from_cells(cells: &[Cell; 6]) -> Result<Self> {
        let [output, name1, value1, name2, value2, fluid] = cells;
        Self::build(
            output.as_text(),
            [name1.as_text(), name2.as_text()],
            [value1.as_number(), value2.as_number()],
            fluid.as_text(),
        )
    }

    fn build(
        output: Option<&str>,
        names: [Option<&str>; 2],
        values: [Option<f64>; 2],
        fluid: Option<&str>,
    ) -> Result<Self> {
        let output = require_name(Argument::Output, output)?;
        let name1 = require_name(Argument::Name(1), names[0])?;
        let name2 = require_name(Argument::Name(2), names[1])?;
        let fluid = require_name(Argument::Fluid, fluid)?;
        let value1 = require_value(Argument::Value(1), values[0])?;
        let value2 = require_value(Argument::Value(2), values[1])?;

        Ok(Self {
            output,
            inputs: [
                Input { name: name1, value: value1 },
                Input { name: name2, value: value2 },
            ],
            fluid,
        })
    }
}

impl HumidAirRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        output: &str,
        name1: &str, value1: f64,
        name2: &str, value2: f64,
        name3: &str, value3: f64,
    ) -> Result<Self> {
        Self::build(
            Some(output),
            [Some(name1), Some(name2), Some(name3)],
            [Some(value1), Some(value2), Some(value3)],
        )
    }

    /// Build from host cells laid out as
    /// `output, name1, value1, name2, value2, name3, value3`.
    pub fn from_cells(cells: &[Cell; 7]) -> Result<Self> {
        let [output, name1, value1, name2, value2, name3, value3] = cells;
        Self::build(
            output.as_text(),
            [name1.as_text(), name2.as_text(), name3.as_text()],
            [value1.as_number(), value2.as_number(), value3.as_number()],
        )
    }

    fn build(
        output: Option<&str>,
        names: [Option<&str>; 3],
        values: [Option<f64>; 3],
    ) -> Result<Self> {
        let output = require_name(Argument::Output, output)?;
        let name1 = require_name(Argument::Name(1), names[0])?;
        let name2 = require_name(Argument::Name(2), names[1])?;
        let name3 = require_name(Argument::Name(3), names[2])?;
        let value1 = require_value(Argument::Value(1), values[0])?;
        let value2 = require_value(Argument::Value(2), values[1])?;
        let value3 = require_value(Argument::Value(3), values[2])?;

        Ok(Self {
            output,
            inputs: [
                Input { name: name1, value: value1 },
                Input { name: name2, value: value2 },
                Input { name: name3, value: value3 },
            ],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fluid_request_trims_names() {
        let req = FluidRequest::new(" T ", "P", 1.0, "Q", 0.5, "Water").unwrap();
        assert_eq!(req.output, "T");
        assert_eq!(req.inputs[1].name, "Q");
    }

    #[test]
    fn names_are_checked_before_values() {
        let err = FluidRequest::new("T", "P", f64::NAN, "Q", 0.5, "").unwrap_err();
        assert_eq!(err, Error::MissingArgument { argument: Argument::Fluid });
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let err = HumidAirRequest::new("R", "T", 25.0, "P", f64::INFINITY, "W", 0.01).unwrap_err();
        assert_eq!(err, Error::NonNumeric { argument: Argument::Value(2) });
    }

    #[test]
    fn text_in_value_cell_is_non_numeric() {
        let cells = [
            Cell::from("T"),
            Cell::from("P"),
            Cell::from("1.0"),
            Cell::from("Q"),
            Cell::from(0.5),
            Cell::from("Water"),
        ];
        let err = FluidRequest::from_cells(&cells).unwrap_err();
        assert_eq!(err, Error::NonNumeric { argument: Argument::Value(1) });
    }
}
