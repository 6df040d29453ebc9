//! Spreadsheet-facing call surface.
//!
//! A host (Excel-DNA bridge, LibreOffice add-in, a JSON RPC shim, …)
//! hands over loosely-typed cells and expects one cell back: either the
//! number in engineering units or an `"Error: …"` string.  Nothing in
//! here panics or leaks a sentinel value.

use serde::{Deserialize, Serialize};

use crate::backend::PropertyEngine;
use crate::calculator::Calculator;
use crate::error::Result;
use crate::request::{FluidRequest, HumidAirRequest};

/// A spreadsheet cell value as seen by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Blank / omitted argument.
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Non-blank text content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Text(s) if s.starts_with("Error:"))
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self { Self::Number(v) }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self { Self::Text(s.to_string()) }
}

impl From<String> for Cell {
    fn from(s: String) -> Self { Self::Text(s) }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Empty, Into::into)
    }
}

/// A property result becomes a number, every error becomes its
/// `"Error: …"` text.
impl From<Result<f64>> for Cell {
    fn from(result: Result<f64>) -> Self {
        match result {
            Ok(v) => Self::Number(v),
            Err(e) => Self::Text(format!("Error: {e}")),
        }
    }
}

impl<E: PropertyEngine> Calculator<E> {
    /// Pure-fluid spreadsheet function:
    /// `TMPr(output, name1, value1, name2, value2, fluid)`.
    pub fn tmpr(&self, cells: &[Cell; 6]) -> Cell {
        FluidRequest::from_cells(cells)
            .and_then(|req| self.fluid(&req))
            .into()
    }

    /// Humid-air spreadsheet function:
    /// `TMPa(output, name1, value1, name2, value2, name3, value3)`.
    pub fn tmpa(&self, cells: &[Cell; 7]) -> Cell {
        HumidAirRequest::from_cells(cells)
            .and_then(|req| self.humid_air(&req))
            .into()
    }
}
