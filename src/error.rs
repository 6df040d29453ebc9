use thiserror::Error;

use crate::request::Argument;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A required name or fluid argument is missing or empty.
    #[error("Missing parameter: {argument}")]
    MissingArgument { argument: Argument },

    /// A value argument is missing, text, or not a finite number.
    #[error("Non-numeric input for {argument}")]
    NonNumeric { argument: Argument },

    /// The engine returned its failure sentinel (NaN or |x| ≥ 1e308).
    /// `message` is the engine's own diagnostic text.
    #[error("CoolProp failed. {message}")]
    Computation { message: String },

    /// The native call itself raised.
    #[error("{message}")]
    Engine { message: String },

    /// The CoolProp shared library could not be located or loaded.
    #[error("CoolProp library not found: {0}")]
    LibraryNotFound(String),

    /// The library loaded but lacks a required entry point.
    #[error("Symbol not found in CoolProp library: {0}")]
    SymbolNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// `true` for errors detected before the engine was called.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingArgument { .. } | Self::NonNumeric { .. })
    }
}
