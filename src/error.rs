//! Error type shared by every module of the crate.
//!
//! Errors are grouped by origin: loading the reference mass table
//! ([`ResourceNotFound`](Error::ResourceNotFound), [`Io`](Error::Io),
//! [`Parse`](Error::Parse)), element lookup
//! ([`KeyNotFound`](Error::KeyNotFound), [`IndexOutOfRange`](Error::IndexOutOfRange)),
//! atom metadata ([`InvalidCharge`](Error::InvalidCharge)),
//! geometry and orbital helpers ([`DivisionByZero`](Error::DivisionByZero),
//! [`InvalidSymmetryLabel`](Error::InvalidSymmetryLabel)) and record
//! persistence ([`MissingGroup`](Error::MissingGroup),
//! [`Serialization`](Error::Serialization)).

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by mass lookups, geometry calculations and record storage.
#[derive(Debug, Error)]
pub enum Error {
    /// The reference atomic weight file does not exist.
    #[error("reference atomic weight table not found at '{}'", path.display())]
    ResourceNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Reading the reference file failed for a reason other than absence.
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A numeric field in the reference table could not be converted.
    #[error("failed to parse atomic weight table: {details} (at line {line})")]
    Parse {
        /// 1-based line number in the table source.
        line: usize,
        /// Description of the problem.
        details: String,
    },

    /// A nuclear charge field is not a number.
    #[error("invalid nuclear charge '{value}' for atom {label}")]
    InvalidCharge {
        /// Atom identity.
        label: String,
        /// Text of the charge field.
        value: String,
    },

    /// An atomic symbol or atomic number has no entry in the table.
    #[error("no atomic weight entry for '{0}'")]
    KeyNotFound(String),

    /// An index lies outside the collection it addresses.
    #[error("index {index} is out of range for {what} of length {len}")]
    IndexOutOfRange {
        /// What was being indexed (table, geometry).
        what: &'static str,
        /// Offending index as supplied by the caller.
        index: usize,
        /// Length of the collection.
        len: usize,
    },

    /// A weighted centroid was requested with a zero or non-finite total weight.
    #[error("cannot compute {quantity}: total weight is zero")]
    DivisionByZero {
        /// Name of the derived quantity.
        quantity: &'static str,
    },

    /// A molecular orbital symmetry label is not a dot-separated integer tuple,
    /// or labels differ in the number of components.
    #[error("invalid symmetry label '{label}': {details}")]
    InvalidSymmetryLabel {
        /// The label as stored on the orbital.
        label: String,
        /// Description of the problem.
        details: String,
    },

    /// A record store has nothing stored under the requested group.
    #[error("no record stored under group '{0}'")]
    MissingGroup(String),

    /// A record could not be converted to or from its stored value form.
    #[error("record conversion failed: {0}")]
    Serialization(String),
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl Error {
    /// Creates a [`Parse`](Error::Parse) error.
    pub fn parse(line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            line,
            details: details.into(),
        }
    }

    /// Creates an [`InvalidSymmetryLabel`](Error::InvalidSymmetryLabel) error.
    pub fn invalid_symmetry(label: &str, details: impl Into<String>) -> Self {
        Self::InvalidSymmetryLabel {
            label: label.to_string(),
            details: details.into(),
        }
    }

    /// Creates an [`InvalidCharge`](Error::InvalidCharge) error.
    pub fn invalid_charge(label: &str, value: &str) -> Self {
        Self::InvalidCharge {
            label: label.trim().to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn out_of_range(what: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { what, index, len }
    }
}
