//! Standard atomic weights and element lookup.
//!
//! - [`table`] – Parser for the NIST "Linearized ASCII Output" weight table.
//! - [`service`] – Lazily loaded, shareable owner of a parsed table.
//! - [`lookup`] – Mass and symbol queries by atomic number or symbol.
//! - [`config`] – Table source and mass unit selection.

pub mod config;
pub mod lookup;
pub mod service;
pub mod table;

pub use config::{LookupConfig, MassUnit, TableSource, U_TO_ME};
pub use lookup::{AtomKey, AtomLookup};
pub use service::MassTableService;
pub use table::{MassEntry, MassTable};
