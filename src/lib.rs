//! Containers and small numerical helpers for post-processing the output of
//! quantum chemistry programs.
//!
//! # Features
//!
//! - **Standard atomic weights** — A NIST weight table bundled with the crate,
//!   parsed once on first use and queried by atomic number or symbol
//! - **Geometry** — Atoms with nuclear charges and positions, plus centers of
//!   mass and charge
//! - **Calculation records** — Basis set, molecular orbitals, energies and
//!   CI expansions in typed structures
//! - **Persistence** — Records convert to string-keyed tables and can be
//!   stored under group paths in any [`RecordStore`]
//!
//! # Quick Start
//!
//! ```
//! use qcinfo::{Atom, AtomInfo, AtomLookup, Geometry, MolecularOrbital, QcInfo};
//!
//! let mut qc = QcInfo::new();
//! qc.geometry = Geometry::from_atoms(vec![
//!     Atom::new(AtomInfo::new("H", "1", 1.0), [0.0, 0.0, 0.0]),
//!     Atom::new(AtomInfo::new("H", "2", 1.0), [0.0, 0.0, 1.4]),
//! ]);
//! qc.mo_spec = vec![
//!     MolecularOrbital::new("2.1", 0.67, 0.0, vec![0.55, -0.55]),
//!     MolecularOrbital::new("1.1", -0.59, 2.0, vec![0.55, 0.55]),
//! ];
//!
//! let com = qc.center_of_mass(&AtomLookup::global(), None)?;
//! assert!((com[2] - 0.7).abs() < 1e-12);
//!
//! qc.sort_mo_sym()?;
//! assert_eq!(qc.mo_spec[0].symmetry, "1.1");
//! # Ok::<(), qcinfo::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`periodic`] — Weight table parser, lazily loaded table service, lookups
//! - [`model`] — Geometry, basis, orbitals, [`QcInfo`] and [`CiInfo`]
//! - [`store`] — [`RecordStore`] contract and the in-memory [`MemoryStore`]
//!
//! # Concurrency
//!
//! The process-wide [`MassTableService::global`] is safe to share between
//! threads. Two threads racing on the very first load may both parse the
//! table; only one result is kept. Call
//! [`ensure_loaded`](MassTableService::ensure_loaded) at startup to avoid it.

mod error;

pub mod model;
pub mod periodic;
pub mod store;

pub use error::{Error, Result};

pub use periodic::{
    AtomKey, AtomLookup, LookupConfig, MassEntry, MassTable, MassTableService, MassUnit,
    TableSource, U_TO_ME,
};

pub use model::basis::{AoShell, Primitive, SphericalComponent};
pub use model::ci::{CiInfo, DEFAULT_CI_GROUP};
pub use model::geometry::{Atom, AtomInfo, Geometry};
pub use model::orbital::{MolecularOrbital, Spin, parse_symmetry_label, sort_by_symmetry};
pub use model::qcinfo::{DEFAULT_QC_GROUP, ExcitedStates, QcInfo};

pub use store::{MemoryStore, Record, RecordStore};
