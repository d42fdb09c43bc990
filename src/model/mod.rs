//! Records for parsed quantum chemistry output.
//!
//! - [`geometry`] – Atoms with metadata and positions; centers of mass and charge.
//! - [`basis`] – Contracted atomic orbital shells.
//! - [`orbital`] – Molecular orbitals and symmetry-label ordering.
//! - [`qcinfo`] – [`QcInfo`](qcinfo::QcInfo), the full record of one calculation.
//! - [`ci`] – [`CiInfo`](ci::CiInfo), a configuration interaction expansion.

pub mod basis;
pub mod ci;
pub mod geometry;
pub mod orbital;
pub mod qcinfo;
