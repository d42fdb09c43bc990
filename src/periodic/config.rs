use std::path::PathBuf;

/// Atomic mass units (dalton) per electron mass.
pub const U_TO_ME: f64 = 1822.88839;

/// Where the reference atomic weight table is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableSource {
    /// The table compiled into the crate (`resources/atomic_weights.txt`).
    #[default]
    Embedded,
    /// A NIST "Linearized ASCII Output" file on disk.
    Path(PathBuf),
    /// Table text held in memory.
    Text(String),
}

/// Unit in which atomic masses are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MassUnit {
    /// Unified atomic mass units, as tabulated.
    Dalton,
    /// Atomic units of mass (electron masses).
    #[default]
    AtomicUnits,
}

impl MassUnit {
    /// Factor converting a tabulated weight into this unit.
    #[inline]
    pub fn factor(&self) -> f64 {
        match self {
            MassUnit::Dalton => 1.0,
            MassUnit::AtomicUnits => U_TO_ME,
        }
    }
}

/// Settings for a [`MassTableService`](super::MassTableService) and the
/// [`AtomLookup`](super::AtomLookup) built on it.
///
/// # Examples
///
/// ```
/// use qcinfo::{LookupConfig, MassUnit, TableSource};
///
/// let config = LookupConfig {
///     unit: MassUnit::Dalton,
///     ..Default::default()
/// };
/// assert_eq!(config.source, TableSource::Embedded);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupConfig {
    /// Table source.
    pub source: TableSource,
    /// Unit returned by [`AtomLookup::mass_of`](super::AtomLookup::mass_of).
    pub unit: MassUnit,
}
