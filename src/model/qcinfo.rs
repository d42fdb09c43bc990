use super::basis::{AoShell, SphericalComponent};
use super::geometry::{Atom, AtomInfo, Geometry};
use super::orbital::{self, MolecularOrbital};
use crate::error::{Error, Result};
use crate::periodic::AtomLookup;
use crate::store::{self, Record, RecordStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Group under which [`QcInfo::save`] stores a calculation by default.
pub const DEFAULT_QC_GROUP: &str = "/qc";

/// Excited state summary from a response or CI calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExcitedStates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplicity: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<Vec<f64>>,
}

/// Everything read from the output of one quantum chemistry calculation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QcInfo {
    pub geometry: Geometry,
    pub ao_spec: Vec<AoShell>,
    /// Explicit spherical components, when the basis is spherical.
    pub ao_spherical: Option<Vec<SphericalComponent>>,
    pub mo_spec: Vec<MolecularOrbital>,
    /// Total energy in hartree.
    pub etot: f64,
    /// Population analysis results keyed by method (e.g. `"mulliken"`).
    pub pop_ana: BTreeMap<String, Vec<f64>>,
    pub states: ExcitedStates,
    pub dipole_moments: Option<Vec<[f64; 3]>>,
}

/// Persisted subset of a [`QcInfo`].
#[derive(Debug, Serialize, Deserialize)]
struct QcRecord {
    geo_spec: Vec<[f64; 3]>,
    geo_info: Vec<AtomInfo>,
    ao_spec: Vec<AoShell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ao_spherical: Option<Vec<SphericalComponent>>,
    mo_spec: Vec<MolecularOrbital>,
}

impl QcInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Independent copy of the whole record.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Reorders `mo_spec` by symmetry label; see [`orbital::sort_by_symmetry`].
    pub fn sort_mo_sym(&mut self) -> Result<()> {
        orbital::sort_by_symmetry(&mut self.mo_spec)
    }

    pub fn center_of_mass(
        &mut self,
        lookup: &AtomLookup<'_>,
        subset: Option<&[usize]>,
    ) -> Result<[f64; 3]> {
        self.geometry.center_of_mass(lookup, subset)
    }

    pub fn center_of_charge(&mut self) -> Result<[f64; 3]> {
        self.geometry.center_of_charge()
    }

    /// Exports geometry, basis set and orbitals.
    ///
    /// The record holds the fields `geo_spec`, `geo_info`, `ao_spec`,
    /// `ao_spherical` (only when present) and `mo_spec`.
    pub fn to_record(&self) -> Result<Record> {
        store::to_record(&QcRecord {
            geo_spec: self.geometry.positions(),
            geo_info: self.geometry.infos(),
            ao_spec: self.ao_spec.clone(),
            ao_spherical: self.ao_spherical.clone(),
            mo_spec: self.mo_spec.clone(),
        })
    }

    /// Rebuilds a calculation from a record made by [`to_record`](Self::to_record).
    ///
    /// Fields outside the record (energy, population analysis, states,
    /// dipole moments) take their defaults.
    pub fn from_record(record: Record) -> Result<Self> {
        let rec: QcRecord = store::from_record(record)?;
        if rec.geo_spec.len() != rec.geo_info.len() {
            return Err(Error::Serialization(format!(
                "geo_spec has {} atoms but geo_info has {}",
                rec.geo_spec.len(),
                rec.geo_info.len()
            )));
        }

        let atoms = rec
            .geo_info
            .into_iter()
            .zip(rec.geo_spec)
            .map(|(info, position)| Atom::new(info, position))
            .collect();

        Ok(Self {
            geometry: Geometry::from_atoms(atoms),
            ao_spec: rec.ao_spec,
            ao_spherical: rec.ao_spherical,
            mo_spec: rec.mo_spec,
            ..Self::default()
        })
    }

    pub fn save<S: RecordStore>(&self, store: &mut S, group: &str) -> Result<()> {
        store.append(group, self.to_record()?)
    }

    pub fn load<S: RecordStore>(store: &S, group: &str) -> Result<Self> {
        Self::from_record(store.retrieve(group)?)
    }
}
