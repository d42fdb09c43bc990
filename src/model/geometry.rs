use crate::error::{Error, Result};
use crate::periodic::{AtomKey, AtomLookup};
use serde::{Deserialize, Serialize};

/// Per-atom metadata as written by the quantum chemistry program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomInfo {
    /// Element symbol; some programs write the atomic number here instead.
    pub symbol: String,
    /// Atom identity, usually the 1-based index in the input.
    pub label: String,
    /// Nuclear charge.
    pub charge: f64,
}

impl AtomInfo {
    pub fn new(symbol: impl Into<String>, label: impl Into<String>, charge: f64) -> Self {
        Self {
            symbol: symbol.into(),
            label: label.into(),
            charge,
        }
    }

    /// Builds the metadata from raw text fields, parsing the charge.
    pub fn parse(symbol: &str, label: &str, charge: &str) -> Result<Self> {
        let value = charge
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|q| q.is_finite())
            .ok_or_else(|| Error::invalid_charge(label, charge))?;
        Ok(Self::new(symbol.trim(), label.trim(), value))
    }

    pub fn key(&self) -> AtomKey {
        let Ok(key) = self.symbol.parse::<AtomKey>();
        key
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub info: AtomInfo,
    /// Cartesian position in bohr.
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(info: AtomInfo, position: [f64; 3]) -> Self {
        Self { info, position }
    }
}

/// Nuclear geometry with cached centers of mass and charge.
///
/// Centers are stored by [`center_of_mass`](Self::center_of_mass) and
/// [`center_of_charge`](Self::center_of_charge) and are not invalidated when
/// `atoms` changes; call [`invalidate_centers`](Self::invalidate_centers)
/// after editing the atoms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub atoms: Vec<Atom>,
    center_of_mass: Option<[f64; 3]>,
    center_of_charge: Option<[f64; 3]>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_atoms(atoms: Vec<Atom>) -> Self {
        Self {
            atoms,
            ..Self::default()
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| a.position).collect()
    }

    pub fn infos(&self) -> Vec<AtomInfo> {
        self.atoms.iter().map(|a| a.info.clone()).collect()
    }

    /// Last computed center of mass, if any.
    pub fn cached_center_of_mass(&self) -> Option<[f64; 3]> {
        self.center_of_mass
    }

    /// Last computed center of charge, if any.
    pub fn cached_center_of_charge(&self) -> Option<[f64; 3]> {
        self.center_of_charge
    }

    pub fn invalidate_centers(&mut self) {
        self.center_of_mass = None;
        self.center_of_charge = None;
    }

    /// Mass-weighted centroid of the selected atoms (all atoms by default).
    ///
    /// Masses come from `lookup` by the atom's symbol column.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexOutOfRange`] for a subset index past the last atom.
    /// - [`Error::KeyNotFound`] for an atom whose symbol is not in the table.
    /// - [`Error::DivisionByZero`] if the total mass is zero or not finite, including an
    ///   empty selection.
    pub fn center_of_mass(
        &mut self,
        lookup: &AtomLookup<'_>,
        subset: Option<&[usize]>,
    ) -> Result<[f64; 3]> {
        let all: Vec<usize>;
        let indices = match subset {
            Some(indices) => indices,
            None => {
                all = (0..self.atoms.len()).collect();
                &all
            }
        };

        let mut weighted = Vec::with_capacity(indices.len());
        for &idx in indices {
            let atom = self
                .atoms
                .get(idx)
                .ok_or_else(|| Error::out_of_range("geometry", idx, self.atoms.len()))?;
            weighted.push((atom.position, lookup.mass_of(&atom.info.key())?));
        }

        let com = weighted_centroid(&weighted, "center of mass")?;
        self.center_of_mass = Some(com);
        Ok(com)
    }

    /// Charge-weighted centroid of all atoms.
    ///
    /// # Errors
    ///
    /// [`Error::DivisionByZero`] if the charges sum to zero (up to rounding
    /// relative to `Σ|q|`) or the total is not finite.
    pub fn center_of_charge(&mut self) -> Result<[f64; 3]> {
        let weighted: Vec<([f64; 3], f64)> = self
            .atoms
            .iter()
            .map(|a| (a.position, a.info.charge))
            .collect();

        let coc = weighted_centroid(&weighted, "center of charge")?;
        self.center_of_charge = Some(coc);
        Ok(coc)
    }
}

/// Totals within this fraction of `Σ|w|` count as cancelled.
const CANCELLATION_TOLERANCE: f64 = 1e-12;

fn weighted_centroid(points: &[([f64; 3], f64)], quantity: &'static str) -> Result<[f64; 3]> {
    let mut sum = [0.0; 3];
    let mut total = 0.0;
    let mut magnitude = 0.0;
    for (position, weight) in points {
        for (s, x) in sum.iter_mut().zip(position) {
            *s += x * weight;
        }
        total += weight;
        magnitude += weight.abs();
    }

    if !total.is_finite() || total.abs() <= CANCELLATION_TOLERANCE * magnitude {
        return Err(Error::DivisionByZero { quantity });
    }
    Ok(sum.map(|s| s / total))
}
