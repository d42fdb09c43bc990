use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spin {
    Alpha,
    Beta,
}

/// One molecular orbital as read from program output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MolecularOrbital {
    /// Symmetry label, dot-separated integers such as `"3.1"`.
    pub symmetry: String,
    pub energy: f64,
    pub occupation: f64,
    /// Expansion coefficients over the atomic orbital basis.
    pub coefficients: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spin: Option<Spin>,
}

impl MolecularOrbital {
    pub fn new(
        symmetry: impl Into<String>,
        energy: f64,
        occupation: f64,
        coefficients: Vec<f64>,
    ) -> Self {
        Self {
            symmetry: symmetry.into(),
            energy,
            occupation,
            coefficients,
            spin: None,
        }
    }

    pub fn with_spin(mut self, spin: Spin) -> Self {
        self.spin = Some(spin);
        self
    }

    /// The symmetry label as an integer tuple.
    pub fn symmetry_key(&self) -> Result<Vec<i64>> {
        parse_symmetry_label(&self.symmetry)
    }
}

/// Splits a label like `"12.3"` into `[12, 3]`.
pub fn parse_symmetry_label(label: &str) -> Result<Vec<i64>> {
    label
        .split('.')
        .map(|part| {
            part.trim().parse::<i64>().map_err(|_| {
                Error::invalid_symmetry(label, format!("'{}' is not an integer", part))
            })
        })
        .collect()
}

/// Sorts orbitals by their symmetry label tuples, ascending.
///
/// Orbitals with equal labels keep their relative order. All labels must
/// parse and have the same number of components; otherwise nothing is
/// reordered.
pub fn sort_by_symmetry(orbitals: &mut Vec<MolecularOrbital>) -> Result<()> {
    let mut keyed = Vec::with_capacity(orbitals.len());
    let mut width: Option<usize> = None;

    for mo in orbitals.iter() {
        let key = mo.symmetry_key()?;
        match width {
            Some(w) if w != key.len() => {
                return Err(Error::invalid_symmetry(
                    &mo.symmetry,
                    format!("expected {} components, found {}", w, key.len()),
                ));
            }
            _ => width = Some(key.len()),
        }
        keyed.push(key);
    }

    let mut paired: Vec<(Vec<i64>, MolecularOrbital)> =
        keyed.into_iter().zip(orbitals.drain(..)).collect();
    paired.sort_by(|a, b| a.0.cmp(&b.0));
    orbitals.extend(paired.into_iter().map(|(_, mo)| mo));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orbitals(labels: &[&str]) -> Vec<MolecularOrbital> {
        labels
            .iter()
            .enumerate()
            .map(|(i, l)| MolecularOrbital::new(*l, i as f64, 0.0, vec![]))
            .collect()
    }

    fn labels(mos: &[MolecularOrbital]) -> Vec<&str> {
        mos.iter().map(|mo| mo.symmetry.as_str()).collect()
    }

    #[test]
    fn sorts_by_integer_tuples() {
        let mut mos = orbitals(&["2.1", "1.3", "1.1"]);
        sort_by_symmetry(&mut mos).unwrap();
        assert_eq!(labels(&mos), vec!["1.1", "1.3", "2.1"]);
    }

    #[test]
    fn compares_numerically_not_textually() {
        let mut mos = orbitals(&["10.1", "9.1", "1.2"]);
        sort_by_symmetry(&mut mos).unwrap();
        assert_eq!(labels(&mos), vec!["1.2", "9.1", "10.1"]);
    }

    #[test]
    fn equal_labels_keep_their_order() {
        let mut mos = orbitals(&["1.2", "1.1", "1.2", "1.1"]);
        sort_by_symmetry(&mut mos).unwrap();
        let energies: Vec<f64> = mos.iter().map(|mo| mo.energy).collect();
        assert_eq!(energies, vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn rejects_non_integer_labels() {
        let mut mos = orbitals(&["1.1", "a1.2"]);
        let err = sort_by_symmetry(&mut mos).unwrap_err();
        assert!(matches!(err, Error::InvalidSymmetryLabel { ref label, .. } if label == "a1.2"));
        assert_eq!(labels(&mos), vec!["1.1", "a1.2"]);
    }

    #[test]
    fn rejects_ragged_labels() {
        let mut mos = orbitals(&["2.1", "1"]);
        assert!(matches!(
            sort_by_symmetry(&mut mos),
            Err(Error::InvalidSymmetryLabel { .. })
        ));
        assert_eq!(labels(&mos), vec!["2.1", "1"]);
    }

    #[test]
    fn empty_list_is_fine() {
        let mut mos = Vec::new();
        sort_by_symmetry(&mut mos).unwrap();
        assert!(mos.is_empty());
    }

    #[test]
    fn parses_labels() {
        assert_eq!(parse_symmetry_label("3.2").unwrap(), vec![3, 2]);
        assert_eq!(parse_symmetry_label("7").unwrap(), vec![7]);
        assert!(parse_symmetry_label("").is_err());
        assert!(parse_symmetry_label("1.").is_err());
    }
}
