use super::config::MassUnit;
use super::service::MassTableService;
use crate::error::{Error, Result};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifies an element either by atomic number or by symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AtomKey {
    AtomicNumber(usize),
    Symbol(String),
}

impl fmt::Display for AtomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtomKey::AtomicNumber(n) => write!(f, "Z={}", n),
            AtomKey::Symbol(s) => write!(f, "{}", s),
        }
    }
}

impl From<usize> for AtomKey {
    fn from(n: usize) -> Self {
        AtomKey::AtomicNumber(n)
    }
}

impl From<&str> for AtomKey {
    fn from(s: &str) -> Self {
        AtomKey::Symbol(s.to_string())
    }
}

impl From<String> for AtomKey {
    fn from(s: String) -> Self {
        AtomKey::Symbol(s)
    }
}

/// Integer text becomes an atomic number, anything else a symbol.
///
/// Geometry records written by some programs carry the nuclear charge in
/// the symbol column, so `"6"` and `"C"` must resolve to the same element.
impl FromStr for AtomKey {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<usize>() {
            Ok(n) => AtomKey::AtomicNumber(n),
            Err(_) => AtomKey::Symbol(s.to_string()),
        })
    }
}

/// Mass and symbol queries against a [`MassTableService`].
///
/// Every query makes sure the service has its table loaded first.
///
/// # Examples
///
/// ```
/// use qcinfo::{AtomKey, AtomLookup};
///
/// let lookup = AtomLookup::global();
/// let by_number = lookup.mass_of(&AtomKey::AtomicNumber(1))?;
/// let by_symbol = lookup.mass_of(&AtomKey::from("h"))?;
/// assert_eq!(by_number, by_symbol);
/// assert!((by_number - 1837.36).abs() < 0.01);
/// assert_eq!(lookup.symbol_of(8)?, "O");
/// # Ok::<(), qcinfo::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AtomLookup<'a> {
    service: &'a MassTableService,
    unit: MassUnit,
}

impl<'a> AtomLookup<'a> {
    pub fn new(service: &'a MassTableService) -> Self {
        Self {
            service,
            unit: MassUnit::default(),
        }
    }

    pub fn with_unit(mut self, unit: MassUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn unit(&self) -> MassUnit {
        self.unit
    }

    pub fn service(&self) -> &'a MassTableService {
        self.service
    }

    /// Mass of an element in the lookup's configured unit
    /// (atomic units of mass unless changed).
    pub fn mass_of(&self, atom: &AtomKey) -> Result<f64> {
        self.mass_in(atom, self.unit)
    }

    /// Mass of an element in an explicit unit.
    ///
    /// Symbols are matched case-insensitively (`"cl"`, `"CL"` and `"Cl"`
    /// are the same element).
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] for an unknown symbol or an atomic number
    /// outside the table.
    pub fn mass_in(&self, atom: &AtomKey, unit: MassUnit) -> Result<f64> {
        let table = self.service.ensure_loaded()?;
        let weight = match atom {
            AtomKey::AtomicNumber(n) => table.get(*n).map(|e| e.standard_weight),
            AtomKey::Symbol(s) => table.weight_by_symbol(&title_case(s)),
        };
        weight
            .map(|w| w * unit.factor())
            .ok_or_else(|| Error::KeyNotFound(atom.to_string()))
    }

    /// Tabulated standard atomic weight in dalton.
    pub fn standard_weight(&self, atom: &AtomKey) -> Result<f64> {
        self.mass_in(atom, MassUnit::Dalton)
    }

    /// Symbol of the element with the given atomic number.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `atomic_number` is 0 or past the
    /// end of the table.
    pub fn symbol_of(&self, atomic_number: usize) -> Result<String> {
        let table = self.service.ensure_loaded()?;
        table
            .get(atomic_number)
            .map(|e| e.symbol.clone())
            .ok_or_else(|| Error::out_of_range("mass table", atomic_number, table.len()))
    }

    /// Atomic number of the element with the given symbol (case-insensitive).
    pub fn atomic_number_of(&self, symbol: &str) -> Result<usize> {
        let table = self.service.ensure_loaded()?;
        table
            .position_of(&title_case(symbol))
            .ok_or_else(|| Error::KeyNotFound(symbol.to_string()))
    }
}

impl AtomLookup<'static> {
    /// Lookup on the process-wide service, in atomic units of mass.
    pub fn global() -> Self {
        Self::new(MassTableService::global())
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::periodic::config::{LookupConfig, TableSource, U_TO_ME};

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn hydrogen_mass_in_atomic_units() {
        let lookup = AtomLookup::global();
        let m = lookup.mass_of(&AtomKey::AtomicNumber(1)).unwrap();
        assert!(approx_eq(m, 1.00794 * U_TO_ME, 1e-9));
        assert!(approx_eq(m, 1837.36, 0.01));
        assert_eq!(lookup.mass_of(&AtomKey::from("H")).unwrap(), m);
    }

    #[test]
    fn symbol_round_trip_for_every_element() {
        let service = MassTableService::default();
        let lookup = AtomLookup::new(&service);
        for n in 1..=118usize {
            let symbol = lookup.symbol_of(n).unwrap();
            let by_symbol = lookup.mass_of(&AtomKey::Symbol(symbol.clone())).unwrap();
            let by_number = lookup.mass_of(&AtomKey::AtomicNumber(n)).unwrap();
            assert_eq!(by_symbol, by_number, "mismatch for {}", symbol);
            assert_eq!(lookup.atomic_number_of(&symbol).unwrap(), n);
        }
    }

    #[test]
    fn symbols_are_case_insensitive() {
        let lookup = AtomLookup::global();
        let he = lookup.mass_of(&AtomKey::from("He")).unwrap();
        assert_eq!(lookup.mass_of(&AtomKey::from("he")).unwrap(), he);
        assert_eq!(lookup.mass_of(&AtomKey::from("HE")).unwrap(), he);
        assert_eq!(lookup.mass_of(&AtomKey::from(" he ")).unwrap(), he);
    }

    #[test]
    fn dalton_unit_returns_tabulated_weight() {
        let lookup = AtomLookup::global().with_unit(MassUnit::Dalton);
        assert!(approx_eq(
            lookup.mass_of(&AtomKey::from("C")).unwrap(),
            12.0107,
            1e-12
        ));
        assert!(approx_eq(
            AtomLookup::global()
                .standard_weight(&AtomKey::AtomicNumber(8))
                .unwrap(),
            15.9994,
            1e-12
        ));
    }

    #[test]
    fn unknown_keys_are_reported() {
        let lookup = AtomLookup::global();
        assert!(matches!(
            lookup.mass_of(&AtomKey::from("Xx")),
            Err(Error::KeyNotFound(k)) if k == "Xx"
        ));
        assert!(matches!(
            lookup.mass_of(&AtomKey::AtomicNumber(0)),
            Err(Error::KeyNotFound(_))
        ));
        assert!(matches!(
            lookup.mass_of(&AtomKey::AtomicNumber(119)),
            Err(Error::KeyNotFound(_))
        ));
        assert!(matches!(
            lookup.symbol_of(119),
            Err(Error::IndexOutOfRange { index: 119, len: 118, .. })
        ));
        assert!(matches!(
            lookup.symbol_of(0),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn atom_key_from_str_prefers_numbers() {
        assert_eq!("6".parse::<AtomKey>().unwrap(), AtomKey::AtomicNumber(6));
        assert_eq!(" 12 ".parse::<AtomKey>().unwrap(), AtomKey::AtomicNumber(12));
        assert_eq!(
            "Na".parse::<AtomKey>().unwrap(),
            AtomKey::Symbol("Na".to_string())
        );
    }

    #[test]
    fn custom_text_source_is_injected() {
        let text = "Atomic Number = 1\nAtomic Symbol = H\nStandard Atomic Weight = 2.0\n";
        let (service, unit) = MassTableService::with_config(LookupConfig {
            source: TableSource::Text(text.to_string()),
            unit: MassUnit::Dalton,
        });
        let lookup = AtomLookup::new(&service).with_unit(unit);
        assert_eq!(lookup.mass_of(&AtomKey::from("h")).unwrap(), 2.0);
        assert!(lookup.mass_of(&AtomKey::from("He")).is_err());
    }

    #[test]
    fn title_case_handles_mixed_input() {
        assert_eq!(title_case("cL"), "Cl");
        assert_eq!(title_case("o"), "O");
        assert_eq!(title_case(""), "");
    }
}
