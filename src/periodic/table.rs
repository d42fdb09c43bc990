use super::config::TableSource;
use crate::error::{Error, Result};
use log::{debug, trace};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const EMBEDDED_TABLE: &str = include_str!("../../resources/atomic_weights.txt");

const KEY_ATOMIC_NUMBER: &str = "Atomic Number";
const KEY_ATOMIC_SYMBOL: &str = "Atomic Symbol";
const KEY_STANDARD_WEIGHT: &str = "Standard Atomic Weight";

/// Standard atomic weight entry for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct MassEntry {
    pub symbol: String,
    pub standard_weight: f64,
}

impl MassEntry {
    fn empty() -> Self {
        Self {
            symbol: String::new(),
            standard_weight: 0.0,
        }
    }
}

/// Standard atomic weights indexed by atomic number.
///
/// Entry `i` belongs to atomic number `i + 1`. Only the first isotope block
/// of every element in the source contributes; later blocks for the same
/// atomic number (`D`, `T`, heavier isotopes) are skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MassTable {
    entries: Vec<MassEntry>,
    by_symbol: HashMap<String, f64>,
}

impl MassTable {
    /// Parses the table compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_TABLE)
    }

    /// Reads and parses a table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ResourceNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io { source: e },
        })?;
        Self::parse(&text)
    }

    /// Loads the table from the given source.
    pub fn load(source: &TableSource) -> Result<Self> {
        let table = match source {
            TableSource::Embedded => Self::embedded()?,
            TableSource::Path(path) => Self::from_path(path)?,
            TableSource::Text(text) => Self::parse(text)?,
        };
        debug!(
            "loaded {} standard atomic weights from {:?}",
            table.len(),
            source_name(source)
        );
        Ok(table)
    }

    /// Parses NIST "Linearized ASCII Output" text.
    ///
    /// Lines have the form `key = value`; only `Atomic Number`,
    /// `Atomic Symbol` and `Standard Atomic Weight` are read. Symbol and
    /// weight lines count only inside the first block of each atomic number.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries: Vec<MassEntry> = Vec::new();
        let mut current: Option<usize> = None;
        let mut is_new_block = true;

        for (i, line) in text.lines().enumerate() {
            let ln = i + 1;
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };

            match key.trim() {
                KEY_ATOMIC_NUMBER => {
                    let index = parse_atomic_number(value, ln)? - 1;
                    is_new_block = current != Some(index);
                    if is_new_block {
                        if index != entries.len() {
                            return Err(Error::parse(
                                ln,
                                format!(
                                    "atomic number {} out of sequence (expected {})",
                                    index + 1,
                                    entries.len() + 1
                                ),
                            ));
                        }
                        entries.push(MassEntry::empty());
                    } else {
                        trace!("skipping isotope block of Z={} at line {}", index + 1, ln);
                    }
                    current = Some(index);
                }
                KEY_ATOMIC_SYMBOL if is_new_block => {
                    if let Some(entry) = current.and_then(|idx| entries.get_mut(idx)) {
                        entry.symbol = last_token(value, ln)?.to_string();
                    }
                }
                KEY_STANDARD_WEIGHT if is_new_block => {
                    if let Some(entry) = current.and_then(|idx| entries.get_mut(idx)) {
                        entry.standard_weight = parse_weight(value, ln)?;
                    }
                }
                _ => {}
            }
        }

        let by_symbol = entries
            .iter()
            .map(|e| (e.symbol.clone(), e.standard_weight))
            .collect();

        Ok(Self { entries, by_symbol })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a 1-based atomic number.
    pub fn get(&self, atomic_number: usize) -> Option<&MassEntry> {
        atomic_number
            .checked_sub(1)
            .and_then(|idx| self.entries.get(idx))
    }

    /// Standard weight for an exact (already title-cased) symbol.
    pub fn weight_by_symbol(&self, symbol: &str) -> Option<f64> {
        self.by_symbol.get(symbol).copied()
    }

    /// 1-based atomic number for an exact symbol.
    pub fn position_of(&self, symbol: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.symbol == symbol)
            .map(|idx| idx + 1)
    }

    pub fn entries(&self) -> &[MassEntry] {
        &self.entries
    }
}

fn source_name(source: &TableSource) -> String {
    match source {
        TableSource::Embedded => "embedded table".to_string(),
        TableSource::Path(path) => path.display().to_string(),
        TableSource::Text(_) => "in-memory text".to_string(),
    }
}

fn last_token(value: &str, ln: usize) -> Result<&str> {
    value
        .split_whitespace()
        .next_back()
        .ok_or_else(|| Error::parse(ln, "missing value"))
}

fn parse_atomic_number(value: &str, ln: usize) -> Result<usize> {
    let token = last_token(value, ln)?;
    match token.parse::<usize>() {
        Ok(0) => Err(Error::parse(ln, "atomic number must be at least 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(Error::parse(
            ln,
            format!("invalid atomic number '{}'", token),
        )),
    }
}

fn parse_weight(value: &str, ln: usize) -> Result<f64> {
    let token = last_token(value, ln)?;
    let stripped: String = token
        .chars()
        .filter(|c| !matches!(c, '(' | ')' | '[' | ']'))
        .collect();
    match stripped.parse::<f64>() {
        Ok(w) if w.is_finite() => Ok(w),
        _ => Err(Error::parse(
            ln,
            format!("invalid standard atomic weight '{}'", token),
        )),
    }
}
