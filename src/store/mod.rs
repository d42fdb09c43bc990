//! Group-structured persistence of records.
//!
//! A [`Record`] is a string-keyed table of values. Record types convert to
//! and from it through `serde` ([`to_record`], [`from_record`]); a
//! [`RecordStore`] files records under slash-separated group paths such as
//! `/ci:0`. [`MemoryStore`] keeps everything in memory; other backends only
//! need to implement the two trait methods.

use crate::error::{Error, Result};
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

/// Field name → value mapping exchanged with a [`RecordStore`].
pub type Record = toml::Table;

/// Backend able to append records under a group path and read them back.
pub trait RecordStore {
    /// Merges `record` into the group, replacing fields that already exist.
    fn append(&mut self, group: &str, record: Record) -> Result<()>;

    /// Returns every field stored under the group.
    ///
    /// # Errors
    ///
    /// [`Error::MissingGroup`] if nothing was appended under `group`.
    fn retrieve(&self, group: &str) -> Result<Record>;
}

/// In-memory [`RecordStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    groups: BTreeMap<String, Record>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, group: &str) -> bool {
        self.groups.contains_key(&normalize_group(group))
    }

    /// Normalized group paths in sorted order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn remove(&mut self, group: &str) -> Option<Record> {
        self.groups.remove(&normalize_group(group))
    }
}

impl RecordStore for MemoryStore {
    fn append(&mut self, group: &str, record: Record) -> Result<()> {
        let group = normalize_group(group);
        debug!("appending {} field(s) to group '{}'", record.len(), group);
        self.groups.entry(group).or_default().extend(record);
        Ok(())
    }

    fn retrieve(&self, group: &str) -> Result<Record> {
        let group = normalize_group(group);
        self.groups
            .get(&group)
            .cloned()
            .ok_or(Error::MissingGroup(group))
    }
}

/// Canonical form of a group path: one leading `/`, no trailing `/`,
/// no empty segments.
pub fn normalize_group(group: &str) -> String {
    let segments: Vec<&str> = group.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Serializes a value into a [`Record`].
pub fn to_record<T: Serialize>(value: &T) -> Result<Record> {
    match toml::Value::try_from(value)? {
        toml::Value::Table(table) => Ok(table),
        other => Err(Error::Serialization(format!(
            "expected a table of fields, got a {}",
            other.type_str()
        ))),
    }
}

/// Rebuilds a value from a [`Record`].
pub fn from_record<T: DeserializeOwned>(record: Record) -> Result<T> {
    Ok(toml::Value::Table(record).try_into()?)
}
