use crate::error::Result;
use crate::store::{self, Record, RecordStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Group under which [`CiInfo::save`] stores a CI expansion by default.
pub const DEFAULT_CI_GROUP: &str = "/ci:0";

/// Configuration interaction expansion of one state.
///
/// Coefficients and occupation patterns are kept verbatim; their lengths
/// are not checked against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CiInfo {
    pub coeffs: Vec<f64>,
    /// Occupation pattern of each determinant or configuration.
    pub occ: Vec<Vec<u8>>,
    /// Free-form metadata (state label, energy, ...). Stored as
    /// `[key, value]` pairs.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "info_pairs"
    )]
    pub info: Option<BTreeMap<String, String>>,
    pub method: String,
}

impl Default for CiInfo {
    fn default() -> Self {
        Self::new("ci")
    }
}

impl CiInfo {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            coeffs: Vec::new(),
            occ: Vec::new(),
            info: None,
            method: method.into(),
        }
    }

    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn to_record(&self) -> Result<Record> {
        store::to_record(self)
    }

    pub fn from_record(record: Record) -> Result<Self> {
        store::from_record(record)
    }

    pub fn save<S: RecordStore>(&self, store: &mut S, group: &str) -> Result<()> {
        store.append(group, self.to_record()?)
    }

    pub fn load<S: RecordStore>(store: &S, group: &str) -> Result<Self> {
        Self::from_record(store.retrieve(group)?)
    }
}

mod info_pairs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(info: &Option<BTreeMap<String, String>>, ser: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match info {
            Some(map) => ser.collect_seq(map.iter().map(|(k, v)| [k, v])),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(de: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs = Option::<Vec<(String, String)>>::deserialize(de)?;
        Ok(pairs.map(|p| p.into_iter().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::store::MemoryStore;

    fn sample() -> CiInfo {
        let mut ci = CiInfo::new("cis");
        ci.coeffs = vec![0.95, -0.21, 0.05];
        ci.occ = vec![vec![2, 2, 0], vec![2, 1, 1], vec![1, 2, 1]];
        ci.info = Some(BTreeMap::from([
            ("state".to_string(), "1".to_string()),
            ("energy".to_string(), "-76.0123".to_string()),
        ]));
        ci
    }

    #[test]
    fn default_method_is_ci() {
        let ci = CiInfo::default();
        assert_eq!(ci.method, "ci");
        assert!(ci.coeffs.is_empty());
        assert!(ci.occ.is_empty());
        assert!(ci.info.is_none());
    }

    #[test]
    fn copy_is_deep() {
        let original = sample();
        let mut copy = original.copy();
        copy.coeffs[0] = 0.0;
        copy.info.as_mut().unwrap().insert("extra".into(), "x".into());
        assert_eq!(original.coeffs[0], 0.95);
        assert_eq!(original.info.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn info_is_flattened_into_pairs() {
        let record = sample().to_record().unwrap();
        let info = record["info"].as_array().unwrap();
        assert_eq!(info.len(), 2);
        let first = info[0].as_array().unwrap();
        assert_eq!(first[0].as_str(), Some("energy"));
        assert_eq!(first[1].as_str(), Some("-76.0123"));
        assert_eq!(record["method"].as_str(), Some("cis"));
    }

    #[test]
    fn save_and_load_round_trip() {
        let original = sample();
        let mut store = MemoryStore::new();
        original.save(&mut store, DEFAULT_CI_GROUP).unwrap();

        let loaded = CiInfo::load(&store, "ci:0").unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn round_trip_without_info() {
        let mut original = sample();
        original.info = None;
        let mut store = MemoryStore::new();
        original.save(&mut store, "/ci:1").unwrap();

        let record = store.retrieve("/ci:1").unwrap();
        assert!(!record.contains_key("info"));
        assert_eq!(CiInfo::load(&store, "/ci:1").unwrap(), original);
    }

    #[test]
    fn loading_missing_group_fails() {
        let store = MemoryStore::new();
        assert!(matches!(
            CiInfo::load(&store, DEFAULT_CI_GROUP),
            Err(Error::MissingGroup(_))
        ));
    }
}
