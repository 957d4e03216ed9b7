use std::{collections::HashMap, fmt};

use serde::{
    de::{Error, MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::Value;

use crate::endpoint::EndpointStatus;

/// Endpoint address to scan result, in the order the document lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(String, EndpointStatus)>,
    positions: HashMap<String, usize>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of an existing endpoint in place, otherwise appends.
    pub fn insert(&mut self, endpoint: String, status: EndpointStatus) {
        match self.positions.get(&endpoint) {
            Some(&position) => self.entries[position].1 = status,
            None => {
                self.positions.insert(endpoint.clone(), self.entries.len());
                self.entries.push((endpoint, status));
            }
        }
    }

    pub fn get(&self, endpoint: &str) -> Option<&EndpointStatus> {
        self.positions.get(endpoint).map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EndpointStatus)> {
        self.entries.iter().map(|(key, status)| (key.as_str(), status))
    }

    pub fn endpoints(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, EndpointStatus)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, EndpointStatus)>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for (endpoint, status) in iter {
            snapshot.insert(endpoint, status);
        }
        snapshot
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (endpoint, status) in &self.entries {
            map.serialize_entry(endpoint, status)?;
        }
        map.end()
    }
}

/// A record that is not an object (e.g. `null`) becomes an empty status
/// instead of failing the whole document.
struct LenientStatus(EndpointStatus);

impl<'de> Deserialize<'de> for LenientStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            value @ Value::Object(_) => serde_json::from_value(value).map(LenientStatus).map_err(D::Error::custom),
            _ => Ok(LenientStatus(EndpointStatus::default())),
        }
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = Snapshot;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map of endpoint address to endpoint status")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let capacity = access.size_hint().unwrap_or(0);
        let mut snapshot = Snapshot {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        };
        while let Some((endpoint, LenientStatus(status))) = access.next_entry::<String, LenientStatus>()? {
            snapshot.insert(endpoint, status);
        }
        Ok(snapshot)
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_document_order() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "zeta.example.com:443": {"scan_time": "2024-01-01T00:00"},
                "alpha.example.com:443": {"scan_time": "2024-01-01T00:00"},
                "mid.example.com:26657": {"scan_time": "2024-01-01T00:00"}
            }"#,
        )
        .unwrap();
        let endpoints: Vec<_> = snapshot.endpoints().collect();
        assert_eq!(
            endpoints,
            vec!["zeta.example.com:443", "alpha.example.com:443", "mid.example.com:26657"]
        );
    }

    #[test]
    fn duplicate_key_keeps_first_position_and_last_value() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "a:443": {"moniker": "first"},
                "b:443": {"moniker": "b"},
                "a:443": {"moniker": "second"}
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.endpoints().collect::<Vec<_>>(), vec!["a:443", "b:443"]);
        assert_eq!(snapshot.get("a:443").unwrap().moniker.as_deref(), Some("second"));
    }

    #[test]
    fn non_object_record_keeps_its_row() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "good:443": {"moniker": "good", "scan_time": "2024-01-01T00:00"},
                "null:443": null,
                "text:443": "offline",
                "list:443": [1, 2]
            }"#,
        )
        .unwrap();
        assert_eq!(
            snapshot.endpoints().collect::<Vec<_>>(),
            vec!["good:443", "null:443", "text:443", "list:443"]
        );
        assert_eq!(snapshot.get("good:443").unwrap().moniker.as_deref(), Some("good"));
        assert_eq!(snapshot.get("null:443"), Some(&EndpointStatus::default()));
        assert_eq!(snapshot.get("text:443"), Some(&EndpointStatus::default()));
    }

    #[test]
    fn large_document() {
        let count = 50_000;
        let body = (0..count)
            .map(|i| format!(r#""node{i}.example.com:443": {{"latest_block_height": "{i}", "scan_time": "2024-01-01T00:00"}}"#))
            .collect::<Vec<_>>()
            .join(",");
        let started = std::time::Instant::now();
        let snapshot: Snapshot = serde_json::from_str(&format!("{{{body}}}")).unwrap();
        let elapsed = started.elapsed();

        assert_eq!(snapshot.len(), count);
        assert_eq!(snapshot.endpoints().next(), Some("node0.example.com:443"));
        assert_eq!(snapshot.endpoints().last(), Some("node49999.example.com:443"));
        assert_eq!(
            snapshot.get("node31337.example.com:443").unwrap().latest_block_height.as_deref(),
            Some("31337")
        );
        assert!(elapsed < std::time::Duration::from_secs(5), "took {elapsed:?}");
    }

    #[test]
    fn get_missing_endpoint() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"a:443": {}}"#).unwrap();
        assert!(snapshot.get("b:443").is_none());
    }

    #[test]
    fn empty_document() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn rejects_non_object() {
        assert!(serde_json::from_str::<Snapshot>("[]").is_err());
        assert!(serde_json::from_str::<Snapshot>("\"nope\"").is_err());
    }

    #[test]
    fn serializes_in_order() {
        let snapshot: Snapshot = vec![
            ("b:443".to_string(), EndpointStatus::default()),
            ("a:443".to_string(), EndpointStatus::default()),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.find("b:443").unwrap() < json.find("a:443").unwrap());
    }
}
