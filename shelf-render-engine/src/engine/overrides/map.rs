use std::collections::BTreeMap;

use bevy::prelude::*;

use super::storage::StorageError;

/// User-set positions keyed by item id.
///
/// Persisted as a JSON object of `id -> [x, y, z]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideMap {
    positions: BTreeMap<String, Vec3>,
}

impl OverrideMap {
    pub fn get(&self, id: &str) -> Option<Vec3> {
        self.positions.get(id).copied()
    }

    /// Returns the previous position, if any.
    pub fn insert(&mut self, id: impl Into<String>, position: Vec3) -> Option<Vec3> {
        self.positions.insert(id.into(), position)
    }

    pub fn remove(&mut self, id: &str) -> Option<Vec3> {
        self.positions.remove(id)
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Vec3)> {
        self.positions.iter().map(|(id, position)| (id.as_str(), *position))
    }

    pub fn to_json(&self, namespace: &str) -> Result<String, StorageError> {
        let wire: BTreeMap<&str, [f32; 3]> = self
            .positions
            .iter()
            .map(|(id, position)| (id.as_str(), position.to_array()))
            .collect();
        serde_json::to_string(&wire).map_err(|source| StorageError::Encode {
            namespace: namespace.to_string(),
            source,
        })
    }

    /// Parse a persisted blob. Any structural problem rejects the whole blob.
    pub fn from_json(namespace: &str, blob: &str) -> Result<Self, StorageError> {
        let wire: BTreeMap<String, [f32; 3]> =
            serde_json::from_str(blob).map_err(|source| StorageError::Malformed {
                namespace: namespace.to_string(),
                source,
            })?;
        Ok(Self {
            positions: wire
                .into_iter()
                .map(|(id, xyz)| (id, Vec3::from_array(xyz)))
                .collect(),
        })
    }
}

impl FromIterator<(String, Vec3)> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec3)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_arrays_of_three() {
        let mut map = OverrideMap::default();
        map.insert("b1", Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(map.to_json("book-positions").unwrap(), r#"{"b1":[1.0,2.0,3.0]}"#);
    }

    #[test]
    fn reads_browser_written_blob() {
        let blob = r#"{"3f1c-aa":[-1.25,0.5,0],"decor-left-1":[2,3.08,0.75]}"#;
        let map = OverrideMap::from_json("book-positions", blob).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("3f1c-aa"), Some(Vec3::new(-1.25, 0.5, 0.0)));
        assert_eq!(map.get("decor-left-1").map(|p| p.x), Some(2.0));
    }

    #[test]
    fn round_trips_up_to_a_hundred_entries() {
        for size in [0usize, 1, 7, 100] {
            let map: OverrideMap = (0..size)
                .map(|i| {
                    let f = i as f32;
                    (format!("id-{i}"), Vec3::new(f * 0.1 - 3.3, f * 0.37 + 0.5, -f / 7.0))
                })
                .collect();
            let blob = map.to_json("book-positions").unwrap();
            let back = OverrideMap::from_json("book-positions", &blob).unwrap();
            assert_eq!(back, map, "size {size}");
        }
    }

    #[test]
    fn malformed_blobs_are_rejected() {
        for blob in [
            "",
            "not json",
            "[1, 2, 3]",
            r#"{"b1": [1, 2]}"#,
            r#"{"b1": [1, 2, 3, 4]}"#,
            r#"{"b1": "1,2,3"}"#,
            r#"{"b1": [1, null, 3]}"#,
        ] {
            assert!(
                matches!(
                    OverrideMap::from_json("book-positions", blob),
                    Err(StorageError::Malformed { .. })
                ),
                "{blob:?}"
            );
        }
    }
}
