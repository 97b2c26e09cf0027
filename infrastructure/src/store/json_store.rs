//! Property store backed by a JSON data file.
//!
//! The file holds an array of properties in the store's wire format.
//! It is read and validated once at construction; lookups are served
//! from memory.

use async_trait::async_trait;
use std::path::Path;
use stayscout_application::ports::property_store::{PropertyStore, PropertyStoreError};
use stayscout_domain::{Property, PropertyId};
use thiserror::Error;
use tracing::info;

/// Errors loading the property data file.
#[derive(Error, Debug)]
pub enum PropertyDataError {
    #[error("Could not read property data file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid property data in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// In-memory [`PropertyStore`] loaded from a JSON file.
#[derive(Debug)]
pub struct JsonPropertyStore {
    properties: Vec<Property>,
}

impl JsonPropertyStore {
    /// Load and validate the data file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PropertyDataError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| PropertyDataError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let properties: Vec<Property> =
            serde_json::from_str(&raw).map_err(|source| PropertyDataError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        info!(
            "Loaded {} properties from {}",
            properties.len(),
            path.display()
        );
        Ok(Self { properties })
    }

    /// Wrap an already-built collection (seed data, tests).
    pub fn from_properties(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[async_trait]
impl PropertyStore for JsonPropertyStore {
    async fn list_properties(&self) -> Result<Vec<Property>, PropertyStoreError> {
        Ok(self.properties.clone())
    }

    async fn get_property(&self, id: &PropertyId) -> Result<Option<Property>, PropertyStoreError> {
        Ok(self.properties.iter().find(|p| p.id == *id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DATA: &str = r#"[
        {
            "id": "p1",
            "name": "Sunrise PG",
            "type": "pg",
            "price": 4500,
            "location": {
                "address": "8 Residency Rd",
                "city": "Bengaluru",
                "state": "KA",
                "zipCode": "560001"
            },
            "roomDetails": {
                "roomType": "private",
                "bedrooms": 1,
                "bathrooms": 1,
                "genderPolicy": "co-ed",
                "maxOccupancy": 2,
                "roomSize": 150
            },
            "amenities": ["wifi", "gym"]
        }
    ]"#;

    fn data_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_loads_and_serves_properties() {
        let file = data_file(DATA);
        let store = JsonPropertyStore::from_file(file.path()).unwrap();
        assert_eq!(store.len(), 1);

        let all = store.list_properties().await.unwrap();
        assert_eq!(all[0].name, "Sunrise PG");

        let one = store.get_property(&"p1".into()).await.unwrap();
        assert!(one.is_some());

        let missing = store.get_property(&"nope".into()).await.unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = JsonPropertyStore::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, PropertyDataError::Io { .. }));
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let file = data_file("{ this is not an array");
        let err = JsonPropertyStore::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PropertyDataError::Parse { .. }));
    }
}
