//! Configuration file schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of the `stayscout.toml` configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub data: DataConfig,
    pub compare: CompareConfig,
    pub search: SearchConfig,
}

/// `[data]` section: where the property collection lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON file holding the property array.
    pub properties_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            properties_path: PathBuf::from("properties.json"),
        }
    }
}

/// `[compare]` section: where the comparison set is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// State file for the persisted comparison set.
    pub state_path: PathBuf,
}

impl Default for CompareConfig {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            state_path: base.join("stayscout").join("compare.json"),
        }
    }
}

/// `[search]` section: presentation-level search defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper price bound assumed when a search gives only a lower one.
    pub default_max_price: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_price: 50_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.data.properties_path, PathBuf::from("properties.json"));
        assert_eq!(config.search.default_max_price, 50_000.0);
        assert!(config.compare.state_path.ends_with("compare.json"));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [data]
            properties_path = "seed/listings.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.data.properties_path, PathBuf::from("seed/listings.json"));
        assert_eq!(config.search.default_max_price, 50_000.0);
    }
}
