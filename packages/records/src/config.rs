//! # Application configuration — `rollcall.toml`
//!
//! Optional TOML file read by the server at startup (path from the
//! `ROLLCALL_CONFIG` environment variable, default [`RollcallConfig::filename`]).
//! A missing or empty file is equivalent to the defaults.
//!
//! ```toml
//! [collection]
//! name = "students"      # document collection holding student records
//!
//! [display]
//! placeholder = "N/A"    # shown in the detail view for absent fields
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RollcallConfig {
    #[serde(default)]
    pub collection: CollectionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    #[serde(default = "default_collection_name")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Text shown for a field the record does not have.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_collection_name() -> String {
    "students".to_string()
}

fn default_placeholder() -> String {
    "N/A".to_string()
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            name: default_collection_name(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

impl RollcallConfig {
    /// Builder method to set the detail-view placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.display.placeholder = placeholder.into();
        self
    }

    pub fn filename() -> &'static str {
        "rollcall.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
