//! Storage configuration.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Settings for an [`InMemoryStorage`](crate::InMemoryStorage).
///
/// There is no process-wide fallback: a storage built without a base URL
/// simply cannot produce URLs.
///
/// ```rust
/// use inmemfs_storage::StorageConfig;
///
/// let config = StorageConfig::from_json(r#"{"base_url": "https://cdn.example.com/media/"}"#).unwrap();
/// assert_eq!(config.base_url.as_deref(), Some("https://cdn.example.com/media/"));
///
/// let config = StorageConfig::from_json("{}").unwrap();
/// assert_eq!(config, StorageConfig::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// URL that stored names are resolved against, such as
    /// `https://cdn.example.com/media/` or `/media/`.
    pub base_url: Option<String>,
}

impl StorageConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_base_url() {
        let config = StorageConfig::from_json(r#"{"base_url": "http://www.example.com"}"#).unwrap();
        assert_eq!(config, StorageConfig::with_base_url("http://www.example.com"));
    }

    #[test]
    fn null_base_url() {
        let config = StorageConfig::from_json(r#"{"base_url": null}"#).unwrap();
        assert!(config.base_url.is_none());
    }

    #[test]
    fn malformed_json_fails() {
        assert!(matches!(
            StorageConfig::from_json("{"),
            Err(StorageError::Config(_))
        ));
    }

    #[test]
    fn serializes() {
        let json = serde_json::to_value(StorageConfig::with_base_url("http://x.test/")).unwrap();
        assert_eq!(json, serde_json::json!({ "base_url": "http://x.test/" }));
    }
}
