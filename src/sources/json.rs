use crate::models::{validate_collection, Property};
use crate::sources::traits::PropertySource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads a previously saved property collection from a JSON array
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PropertySource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Property>> {
        info!("Loading properties from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        debug!("Read {} bytes of JSON", raw.len());

        let properties: Vec<Property> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse properties in {}", self.path.display()))?;
        validate_collection(&properties)
            .with_context(|| format!("Invalid property data in {}", self.path.display()))?;

        info!("Loaded {} properties", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}

/// Write properties as pretty-printed JSON
pub async fn save_properties(path: impl AsRef<Path>, properties: &[Property]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(properties)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("💾 Saved {} properties to {}", properties.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::property;
    use tempfile::TempDir;

    #[tokio::test]
    async fn saved_collection_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("listings.json");
        let props = vec![property(1), property(2)];

        save_properties(&path, &props).await.unwrap();
        let loaded = JsonFileSource::new(&path).load().await.unwrap();

        assert_eq!(loaded, props);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"));
        let err = source.load().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dupes.json");
        save_properties(&path, &[property(4), property(4)])
            .await
            .unwrap();

        let err = JsonFileSource::new(&path).load().await.unwrap_err();
        assert!(err.to_string().contains("Invalid property data"));
    }
}
