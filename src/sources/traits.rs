use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply the property collection.
/// The filter and paginator only ever see the `Vec<Property>` it returns.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Load the full property collection
    async fn load(&self) -> Result<Vec<Property>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
