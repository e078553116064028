//! High-level service facade combining all suppliers.

use std::sync::Arc;

use crate::model::{School, SupplierId};
use crate::plugin::PluginRegistry;
use crate::ports::PortError;

/// Public entry point for listing suppliers and their schools.
pub struct MenyService {
    registry: Arc<PluginRegistry>,
}

impl MenyService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self { registry }
    }

    /// List all available suppliers and their display names.
    #[must_use]
    pub fn suppliers(&self) -> Vec<(SupplierId, String)> {
        self.registry
            .suppliers()
            .into_iter()
            .map(|meta| (meta.id, meta.name))
            .collect()
    }

    /// Crawl the full school catalog of a supplier.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the supplier is unsupported or any provider
    /// call fails.
    pub async fn list_schools(&self, supplier: &SupplierId) -> Result<Vec<School>, PortError> {
        let plugin = self.registry.plugin(supplier)?;
        plugin.school_port.list_schools().await
    }
}
