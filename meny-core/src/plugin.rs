//! Registry for all supplier plugins and their ports.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{SupplierId, SupplierMeta};
use crate::ports::{PortError, SchoolPort};

/// Collection of ports implementing a single supplier.
pub struct SupplierPlugin {
    /// Static metadata describing the supplier.
    pub meta: SupplierMeta,
    /// Implementation for listing schools.
    pub school_port: Arc<dyn SchoolPort>,
}

/// Registry that resolves plugins by supplier identifier.
pub struct PluginRegistry {
    plugins: HashMap<SupplierId, SupplierPlugin>,
}

impl PluginRegistry {
    /// Build a registry from the provided plugin list.
    #[must_use]
    pub fn new(plugins: Vec<SupplierPlugin>) -> Self {
        let plugins_map = plugins
            .into_iter()
            .map(|plugin| (plugin.meta.id.clone(), plugin))
            .collect();
        Self {
            plugins: plugins_map,
        }
    }

    /// Return metadata for all registered suppliers, ordered by id.
    #[must_use]
    pub fn suppliers(&self) -> Vec<SupplierMeta> {
        let mut suppliers: Vec<SupplierMeta> = self.suppliers_iter().cloned().collect();
        suppliers.sort_by(|left, right| left.id.cmp(&right.id));
        suppliers
    }

    /// Iterator over supplier metadata, in no particular order.
    pub fn suppliers_iter(&self) -> impl Iterator<Item = &SupplierMeta> {
        self.plugins.values().map(|plugin| &plugin.meta)
    }

    /// Look up a plugin for the given supplier.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::UnsupportedSupplier`] when no plugin is registered.
    pub fn plugin(&self, supplier: &SupplierId) -> Result<&SupplierPlugin, PortError> {
        self.plugins
            .get(supplier)
            .ok_or(PortError::UnsupportedSupplier)
    }
}
