//! Provider implementation for Skolmaten using its hierarchical listing API.

/// Province → district → station crawl and the school name filter.
pub mod crawler;
/// Transport trait and its `reqwest` implementation.
pub mod transport;

use std::sync::Arc;

use async_trait::async_trait;

use meny_core::{
    model::{School, SupplierMeta, Suppliers},
    plugin::SupplierPlugin,
    ports::{PortError, SchoolPort},
};

pub use crawler::{collect, is_valid_name};
pub use transport::{HttpTransport, SkolmatenConfig, Transport};

/// School catalog implementation for Skolmaten.
pub struct SkolmatenSchoolPort {
    transport: Arc<dyn Transport>,
    meta: SupplierMeta,
}

impl SkolmatenSchoolPort {
    /// Create a new school port issuing requests through `transport`.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            meta: Suppliers::Skolmaten.meta(),
        }
    }
}

#[async_trait]
impl SchoolPort for SkolmatenSchoolPort {
    fn supplier(&self) -> &SupplierMeta {
        &self.meta
    }

    async fn list_schools(&self) -> Result<Vec<School>, PortError> {
        crawler::collect(self.transport.as_ref()).await
    }
}

/// Build the plugin bundle for the Skolmaten provider.
#[must_use]
pub fn plugin(transport: Arc<dyn Transport>) -> SupplierPlugin {
    SupplierPlugin {
        meta: Suppliers::Skolmaten.meta(),
        school_port: Arc::new(SkolmatenSchoolPort::new(transport)),
    }
}

/// Build the plugin bundle with an HTTP transport created from `config`.
///
/// # Errors
///
/// Returns [`PortError::Internal`] if the HTTP client cannot be built.
pub fn plugin_from_config(config: &SkolmatenConfig) -> Result<SupplierPlugin, PortError> {
    let transport = HttpTransport::new(config)?;
    Ok(plugin(Arc::new(transport)))
}
