//! OFC driver abstractions

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{NetworkRef, PortRef, TenantRef};

/// Driver for the OFC resource model.
///
/// Create operations return the full controller path of the new resource;
/// that path is the handle for the corresponding update/delete calls.
/// Update and delete propagate the transport result unchanged.
#[async_trait]
pub trait OfcDriver: Send + Sync {
    async fn create_tenant(&self, tenant: &TenantRef) -> Result<String>;
    async fn update_tenant(&self, tenant_path: &str, description: &str) -> Result<()>;
    async fn delete_tenant(&self, tenant_path: &str) -> Result<()>;

    async fn create_network(&self, network: &NetworkRef) -> Result<String>;
    async fn update_network(&self, network_path: &str, description: &str) -> Result<()>;
    async fn delete_network(&self, network_path: &str) -> Result<()>;

    async fn create_port(&self, port: &PortRef) -> Result<String>;
    async fn delete_port(&self, port_path: &str) -> Result<()>;
}

/// Lookup of already-registered controller tenant names.
///
/// Used only for tenant-name disambiguation; backed by whatever record
/// store the caller maintains for controller resources.
#[async_trait]
pub trait TenantNameLookup: Send + Sync {
    /// Whether a controller-side tenant record with exactly this name
    /// already exists.
    async fn find_existing(&self, name: &str) -> Result<bool>;
}

/// Lookup that never finds a record, for callers without a record store.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRecordLookup;

#[async_trait]
impl TenantNameLookup for NoRecordLookup {
    async fn find_existing(&self, _name: &str) -> Result<bool> {
        Ok(false)
    }
}
