//! Resource reference types
//!
//! Ephemeral request values describing the logical resources the driver
//! maps onto controller-side resources. The controller addresses every
//! resource by a hierarchical path string (`/tenants/{t}`,
//! `/tenants/{t}/networks/{n}`, `.../ports/{p}`); that path is the only
//! durable handle returned to the caller.

use serde::{Deserialize, Serialize};

/// Logical tenant descriptor.
///
/// The controller-side name is resolved at create time from the identity
/// service, so only the external identifier and an optional free-text
/// description are carried here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantRef {
    /// External tenant identifier, typically a UUID.
    pub id: String,
    pub description: Option<String>,
}

/// Logical network descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkRef {
    /// Logical network identifier.
    pub id: String,
    pub description: Option<String>,
    /// Controller path of the owning tenant.
    pub tenant_path: String,
}

/// Logical port descriptor with its physical binding attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortRef {
    /// Logical port identifier.
    pub id: String,
    /// Controller path of the owning network.
    pub network_path: String,
    /// OpenFlow datapath identifier, e.g. `"0x123456789"`.
    pub datapath_id: String,
    pub port_no: u32,
    pub vlan_id: u16,
    /// Not used by the controller, carried for symmetry with the caller's
    /// data model.
    pub mac: Option<String>,
}

impl TenantRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl NetworkRef {
    pub fn new(id: impl Into<String>, tenant_path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            tenant_path: tenant_path.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
