//! PFC driver implementation
//!
//! Maps the tenant/network/port model onto PFC REST resources, addressed
//! by hierarchical path instead of bare controller IDs. Implements the
//! PFC V4 API; the V3 differences (implicit tenants) are captured by the
//! capability profile selected at construction time.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};

use pfc_core::{
    ApiProfile, ApiVersion, IdentityConfig, NetworkRef, NoRecordLookup, OfcConfig, OfcDriver,
    OfcError, PortRef, TenantNameLookup, TenantRef,
};

use crate::client::{OfcApi, OfcClient};
use crate::ident::{generate_pfc_description, generate_pfc_id};
use crate::identity::{IdentityClient, KeystoneClient};

pub struct PfcDriver {
    client: Arc<dyn OfcApi>,
    identity: Arc<dyn IdentityClient>,
    lookup: Arc<dyn TenantNameLookup>,
    profile: ApiProfile,
}

impl PfcDriver {
    /// Create a driver against a live controller and identity service.
    ///
    /// Callers with a record store for controller resources should use
    /// [`PfcDriver::with_lookup`] so tenant names can be disambiguated.
    pub fn new(
        ofc_config: &OfcConfig,
        identity_config: IdentityConfig,
        version: ApiVersion,
    ) -> Result<Self> {
        identity_config.validate()?;
        let client = OfcClient::new(ofc_config)?;
        let identity = KeystoneClient::new(identity_config)?;

        Ok(Self::from_parts(
            Arc::new(client),
            Arc::new(identity),
            Arc::new(NoRecordLookup),
            version,
        ))
    }

    pub fn with_lookup(
        ofc_config: &OfcConfig,
        identity_config: IdentityConfig,
        lookup: Arc<dyn TenantNameLookup>,
        version: ApiVersion,
    ) -> Result<Self> {
        identity_config.validate()?;
        let client = OfcClient::new(ofc_config)?;
        let identity = KeystoneClient::new(identity_config)?;

        Ok(Self::from_parts(
            Arc::new(client),
            Arc::new(identity),
            lookup,
            version,
        ))
    }

    /// Assemble a driver from already-built collaborators.
    pub fn from_parts(
        client: Arc<dyn OfcApi>,
        identity: Arc<dyn IdentityClient>,
        lookup: Arc<dyn TenantNameLookup>,
        version: ApiVersion,
    ) -> Self {
        Self {
            client,
            identity,
            lookup,
            profile: version.profile(),
        }
    }

    /// Resolve the controller-side tenant name for an external tenant ID.
    ///
    /// Not a pure function: the result depends on the identity service and
    /// on which names are already registered. Identity-lookup failures fall
    /// back to an ID derived from the external tenant ID; lookup-store
    /// failures propagate.
    async fn resolve_tenant_name(&self, tenant_id: &str) -> Result<String> {
        let name = match self.identity.tenant_display_name(tenant_id).await {
            Ok(name) => name,
            Err(e) => {
                log::debug!(
                    "identity lookup for tenant {} failed ({}), deriving name from id",
                    tenant_id,
                    e
                );
                return Ok(generate_pfc_id(tenant_id));
            }
        };

        let mut pfc_name = generate_pfc_id(&name);
        // Another tenant may already hold this display name; suffix the
        // external ID to disambiguate. A residual collision is possible
        // after re-sanitization and accepted.
        if self.lookup.find_existing(&pfc_name).await? {
            pfc_name = generate_pfc_id(&format!("{}_{}", pfc_name, tenant_id));
        }
        Ok(pfc_name)
    }

    fn id_from_response(res: &Value, what: &str) -> Result<String, OfcError> {
        res.get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| OfcError::Parse(format!("no id in {} create response", what)))
    }
}

#[async_trait]
impl OfcDriver for PfcDriver {
    async fn create_tenant(&self, tenant: &TenantRef) -> Result<String> {
        if self.profile.tenant_id_is_client_generated {
            // tenants exist implicitly on this controller version
            let ofc_tenant_id = generate_pfc_id(&tenant.id);
            return Ok(format!("/tenants/{}", ofc_tenant_id));
        }

        let ofc_tenant_id = self.resolve_tenant_name(&tenant.id).await?;
        let body = json!({ "id": ofc_tenant_id });
        self.client.post("/tenants", &body).await?;

        let path = format!("/tenants/{}", ofc_tenant_id);
        log::info!("created tenant {} at {}", tenant.id, path);
        Ok(path)
    }

    async fn update_tenant(&self, tenant_path: &str, description: &str) -> Result<()> {
        let body = json!({ "description": generate_pfc_description(description) });
        self.client.put(tenant_path, &body).await?;
        Ok(())
    }

    async fn delete_tenant(&self, tenant_path: &str) -> Result<()> {
        if self.profile.tenant_delete_is_noop {
            return Ok(());
        }
        self.client.delete(tenant_path).await?;
        Ok(())
    }

    async fn create_network(&self, network: &NetworkRef) -> Result<String> {
        let path = format!("{}/networks", network.tenant_path);
        let pfc_desc = generate_pfc_description(network.description.as_deref().unwrap_or(""));
        let body = json!({ "description": pfc_desc });

        let res = self.client.post(&path, &body).await?;
        let ofc_network_id = Self::id_from_response(&res, "network")?;

        let network_path = format!("{}/{}", path, ofc_network_id);
        log::info!("created network {} at {}", network.id, network_path);
        Ok(network_path)
    }

    async fn update_network(&self, network_path: &str, description: &str) -> Result<()> {
        let body = json!({ "description": generate_pfc_description(description) });
        self.client.put(network_path, &body).await?;
        Ok(())
    }

    async fn delete_network(&self, network_path: &str) -> Result<()> {
        self.client.delete(network_path).await?;
        Ok(())
    }

    async fn create_port(&self, port: &PortRef) -> Result<String> {
        let path = format!("{}/ports", port.network_path);
        // numeric attributes go on the wire as decimal strings
        let body = json!({
            "datapath_id": port.datapath_id,
            "port": port.port_no.to_string(),
            "vid": port.vlan_id.to_string(),
        });

        let res = self.client.post(&path, &body).await?;
        let ofc_port_id = Self::id_from_response(&res, "port")?;

        let port_path = format!("{}/{}", path, ofc_port_id);
        log::info!("created port {} at {}", port.id, port_path);
        Ok(port_path)
    }

    async fn delete_port(&self, port_path: &str) -> Result<()> {
        self.client.delete(port_path).await?;
        Ok(())
    }
}
