//! Identity service client
//!
//! Resolves tenant display names from a Keystone v2.0 style identity
//! service. The driver only ever needs one operation here; everything
//! else about the identity service stays outside this crate.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use pfc_core::{IdentityConfig, IdentityError};

/// Display-name lookup seam.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    /// Human-readable name of the tenant, as registered in the identity
    /// service.
    async fn tenant_display_name(&self, tenant_id: &str) -> Result<String, IdentityError>;
}

/// Keystone v2.0 identity client.
///
/// Stateless: each lookup requests a token and then fetches the tenant.
/// Callers wanting token reuse can wrap the trait.
pub struct KeystoneClient {
    client: Client,
    config: IdentityConfig,
}

impl KeystoneClient {
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, config })
    }

    async fn authenticate(&self) -> Result<String, IdentityError> {
        let url = format!("{}/tokens", self.config.auth_url.trim_end_matches('/'));
        let body = json!({
            "auth": {
                "passwordCredentials": {
                    "username": self.config.username,
                    "password": self.config.password,
                },
                "tenantName": self.config.tenant_name,
            }
        });

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(IdentityError::Authentication(format!(
                "token request returned {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))?;

        body.get("access")
            .and_then(|a| a.get("token"))
            .and_then(|t| t.get("id"))
            .and_then(|id| id.as_str())
            .map(str::to_string)
            .ok_or_else(|| IdentityError::Parse("no token in identity response".to_string()))
    }
}

#[async_trait]
impl IdentityClient for KeystoneClient {
    async fn tenant_display_name(&self, tenant_id: &str) -> Result<String, IdentityError> {
        let token = self.authenticate().await?;

        let url = format!(
            "{}/tenants/{}",
            self.config.auth_url.trim_end_matches('/'),
            urlencoding::encode(tenant_id)
        );

        log::debug!("identity lookup: tenant {}", tenant_id);

        let response = self
            .client
            .get(&url)
            .header("X-Auth-Token", token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(IdentityError::Lookup {
                tenant_id: tenant_id.to_string(),
                message: format!("identity service returned {}", response.status()),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))?;

        body.get("tenant")
            .and_then(|t| t.get("name"))
            .and_then(|n| n.as_str())
            .map(str::to_string)
            .ok_or_else(|| IdentityError::Lookup {
                tenant_id: tenant_id.to_string(),
                message: "no tenant name in identity response".to_string(),
            })
    }
}

/// Mock identity client for tests.
#[derive(Default)]
pub struct MockIdentityClient {
    names: HashMap<String, String>,
    fail_all: bool,
}

impl MockIdentityClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tenant(&mut self, tenant_id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(tenant_id.into(), name.into());
    }

    /// Make every lookup fail, simulating an unreachable identity service.
    pub fn fail_all(&mut self) {
        self.fail_all = true;
    }
}

#[async_trait]
impl IdentityClient for MockIdentityClient {
    async fn tenant_display_name(&self, tenant_id: &str) -> Result<String, IdentityError> {
        if self.fail_all {
            return Err(IdentityError::Authentication(
                "identity service unavailable".to_string(),
            ));
        }

        self.names
            .get(tenant_id)
            .cloned()
            .ok_or_else(|| IdentityError::Lookup {
                tenant_id: tenant_id.to_string(),
                message: "unknown tenant".to_string(),
            })
    }
}
