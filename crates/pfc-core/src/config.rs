//! Driver configuration
//!
//! Explicit configuration structs passed to the driver constructor; no
//! process-wide configuration state.

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Connection parameters for the OFC REST endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfcConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub use_ssl: bool,
    /// Client private key for TLS client-certificate authentication.
    pub key_file: Option<PathBuf>,
    /// Client certificate for TLS client-certificate authentication.
    pub cert_file: Option<PathBuf>,
}

impl OfcConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            use_ssl: false,
            key_file: None,
            cert_file: None,
        }
    }

    /// Base URL of the controller API.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        format!("{}://{}:{}", scheme, self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            bail!("OFC host cannot be empty");
        }
        if self.key_file.is_some() != self.cert_file.is_some() {
            bail!("OFC client certificate requires both key_file and cert_file");
        }
        if !self.use_ssl && self.cert_file.is_some() {
            bail!("OFC client certificate requires use_ssl");
        }
        Ok(())
    }
}

/// Credentials for the identity (Keystone v2.0 style) service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// e.g. `http://keystone:35357/v2.0`
    pub auth_url: String,
    pub username: String,
    pub password: String,
    pub tenant_name: String,
}

impl IdentityConfig {
    pub fn validate(&self) -> Result<()> {
        if self.auth_url.is_empty() {
            bail!("identity auth_url cannot be empty");
        }
        if self.username.is_empty() || self.password.is_empty() {
            bail!("identity credentials cannot be empty");
        }
        Ok(())
    }
}

/// Controller API version the driver talks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// PFC V3: tenants exist implicitly, IDs derived client-side.
    #[serde(rename = "v3")]
    V3,
    /// PFC V4 and later: tenants are real controller resources.
    #[serde(rename = "v4")]
    V4,
}

impl std::fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiVersion::V3 => write!(f, "v3"),
            ApiVersion::V4 => write!(f, "v4"),
        }
    }
}

/// Per-version capability profile, selected at driver construction time.
///
/// Keeps the CRUD logic in one place parameterized by the profile instead
/// of one driver type per controller version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiProfile {
    /// Tenant IDs are derived client-side from the external tenant ID and
    /// no create request is sent to the controller.
    pub tenant_id_is_client_generated: bool,
    /// Tenant deletion is a local no-op.
    pub tenant_delete_is_noop: bool,
}

impl ApiVersion {
    pub fn profile(self) -> ApiProfile {
        match self {
            ApiVersion::V3 => ApiProfile {
                tenant_id_is_client_generated: true,
                tenant_delete_is_noop: true,
            },
            ApiVersion::V4 => ApiProfile {
                tenant_id_is_client_generated: false,
                tenant_delete_is_noop: false,
            },
        }
    }
}
