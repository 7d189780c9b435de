//! Error types for driver operations

use thiserror::Error;

/// OFC REST client errors.
///
/// Transport and HTTP failures are not recovered by the driver; they carry
/// status/method/path context and propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum OfcError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OFC returned error: {status} {method} {path} - {message}")]
    Api {
        status: u16,
        method: String,
        path: String,
        message: String,
    },

    #[error("OFC response parsing failed: {0}")]
    Parse(String),

    #[error("OFC client certificate error: {0}")]
    Certificate(String),

    #[error("OFC configuration error: {0}")]
    Configuration(String),
}

/// Identity service lookup errors.
///
/// Every variant counts as an identity-lookup failure for the purpose of
/// tenant-name resolution, which recovers locally by generating the
/// controller ID from the raw tenant ID instead.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("identity authentication failed: {0}")]
    Authentication(String),

    #[error("tenant {tenant_id} lookup failed: {message}")]
    Lookup { tenant_id: String, message: String },

    #[error("identity response parsing failed: {0}")]
    Parse(String),
}
