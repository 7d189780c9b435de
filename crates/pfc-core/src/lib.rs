//! PFC Driver Core
//!
//! Core types and abstractions for the PFC driver

pub mod config;
pub mod driver;
pub mod error;
pub mod types;

pub use config::{ApiProfile, ApiVersion, IdentityConfig, OfcConfig};
pub use driver::{NoRecordLookup, OfcDriver, TenantNameLookup};
pub use error::{IdentityError, OfcError};
pub use types::{NetworkRef, PortRef, TenantRef};
