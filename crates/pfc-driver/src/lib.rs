//! PFC Driver
//!
//! REST driver translating the tenant/network/port data model into PFC
//! controller resources

pub mod client;
pub mod ident;
pub mod identity;
pub mod pfc;


pub use client::{MockOfcClient, OfcApi, OfcClient, OfcRequest};
pub use ident::{generate_pfc_description, generate_pfc_id, sanitize_str};
pub use identity::{IdentityClient, KeystoneClient, MockIdentityClient};
pub use pfc::PfcDriver;
