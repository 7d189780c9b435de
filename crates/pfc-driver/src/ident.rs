//! PFC identifier generation
//!
//! The controller only accepts identifiers of at most 31 characters and
//! descriptions of at most 127 characters, both restricted to
//! `[0-9A-Za-z_]`. UUID-shaped identifiers are shortened to 31 characters
//! by dropping the version nibble (RFC 4122); it carries no entropy worth
//! keeping within this namespace.

use uuid::Uuid;

const MAX_ID_LEN: usize = 31;
const MAX_DESC_LEN: usize = 127;

/// Replace every character outside `[0-9A-Za-z]` with `_`.
///
/// Char-wise, so a multi-byte character maps to a single underscore.
pub fn sanitize_str(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Generate a controller-legal identifier from an arbitrary string.
///
/// UUID-shaped input (hyphenated or plain 32-hex) is rendered as lowercase
/// hex with the version nibble removed, giving exactly 31 characters.
/// Anything else is sanitized and truncated to 31.
pub fn generate_pfc_id(raw: &str) -> String {
    match Uuid::parse_str(raw) {
        Ok(uuid) => {
            let hex = uuid.simple().to_string();
            // version nibble sits right after the 12 leading hex digits
            format!("{}{}", &hex[..12], &hex[13..])
        }
        Err(_) => sanitize_str(raw).chars().take(MAX_ID_LEN).collect(),
    }
}

/// Generate a controller-legal description, truncated to 127 characters.
pub fn generate_pfc_description(raw: &str) -> String {
    sanitize_str(raw).chars().take(MAX_DESC_LEN).collect()
}
