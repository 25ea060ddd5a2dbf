//! Caller identity handling.
//!
//! Identity is a caller-supplied email string with no verification; any
//! client can claim any email. This is the product's open trust model:
//! the vote dedup and comment cooldown key on whatever the client sends.

/// Identity recorded when a request carries no usable email or name.
pub const GUEST_IDENTITY: &str = "Гость";

/// Identity recorded on synthetic votes inserted by the admin boost.
pub const ADMIN_IDENTITY: &str = "Admin";

/// Resolves an optional caller-supplied value to a usable identity,
/// falling back to the guest sentinel for absent or empty input.
pub fn or_guest(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => GUEST_IDENTITY.to_string(),
    }
}
