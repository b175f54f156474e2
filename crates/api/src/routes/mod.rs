pub mod auth;
pub mod challenge;
pub mod charity;
pub mod invitation;
pub mod stats;

/// Required-field check for request bodies: absent and empty both count as
/// missing.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
