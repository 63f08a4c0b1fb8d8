//! Store scoping by subdomain
//!
//! Every store is served at `<slug>.<base_domain>`. The slug picks the store;
//! a session is only valid on its own store's subdomain.

use shared::models::{Session, SessionError, Store};
use thiserror::Error;

/// Labels that never name a store
const RESERVED_LABELS: &[&str] = &["www", "api", "admin"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TenantError {
    #[error("Host is not a store subdomain: {0}")]
    NotAStoreHost(String),

    #[error("Unknown store: {0}")]
    UnknownStore(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Extract the store slug from a `Host` header value
///
/// Returns `None` for the bare base domain, reserved labels, nested
/// subdomains, malformed labels and hosts outside `base_domain`.
pub fn resolve_store_slug(host: &str, base_domain: &str) -> Option<String> {
    let host = strip_port(host.trim()).trim_end_matches('.').to_ascii_lowercase();
    let base = base_domain.trim().trim_end_matches('.').to_ascii_lowercase();
    if base.is_empty() {
        return None;
    }

    let label = host.strip_suffix(&base)?.strip_suffix('.')?;
    if label.contains('.') || !is_valid_label(label) || RESERVED_LABELS.contains(&label) {
        return None;
    }
    Some(label.to_string())
}

/// Find the store served at `host`
pub fn find_store<'a>(host: &str, base_domain: &str, stores: &'a [Store]) -> Option<&'a Store> {
    let slug = resolve_store_slug(host, base_domain)?;
    stores.iter().find(|s| s.slug == slug)
}

/// Resolve the store for `host` and check the session belongs to it
pub fn authorize_host<'a>(
    session: &Session,
    host: &str,
    base_domain: &str,
    stores: &'a [Store],
) -> Result<&'a Store, TenantError> {
    let slug = resolve_store_slug(host, base_domain)
        .ok_or_else(|| TenantError::NotAStoreHost(host.to_string()))?;
    let store = stores
        .iter()
        .find(|s| s.slug == slug)
        .ok_or(TenantError::UnknownStore(slug))?;
    session.ensure_store(&store.id)?;
    tracing::debug!(
        store_id = %store.id,
        slug = %store.slug,
        email = %session.email,
        "Session scoped to store"
    );
    Ok(store)
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    }
}

/// RFC 1123 label: 1–63 chars of `[a-z0-9-]`, no leading/trailing hyphen
fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
