//! Persisted session record in `localStorage`.
//!
//! A single key holds the JSON-serialized user. Absence of the key — or a
//! record that no longer decodes — means "no session to restore"; restore
//! never fails. The restored identity is trusted without backend
//! re-validation until logout, which is a documented storefront non-goal.
//! Requires a browser environment; native builds degrade to no-ops.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::User;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "lessonshop_user";

/// Persist the user record. Storage failures (quota, disabled storage) are
/// logged and swallowed; the in-memory session is the source of truth.
pub fn save_user(user: &User) {
    #[cfg(feature = "csr")]
    {
        let Ok(json) = serde_json::to_string(user) else {
            return;
        };
        if let Some(storage) = local_storage() {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                log::warn!("failed to persist session record");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = user;
    }
}

/// Read the persisted user record, if any.
pub fn load_user() -> Option<User> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage()?;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        decode_user(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Delete the persisted user record. Idempotent.
pub fn clear_user() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Decode a persisted record; a malformed record reads as "no session".
pub fn decode_user(raw: &str) -> Option<User> {
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("discarding undecodable session record: {err}");
            None
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}
