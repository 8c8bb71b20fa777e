//! Browser localStorage adapter for the persisted session record.
//!
//! Centralizes csr-only read/write behavior so the controller never
//! touches web-sys directly; native builds no-op.

use crate::controller::SessionStore;

/// localStorage key holding the JSON-serialized session record.
#[cfg(feature = "csr")]
const SESSION_KEY: &str = "pwacore_user";

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Session store backed by `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn load_raw(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(SESSION_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save_raw(&self, raw: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.set_item(SESSION_KEY, raw);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = raw;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
