use web_sys::window;

const TOKEN_KEY: &str = "token";

/// Access to the stored bearer token. Views never touch storage directly;
/// the [`ApiClient`](crate::api::ApiClient) owns one of these and clears it
/// on logout or when the server answers 401.
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Token in `window.localStorage` under the `"token"` key.
pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .and_then(|s| s.and_then(|storage| storage.get_item(TOKEN_KEY).ok()))
            .flatten()
    }

    fn store(&self, token: &str) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    log::warn!("Failed to store auth token");
                }
            }
        }
    }

    fn clear(&self) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.remove_item(TOKEN_KEY).is_err() {
                    log::warn!("Failed to remove auth token");
                }
            }
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::CredentialStore;
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct MemoryCredentials {
        token: RefCell<Option<String>>,
    }

    impl CredentialStore for MemoryCredentials {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn store(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryCredentials;
    use super::CredentialStore;

    #[test]
    fn store_load_clear_roundtrip() {
        let store = MemoryCredentials::default();
        assert_eq!(store.load(), None);

        store.store("abc123");
        assert_eq!(store.load(), Some("abc123".to_string()));

        store.clear();
        assert_eq!(store.load(), None);
    }
}
