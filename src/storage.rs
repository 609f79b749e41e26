//! Local storage access: the current user and the session token.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::models::User;
use crate::store::StoreError;

pub const USER_KEY: &str = "user";
pub const JWT_KEY: &str = "jwt";

pub trait LocalStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory storage, used natively and in tests.
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage(web_sys::Storage);

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    pub fn local() -> Option<Self> {
        web_sys::window()?.local_storage().ok().flatten().map(Self)
    }
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.set_item(key, value).map_err(|e| StoreError::Storage { message: format!("{:?}", e) })
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.0.remove_item(key).map_err(|e| StoreError::Storage { message: format!("{:?}", e) })
    }
}

/// Browser local storage when available, memory otherwise.
pub fn default_storage() -> Rc<dyn LocalStorage> {
    browser_storage().unwrap_or_else(|| {
        tracing::debug!("local storage unavailable, using memory storage");
        Rc::new(MemoryStorage::new())
    })
}

#[cfg(target_arch = "wasm32")]
fn browser_storage() -> Option<Rc<dyn LocalStorage>> {
    BrowserStorage::local().map(|s| Rc::new(s) as Rc<dyn LocalStorage>)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_storage() -> Option<Rc<dyn LocalStorage>> {
    None
}

/// The logged-in user. A missing or corrupted record reads as no user.
pub fn current_user(storage: &dyn LocalStorage) -> Option<User> {
    let raw = storage.get_item(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("ignoring unreadable user record: {}", e);
            None
        }
    }
}

pub fn save_user(storage: &dyn LocalStorage, user: &User) -> Result<(), StoreError> {
    let json = serde_json::to_string(user).map_err(|e| StoreError::Decode { message: e.to_string() })?;
    storage.set_item(USER_KEY, &json)
}

pub fn current_email(storage: &dyn LocalStorage) -> Option<String> {
    current_user(storage).and_then(|u| u.email)
}
