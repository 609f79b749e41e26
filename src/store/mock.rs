use std::cell::{Cell, RefCell};
use async_trait::async_trait;
use crate::models::{Bill, Credentials, SelectedFile, StoredFile};
use super::{fixtures, Store, StoreError};

pub const MOCK_FILE_URL: &str = "https://localhost:3456/images/test.jpg";
pub const MOCK_KEY: &str = "1234";

/// In-memory store serving the fixtures. Failures can be injected per operation.
#[derive(Default)]
pub struct MockStore {
    bills: RefCell<Vec<Bill>>,
    list_error: RefCell<Option<StoreError>>,
    create_error: RefCell<Option<StoreError>>,
    upload_error: RefCell<Option<StoreError>>,
    login_error: RefCell<Option<StoreError>>,
    uploads: RefCell<Vec<(String, Option<String>)>>,
    list_calls: Cell<usize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::with_bills(fixtures::bills())
    }

    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self { bills: RefCell::new(bills), ..Default::default() }
    }

    /// A store whose `list` rejects with `error` on every call.
    pub fn failing(error: StoreError) -> Self {
        let store = Self::new();
        store.fail_list(error);
        store
    }

    pub fn fail_list(&self, error: StoreError) {
        *self.list_error.borrow_mut() = Some(error);
    }

    pub fn fail_create(&self, error: StoreError) {
        *self.create_error.borrow_mut() = Some(error);
    }

    /// Later uploads are rejected; those already received stay recorded.
    pub fn fail_upload(&self, error: StoreError) {
        *self.upload_error.borrow_mut() = Some(error);
    }

    pub fn fail_login(&self, error: StoreError) {
        *self.login_error.borrow_mut() = Some(error);
    }

    pub fn bills(&self) -> Vec<Bill> {
        self.bills.borrow().clone()
    }

    /// `(file name, email)` of every upload received.
    pub fn uploads(&self) -> Vec<(String, Option<String>)> {
        self.uploads.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.get()
    }
}

#[async_trait(?Send)]
impl Store for MockStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.list_calls.set(self.list_calls.get() + 1);
        match self.list_error.borrow().clone() {
            Some(e) => Err(e),
            None => Ok(self.bills()),
        }
    }

    async fn create(&self, bill: &Bill) -> Result<Bill, StoreError> {
        if let Some(e) = self.create_error.borrow().clone() {
            return Err(e);
        }
        let mut created = bill.clone();
        if created.id.is_empty() {
            created.id = format!("mock-{}", self.bills.borrow().len() + 1);
        }
        self.bills.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn upload(&self, file: &SelectedFile, email: Option<&str>) -> Result<StoredFile, StoreError> {
        if let Some(e) = self.upload_error.borrow().clone() {
            return Err(e);
        }
        self.uploads.borrow_mut().push((file.name.clone(), email.map(str::to_string)));
        Ok(StoredFile { file_url: MOCK_FILE_URL.to_string(), key: MOCK_KEY.to_string() })
    }

    async fn login(&self, _credentials: &Credentials) -> Result<String, StoreError> {
        if let Some(e) = self.login_error.borrow().clone() {
            return Err(e);
        }
        Ok("mock-jwt".to_string())
    }
}
