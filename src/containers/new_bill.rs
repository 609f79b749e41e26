use std::cell::RefCell;
use std::rc::Rc;
use std::sync::OnceLock;
use regex::Regex;
use thiserror::Error;
use crate::models::{Bill, BillStatus, NewBillForm, SelectedFile, StoredFile};
use crate::routes::{OnNavigate, Route};
use crate::storage::{current_email, LocalStorage};
use crate::store::{Store, StoreError};

const ALLOWED_FILE: &str = r"(?i)\.(jpe?g|png)$";

#[derive(Clone, Debug, Error, PartialEq)]
pub enum NewBillError {
    #[error("Seuls les fichiers jpg, jpeg ou png sont acceptés ({name})")]
    UnsupportedFile { name: String },
    #[error("Aucun service de stockage disponible")]
    NoStore,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Receipt already on the server, waiting for the form to be sent.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedReceipt {
    pub file_url: String,
    pub key: String,
    pub file_name: String,
}

pub fn is_allowed_file(name: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(ALLOWED_FILE).expect("file pattern compiles")).is_match(name.trim())
}

pub struct NewBill {
    on_navigate: OnNavigate,
    store: Option<Rc<dyn Store>>,
    storage: Rc<dyn LocalStorage>,
    receipt: RefCell<Option<UploadedReceipt>>,
}

impl NewBill {
    pub fn new(on_navigate: OnNavigate, store: Option<Rc<dyn Store>>, storage: Rc<dyn LocalStorage>) -> Self {
        Self { on_navigate, store, storage, receipt: RefCell::new(None) }
    }

    pub fn receipt(&self) -> Option<UploadedReceipt> {
        self.receipt.borrow().clone()
    }

    /// Uploads a jpg/jpeg/png receipt for the current user. Other files are refused before any call.
    /// Any earlier receipt is forgotten first, so a failed change never leaves it attached.
    pub async fn handle_change_file(&self, file: SelectedFile) -> Result<StoredFile, NewBillError> {
        *self.receipt.borrow_mut() = None;
        if !is_allowed_file(&file.name) {
            tracing::warn!(file = %file.name, "refusing receipt with unsupported extension");
            return Err(NewBillError::UnsupportedFile { name: file.name });
        }
        let store = self.store.as_ref().ok_or(NewBillError::NoStore)?;
        let email = current_email(self.storage.as_ref());
        let stored = store.upload(&file, email.as_deref()).await?;
        tracing::debug!(key = %stored.key, "receipt uploaded");
        *self.receipt.borrow_mut() = Some(UploadedReceipt {
            file_url: stored.file_url.clone(),
            key: stored.key.clone(),
            file_name: file.name,
        });
        Ok(stored)
    }

    /// The bill the form describes, for the current user.
    pub fn bill_from_form(&self, form: &NewBillForm) -> Bill {
        let receipt = self.receipt();
        Bill {
            id: receipt.as_ref().map(|r| r.key.clone()).unwrap_or_default(),
            email: current_email(self.storage.as_ref()),
            expense_type: form.expense_type.clone(),
            name: form.name.trim().to_string(),
            amount: form.amount(),
            date: form.date.trim().to_string(),
            vat: Some(form.vat.trim().to_string()).filter(|v| !v.is_empty()),
            pct: Some(form.pct()),
            commentary: Some(form.commentary.clone()),
            file_url: receipt.as_ref().map(|r| r.file_url.clone()),
            file_name: receipt.map(|r| r.file_name),
            status: BillStatus::Pending,
            comment_admin: None,
        }
    }

    /// Sends the bill, then goes back to the Bills page. Without a store the bill is only built.
    pub async fn handle_submit(&self, form: NewBillForm) -> Result<Bill, NewBillError> {
        let bill = self.bill_from_form(&form);
        let bill = match &self.store {
            Some(store) => store.create(&bill).await?,
            None => bill,
        };
        (self.on_navigate)(Route::Bills);
        Ok(bill)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use super::*;
    use crate::storage::{MemoryStorage, USER_KEY};
    use crate::store::mock::{MOCK_FILE_URL, MOCK_KEY};
    use crate::store::MockStore;

    const EMAIL: &str = "employee@company.tld";

    struct Fixture {
        container: NewBill,
        store: Rc<MockStore>,
        visited: Rc<RefCell<Vec<Route>>>,
    }

    fn fixture() -> Fixture {
        let storage = Rc::new(MemoryStorage::new());
        storage.set_item(USER_KEY, &format!(r#"{{"type":"Employee","email":"{}"}}"#, EMAIL)).unwrap();
        let store = Rc::new(MockStore::with_bills(Vec::new()));
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = visited.clone();
        let on_navigate: OnNavigate = Rc::new(move |r: Route| sink.borrow_mut().push(r));
        let container = NewBill::new(on_navigate, Some(store.clone() as Rc<dyn Store>), storage);
        Fixture { container, store, visited }
    }

    fn png(name: &str) -> SelectedFile {
        SelectedFile::new(name, "image/png", b"image".to_vec())
    }

    fn form() -> NewBillForm {
        NewBillForm {
            expense_type: "Transports".into(),
            name: "Vol Paris Londres".into(),
            date: "2022-03-14".into(),
            amount: "348".into(),
            vat: "70".into(),
            pct: String::new(),
            commentary: "séminaire".into(),
        }
    }

    #[rstest]
    #[case("image.png", true)]
    #[case("photo.JPG", true)]
    #[case("scan.jpeg", true)]
    #[case("scan.Jpeg", true)]
    #[case("facture.pdf", false)]
    #[case("png", false)]
    #[case("image.png.exe", false)]
    fn only_images_are_allowed(#[case] name: &str, #[case] allowed: bool) {
        assert_eq!(is_allowed_file(name), allowed);
    }

    #[tokio::test]
    async fn png_receipt_is_uploaded_with_the_user_email() {
        let f = fixture();
        let stored = f.container.handle_change_file(png("image.png")).await.unwrap();
        assert_eq!(stored.file_url, MOCK_FILE_URL);
        assert_eq!(f.store.uploads(), [("image.png".to_string(), Some(EMAIL.to_string()))]);
        let receipt = f.container.receipt().unwrap();
        assert_eq!(receipt.key, MOCK_KEY);
        assert_eq!(receipt.file_name, "image.png");
    }

    #[tokio::test]
    async fn other_files_are_refused_without_upload() {
        let f = fixture();
        let err = f.container.handle_change_file(png("facture.pdf")).await.unwrap_err();
        assert_eq!(err, NewBillError::UnsupportedFile { name: "facture.pdf".into() });
        assert!(err.to_string().starts_with("Seuls les fichiers jpg, jpeg ou png"));
        assert!(f.store.uploads().is_empty());
        assert!(f.container.receipt().is_none());
    }

    #[tokio::test]
    async fn submit_creates_the_bill_and_goes_back_to_bills() {
        let f = fixture();
        f.container.handle_change_file(png("image.png")).await.unwrap();
        let bill = f.container.handle_submit(form()).await.unwrap();

        assert_eq!(bill.email.as_deref(), Some(EMAIL));
        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(bill.amount, 348.0);
        assert_eq!(bill.pct, Some(20));
        assert_eq!(bill.file_url.as_deref(), Some(MOCK_FILE_URL));
        assert_eq!(bill.file_name.as_deref(), Some("image.png"));
        assert_eq!(f.store.bills(), [bill]);
        assert_eq!(*f.visited.borrow(), [Route::Bills]);
    }

    #[tokio::test]
    async fn each_submit_creates_one_bill() {
        let f = fixture();
        f.container.handle_submit(form()).await.unwrap();
        assert_eq!(f.store.bills().len(), 1);
        f.container.handle_submit(form()).await.unwrap();
        assert_eq!(f.store.bills().len(), 2);
    }

    #[tokio::test]
    async fn failed_upload_drops_the_previous_receipt() {
        let f = fixture();
        f.container.handle_change_file(png("first.png")).await.unwrap();
        f.store.fail_upload(StoreError::Http { status: 500 });
        let err = f.container.handle_change_file(png("second.png")).await.unwrap_err();
        assert_eq!(err, NewBillError::Store(StoreError::Http { status: 500 }));
        assert!(f.container.receipt().is_none());

        let bill = f.container.handle_submit(form()).await.unwrap();
        assert_eq!(bill.file_url, None);
        assert_eq!(bill.file_name, None);
        assert_eq!(f.store.uploads(), [("first.png".to_string(), Some(EMAIL.to_string()))]);
    }

    #[tokio::test]
    async fn failed_create_stays_on_the_form() {
        let f = fixture();
        f.store.fail_create(StoreError::Http { status: 500 });
        let err = f.container.handle_submit(form()).await.unwrap_err();
        assert_eq!(err, NewBillError::Store(StoreError::Http { status: 500 }));
        assert!(f.visited.borrow().is_empty());
    }
}
