use std::rc::Rc;
use crate::format::format_bill;
use crate::models::BillRow;
use crate::routes::{OnNavigate, Route};
use crate::storage::{current_email, LocalStorage};
use crate::store::{Store, StoreError};

/// Receipt shown in the modal opened by an eye icon.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiptModal {
    pub url: String,
    pub image_width: u32,
}

pub struct Bills {
    on_navigate: OnNavigate,
    store: Option<Rc<dyn Store>>,
    storage: Rc<dyn LocalStorage>,
    modal_width: u32,
}

impl Bills {
    pub fn new(on_navigate: OnNavigate, store: Option<Rc<dyn Store>>, storage: Rc<dyn LocalStorage>, modal_width: u32) -> Self {
        Self { on_navigate, store, storage, modal_width }
    }

    pub fn handle_click_new_bill(&self) {
        (self.on_navigate)(Route::NewBill)
    }

    /// `bill_url` is the receipt URL carried by the clicked icon.
    pub fn handle_click_icon_eye(&self, bill_url: &str) -> ReceiptModal {
        tracing::debug!(url = bill_url, "opening receipt");
        ReceiptModal { url: bill_url.to_string(), image_width: self.modal_width / 2 }
    }

    /// Fetches and formats the bills. Store failures come back unchanged.
    pub async fn get_bills(&self) -> Result<Vec<BillRow>, StoreError> {
        let Some(store) = &self.store else {
            return Ok(Vec::new());
        };
        tracing::debug!(user = ?current_email(self.storage.as_ref()), "fetching bills");
        let bills = store.list().await?;
        Ok(bills.into_iter().map(format_bill).collect())
    }
}
