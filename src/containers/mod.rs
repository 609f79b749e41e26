//! Page containers: each one turns a user action into store calls and navigation.

pub mod bills;
pub mod login;
pub mod new_bill;

pub use bills::{Bills, ReceiptModal};
pub use login::{logout, Login};
pub use new_bill::{NewBill, NewBillError};
