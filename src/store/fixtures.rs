//! Canned bills served by the mock store and used by tests.
use crate::models::{Bill, BillStatus};

pub const EMPLOYEE_EMAIL: &str = "a@a";

fn bill(id: &str, name: &str, expense_type: &str, date: &str, amount: f64, status: BillStatus) -> Bill {
    Bill {
        id: id.to_string(),
        name: name.to_string(),
        expense_type: expense_type.to_string(),
        date: date.to_string(),
        amount,
        vat: Some("20".to_string()),
        pct: Some(20),
        commentary: Some(String::new()),
        comment_admin: None,
        status,
        file_url: Some(format!("https://localhost:3456/images/{}.jpg", id)),
        file_name: Some(format!("{}.jpg", id)),
        email: Some(EMPLOYEE_EMAIL.to_string()),
    }
}

pub fn bills() -> Vec<Bill> {
    vec![
        bill("47qAXb6fIm2zOKkLzMro", "encore", "Hôtel et logement", "2004-04-04", 400.0, BillStatus::Pending),
        bill("BeKy5Mo4jkmdfPGYpTxZ", "test1", "Transports", "2001-01-01", 100.0, BillStatus::Refused),
        bill("UIUZtnPQvnbFnB0ozvJh", "test3", "Services en ligne", "2003-03-03", 300.0, BillStatus::Accepted),
        bill("qcCK3SzECmaZAGRrHjaC", "test2", "Restaurants et bars", "2002-02-02", 200.0, BillStatus::Refused),
    ]
}
