use serde::{Deserialize, Serialize};

pub const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

pub const DEFAULT_PCT: u32 = 20;

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub expense_type: String,
    pub date: String,
    pub amount: f64,
    #[serde(default)]
    pub vat: Option<String>,
    #[serde(default)]
    pub pct: Option<u32>,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(default)]
    pub comment_admin: Option<String>,
    #[serde(default)]
    pub status: BillStatus,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// A bill ready for display. `date` stays the raw ISO date and is the only sort key.
#[derive(Clone, Debug, PartialEq)]
pub struct BillRow {
    pub bill: Bill,
    pub date_label: String,
    pub status_label: String,
}

impl BillRow {
    /// Row shown exactly as stored, without any formatting.
    pub fn raw(bill: Bill) -> Self {
        Self {
            date_label: bill.date.clone(),
            status_label: crate::format::format_status(bill.status).to_string(),
            bill,
        }
    }
}

impl From<Bill> for BillRow {
    fn from(bill: Bill) -> Self {
        Self::raw(bill)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum UserType {
    Employee,
    Admin,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct User {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl User {
    pub fn employee(email: impl Into<String>) -> Self {
        Self { user_type: UserType::Employee, email: Some(email.into()), password: None, status: None }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub file_url: String,
    pub key: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), content_type: content_type.into(), bytes }
    }
}

/// Raw values of the new bill form, as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl NewBillForm {
    pub fn amount(&self) -> f64 {
        self.amount.trim().parse().unwrap_or(0.0)
    }

    pub fn pct(&self) -> u32 {
        self.pct.trim().parse().unwrap_or(DEFAULT_PCT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_reads_camel_case_json() {
        let json = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": "80",
            "fileUrl": "https://example.test/receipt.jpg",
            "status": "accepted",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "commentAdmin": "ok",
            "email": "a@a",
            "pct": 20
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.status, BillStatus::Accepted);
        assert_eq!(bill.expense_type, "Hôtel et logement");
        assert_eq!(bill.amount, 400.0);
        assert_eq!(bill.comment_admin.as_deref(), Some("ok"));
        assert_eq!(bill.file_name.as_deref(), Some("preview-facture-free-201801-pdf-1.jpg"));
    }

    #[test]
    fn user_without_email_parses() {
        let user: User = serde_json::from_str(r#"{"type":"Employee"}"#).unwrap();
        assert_eq!(user.user_type, UserType::Employee);
        assert!(user.email.is_none());
    }

    #[test]
    fn empty_pct_falls_back_to_default() {
        let form = NewBillForm { pct: String::new(), amount: "348".into(), ..Default::default() };
        assert_eq!(form.pct(), DEFAULT_PCT);
        assert_eq!(form.amount(), 348.0);
    }
}
