//! Display formatting for bill dates and statuses.
use chrono::{Datelike, NaiveDate};
use crate::models::{Bill, BillRow, BillStatus};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const MONTHS: [&str; 12] = [
    "Jan",
    "Fév",
    "Mar",
    "Avr",
    "Mai",
    "Jui",
    "Jui",
    "Aoû",
    "Sep",
    "Oct",
    "Nov",
    "Déc",
];

/// `2004-04-04` -> `4 Avr. 04`.
pub fn format_date(raw: &str) -> Result<String, chrono::ParseError> {
    let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)?;
    Ok(format!("{} {}. {:02}", date.day(), MONTHS[date.month0() as usize], date.year().rem_euclid(100)))
}

pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refused",
    }
}

/// Formats a bill for the Bills page. An unparsable date is kept as is.
pub fn format_bill(bill: Bill) -> BillRow {
    match format_date(&bill.date) {
        Ok(label) => BillRow { date_label: label, status_label: format_status(bill.status).to_string(), bill },
        Err(e) => {
            tracing::warn!(bill_id = %bill.id, date = %bill.date, "unformatted bill date: {}", e);
            BillRow::raw(bill)
        }
    }
}

/// Newest first. ISO dates sort as strings.
pub fn sort_anti_chrono(rows: &mut [BillRow]) {
    rows.sort_by(|a, b| b.bill.date.cmp(&a.bill.date));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates_in_french() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2021-11-22").unwrap(), "22 Nov. 21");
        assert_eq!(format_date("2003-03-03").unwrap(), "3 Mar. 03");
    }

    #[test]
    fn every_month_has_its_french_abbreviation() {
        let labels: Vec<String> = (1..=12).map(|m| format_date(&format!("2020-{:02}-01", m)).unwrap()).collect();
        assert_eq!(labels.first().map(String::as_str), Some("1 Jan. 20"));
        assert_eq!(labels[7], "1 Aoû. 20");
        assert_eq!(labels.last().map(String::as_str), Some("1 Déc. 20"));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(format_date("not a date").is_err());
        assert!(format_date("").is_err());
    }

    #[test]
    fn unparsable_date_is_left_unformatted() {
        let bill = Bill { id: "x".into(), date: "bientôt".into(), status: BillStatus::Refused, ..Default::default() };
        let row = format_bill(bill);
        assert_eq!(row.date_label, "bientôt");
        assert_eq!(row.status_label, "Refused");
    }

    #[test]
    fn sorts_newest_first_on_raw_dates() {
        let mut rows: Vec<BillRow> = ["2001-01-01", "2004-04-04", "2002-02-02"]
            .into_iter()
            .map(|d| format_bill(Bill { date: d.into(), ..Default::default() }))
            .collect();
        sort_anti_chrono(&mut rows);
        let dates: Vec<_> = rows.iter().map(|r| r.bill.date.as_str()).collect();
        assert_eq!(dates, ["2004-04-04", "2002-02-02", "2001-01-01"]);
    }
}
