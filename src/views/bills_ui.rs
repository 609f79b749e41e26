use leptos::*;
use crate::containers::bills::ReceiptModal;
use crate::format::sort_anti_chrono;
use crate::models::BillRow;
use crate::routes::Route;
use super::VerticalLayout;

#[component]
fn BillLine(row: BillRow, on_icon_eye: Option<Callback<String>>) -> impl IntoView {
    let url = row.bill.file_url.clone().unwrap_or_default();
    let click_url = url.clone();
    view! {
        <tr>
            <td>{row.bill.expense_type}</td>
            <td>{row.bill.name}</td>
            <td>{row.date_label}</td>
            <td>{format!("{} €", row.bill.amount)}</td>
            <td>{row.status_label}</td>
            <td>
                <div class="icon-actions">
                    <div id="eye" data-testid="icon-eye" data-bill-url=url on:click=move |_| {
                        if let Some(cb) = on_icon_eye { cb.call(click_url.clone()) }
                    }>"👁"</div>
                </div>
            </td>
        </tr>
    }
}

/// The employee's bills, newest first, with the receipt modal.
#[component]
pub fn BillsUI(
    rows: Vec<BillRow>,
    on_new_bill: Option<Callback<()>>,
    on_icon_eye: Option<Callback<String>>,
    on_logout: Option<Callback<()>>,
    on_close_modal: Option<Callback<()>>,
    #[prop(optional, into)] modal: MaybeSignal<Option<ReceiptModal>>,
) -> impl IntoView {
    let mut rows = rows;
    sort_anti_chrono(&mut rows);
    let modal_body = modal.clone();

    view! {
        <div class="layout">
            <VerticalLayout active=Some(Route::Bills) on_logout=on_logout/>
            <div class="content">
                <div class="content-header">
                    <div class="content-title">"Mes notes de frais"</div>
                    <button type="button" data-testid="btn-new-bill" class="btn btn-primary" on:click=move |_| {
                        if let Some(cb) = on_new_bill { cb.call(()) }
                    }>"Nouvelle note de frais"</button>
                </div>
                <div id="data-table">
                    <table id="example" class="table table-striped">
                        <thead>
                            <tr>
                                <th>"Type"</th>
                                <th>"Nom"</th>
                                <th>"Date"</th>
                                <th>"Montant"</th>
                                <th>"Statut"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody data-testid="tbody">
                            {rows.into_iter().map(|row| view! { <BillLine row=row on_icon_eye=on_icon_eye/> }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
            <div class=move || if modal.get().is_some() { "modal fade show" } else { "modal fade" } id="modaleFile" data-testid="modaleFile" role="dialog">
                <div class="modal-dialog modal-dialog-centered modal-lg" role="document">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Justificatif"</h5>
                            <button type="button" class="close" data-testid="modal-close" aria-label="Close" on:click=move |_| {
                                if let Some(cb) = on_close_modal { cb.call(()) }
                            }>"×"</button>
                        </div>
                        <div class="modal-body">
                            {move || modal_body.get().map(|m| view! {
                                <div style="text-align: center;" class="bill-proof-container">
                                    <img width=m.image_width.to_string() src=m.url alt="Bill"/>
                                </div>
                            })}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use crate::store::fixtures;
    use crate::views::render_html;

    fn raw_rows() -> Vec<BillRow> {
        fixtures::bills().into_iter().map(BillRow::raw).collect()
    }

    #[test]
    fn bills_are_ordered_from_latest_to_earliest() {
        let html = render_html(|| view! { <BillsUI rows=raw_rows() on_new_bill=None on_icon_eye=None on_logout=None on_close_modal=None/> });
        let re = Regex::new(r"(19|20)\d\d-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01])").unwrap();
        let dates: Vec<&str> = re.find_iter(&html).map(|m| m.as_str()).collect();
        assert_eq!(dates.len(), 4);
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn every_bill_has_an_eye_icon_with_its_receipt() {
        let html = render_html(|| view! { <BillsUI rows=raw_rows() on_new_bill=None on_icon_eye=None on_logout=None on_close_modal=None/> });
        assert_eq!(html.matches(r#"data-testid="icon-eye""#).count(), 4);
        assert!(html.contains("https://localhost:3456/images/BeKy5Mo4jkmdfPGYpTxZ.jpg"));
        assert!(html.contains("btn-new-bill"));
    }

    #[test]
    fn open_modal_shows_the_receipt() {
        let modal = ReceiptModal { url: "https://localhost:3456/images/test.jpg".into(), image_width: 250 };
        let html = render_html(move || view! {
            <BillsUI rows=Vec::new() on_new_bill=None on_icon_eye=None on_logout=None on_close_modal=None modal=Some(modal)/>
        });
        assert!(html.contains("modal fade show"));
        assert!(html.contains(r#"src="https://localhost:3456/images/test.jpg""#));
        assert!(html.contains(r#"data-testid="modal-close""#));
    }

    #[test]
    fn closed_modal_has_no_image() {
        let html = render_html(|| view! { <BillsUI rows=Vec::new() on_new_bill=None on_icon_eye=None on_logout=None on_close_modal=None/> });
        assert!(!html.contains("modal fade show"));
        assert!(!html.contains("<img"));
    }
}
