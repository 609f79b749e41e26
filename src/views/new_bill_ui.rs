use leptos::*;
use crate::models::{NewBillForm, DEFAULT_PCT, EXPENSE_TYPES};
use crate::routes::Route;
use super::VerticalLayout;

/// The new bill form. Field values live in a local signal until submit.
#[component]
pub fn NewBillUI(
    on_file_change: Option<Callback<ev::Event>>,
    on_submit: Option<Callback<NewBillForm>>,
    on_logout: Option<Callback<()>>,
    #[prop(optional, into)] file_error: MaybeSignal<Option<String>>,
) -> impl IntoView {
    let form = create_rw_signal(NewBillForm { expense_type: EXPENSE_TYPES[0].to_string(), ..Default::default() });

    view! {
        <div class="layout">
            <VerticalLayout active=Some(Route::NewBill) on_logout=on_logout/>
            <div class="content">
                <div class="content-header">
                    <div class="content-title">"Envoyer une note de frais"</div>
                </div>
                <div class="form-newbill-container content-inner">
                    <form data-testid="form-new-bill" on:submit=move |ev: ev::SubmitEvent| {
                        ev.prevent_default();
                        if let Some(cb) = on_submit { cb.call(form.get_untracked()) }
                    }>
                        <div class="row">
                            <div class="col-md-6">
                                <div class="col-half">
                                    <label for="expense-type" class="bold-label">"Type de dépense"</label>
                                    <select required=true class="form-control blue-border" data-testid="expense-type" on:change=move |ev| {
                                        form.update(|f| f.expense_type = event_target_value(&ev))
                                    }>
                                        {EXPENSE_TYPES.iter().map(|t| view! { <option>{*t}</option> }).collect_view()}
                                    </select>
                                </div>
                                <div class="col-half">
                                    <label for="expense-name" class="bold-label">"Nom de la dépense"</label>
                                    <input type="text" class="form-control blue-border" data-testid="expense-name" placeholder="Vol Paris Londres"
                                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))/>
                                </div>
                                <div class="col-half">
                                    <label for="datepicker" class="bold-label">"Date"</label>
                                    <input required=true type="date" class="form-control blue-border" data-testid="datepicker"
                                        on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))/>
                                </div>
                                <div class="col-half">
                                    <label for="amount" class="bold-label">"Montant TTC "</label>
                                    <input required=true type="number" class="form-control blue-border input-icon input-icon-right" data-testid="amount" placeholder="348"
                                        on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))/>
                                </div>
                                <div class="col-half-row">
                                    <div class="flex-col">
                                        <label for="vat" class="bold-label">"TVA"</label>
                                        <input type="number" class="form-control blue-border" data-testid="vat" placeholder="70"
                                            on:input=move |ev| form.update(|f| f.vat = event_target_value(&ev))/>
                                    </div>
                                    <div class="flex-col">
                                        <input required=true type="number" class="form-control blue-border" data-testid="pct" placeholder=DEFAULT_PCT.to_string()
                                            on:input=move |ev| form.update(|f| f.pct = event_target_value(&ev))/>
                                    </div>
                                </div>
                            </div>
                            <div class="col-md-6">
                                <div class="col-half">
                                    <label for="commentary" class="bold-label">"Commentaire"</label>
                                    <textarea class="form-control blue-border" data-testid="commentary" rows="3"
                                        on:input=move |ev| form.update(|f| f.commentary = event_target_value(&ev))></textarea>
                                </div>
                                <div class="col-half">
                                    <label for="file" class="bold-label">"Justificatif"</label>
                                    <input required=true type="file" accept=".jpg,.jpeg,.png" class="form-control blue-border" data-testid="file" on:change=move |ev| {
                                        if let Some(cb) = on_file_change { cb.call(ev) }
                                    }/>
                                    {move || file_error.get().map(|message| view! {
                                        <p class="file-error" data-testid="file-error">{message}</p>
                                    })}
                                </div>
                            </div>
                        </div>
                        <div class="row">
                            <div class="col-md-6">
                                <div class="col-half">
                                    <button type="submit" id="btn-send-bill" class="btn btn-primary">"Envoyer"</button>
                                </div>
                            </div>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
