use leptos::*;
use crate::routes::Route;

fn icon_class(active: Option<Route>, route: Route) -> &'static str {
    if active == Some(route) { "layout-icon active-icon" } else { "layout-icon" }
}

/// Sidebar with one icon per employee page; the current one gets `active-icon`.
#[component]
pub fn VerticalLayout(
    active: Option<Route>,
    on_logout: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="vertical-navbar">
            <div class="layout-title">"Billed"</div>
            <div id="layout-icon1" class=icon_class(active, Route::Bills) data-testid="icon-window">"▤"</div>
            <div id="layout-icon2" class=icon_class(active, Route::NewBill) data-testid="icon-mail">"✉"</div>
            <div id="layout-disconnect" data-testid="layout-disconnect" on:click=move |_| {
                if let Some(cb) = on_logout { cb.call(()) }
            }>"⏻"</div>
        </div>
    }
}
