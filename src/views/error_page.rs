use leptos::*;
use crate::routes::Route;
use crate::store::ErrorKind;
use super::VerticalLayout;

/// Shows a store failure verbatim, under a heading chosen from its status.
#[component]
pub fn ErrorPage(
    #[prop(into)] message: String,
    active: Option<Route>,
    on_logout: Option<Callback<()>>,
) -> impl IntoView {
    let title = ErrorKind::from_message(&message).title();
    view! {
        <div class="layout">
            <VerticalLayout active=active on_logout=on_logout/>
            <div class="content">
                <div class="content-header">
                    <div class="content-title">{title}</div>
                </div>
                <div data-testid="error-message">{message}</div>
            </div>
        </div>
    }
}
