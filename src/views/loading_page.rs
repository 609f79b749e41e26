use leptos::*;
use crate::routes::Route;
use super::VerticalLayout;

#[component]
pub fn LoadingPage(
    active: Option<Route>,
    on_logout: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="layout">
            <VerticalLayout active=active on_logout=on_logout/>
            <div class="content" id="loading">"Loading..."</div>
        </div>
    }
}
