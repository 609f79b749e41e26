//! Page routes and the explicit `render_route(route, state)` step.
use std::rc::Rc;
use leptos::*;
use crate::containers::bills::ReceiptModal;
use crate::models::{BillRow, Credentials, NewBillForm};
use crate::views::{BillsUI, ErrorPage, LoadingPage, LoginUI, NewBillUI};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Login, Route::Bills, Route::NewBill];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }

    /// Unknown paths land on the login page.
    pub fn from_path(path: &str) -> Self {
        Self::ALL.into_iter().find(|r| r.path() == path.trim()).unwrap_or(Route::Login)
    }
}

/// Passed to containers so they can move to another page.
pub type OnNavigate = Rc<dyn Fn(Route)>;

/// What the store returned for the current page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PageState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<BillRow>),
    Failed(String),
}

/// Event hooks and reactive bits the pages need. All optional so pages render standalone.
#[derive(Clone, Default)]
pub struct PageHandlers {
    pub on_new_bill: Option<Callback<()>>,
    pub on_icon_eye: Option<Callback<String>>,
    pub on_file_change: Option<Callback<ev::Event>>,
    pub on_submit_bill: Option<Callback<NewBillForm>>,
    pub on_login: Option<Callback<Credentials>>,
    pub on_logout: Option<Callback<()>>,
    pub on_close_modal: Option<Callback<()>>,
    pub modal: MaybeSignal<Option<ReceiptModal>>,
    pub file_error: MaybeSignal<Option<String>>,
}

pub fn render_route(route: Route, state: PageState, handlers: PageHandlers) -> View {
    let PageHandlers { on_new_bill, on_icon_eye, on_file_change, on_submit_bill, on_login, on_logout, on_close_modal, modal, file_error } = handlers;
    match (route, state) {
        (Route::Login, _) => view! { <LoginUI on_login=on_login/> }.into_view(),
        (_, PageState::Loading) => view! { <LoadingPage active=Some(route) on_logout=on_logout/> }.into_view(),
        (_, PageState::Failed(message)) => view! { <ErrorPage message=message active=Some(route) on_logout=on_logout/> }.into_view(),
        (Route::Bills, PageState::Loaded(rows)) => view! {
            <BillsUI rows=rows on_new_bill=on_new_bill on_icon_eye=on_icon_eye on_logout=on_logout on_close_modal=on_close_modal modal=modal/>
        }.into_view(),
        (Route::Bills, PageState::Idle) => view! {
            <BillsUI rows=Vec::new() on_new_bill=on_new_bill on_icon_eye=on_icon_eye on_logout=on_logout on_close_modal=on_close_modal modal=modal/>
        }.into_view(),
        (Route::NewBill, _) => view! {
            <NewBillUI on_file_change=on_file_change on_submit=on_submit_bill on_logout=on_logout file_error=file_error/>
        }.into_view(),
    }
}
