use std::rc::Rc;
use leptos::*;
use crate::browser;
use crate::config::AppConfig;
use crate::containers::{logout, Bills, Login, NewBill, ReceiptModal};
use crate::models::{Credentials, NewBillForm};
use crate::routes::{render_route, OnNavigate, PageHandlers, PageState, Route};
use crate::storage::{current_user, default_storage, LocalStorage};
use crate::store::{RestStore, Store};

/// Page to open on startup: nobody logged in means the login page.
pub fn initial_route(storage: &dyn LocalStorage, requested: Route) -> Route {
    match (current_user(storage), requested) {
        (None, _) => Route::Login,
        (Some(_), Route::Login) => Route::Bills,
        (Some(_), route) => route,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let storage = default_storage();
    let store: Rc<dyn Store> = Rc::new(RestStore::new(config.clone(), storage.clone()));

    let route = create_rw_signal(initial_route(storage.as_ref(), browser::current_route()));
    let page = create_rw_signal(PageState::Idle);
    let modal = create_rw_signal(None::<ReceiptModal>);
    let file_error = create_rw_signal(None::<String>);

    let on_navigate: OnNavigate = Rc::new(move |next: Route| {
        browser::show_route(next);
        route.set(next);
    });

    let bills = Rc::new(Bills::new(on_navigate.clone(), Some(store.clone()), storage.clone(), config.receipt_modal_width));
    let new_bill = Rc::new(NewBill::new(on_navigate.clone(), Some(store.clone()), storage.clone()));
    let login = Rc::new(Login::new(on_navigate.clone(), Some(store), storage.clone()));

    // Entering the Bills page fetches the list, then renders whatever came back.
    let loader = bills.clone();
    create_effect(move |_| {
        let current = route.get();
        modal.set(None);
        file_error.set(None);
        if current != Route::Bills {
            page.set(PageState::Idle);
            return;
        }
        page.set(PageState::Loading);
        let loader = loader.clone();
        spawn_local(async move {
            let state = match loader.get_bills().await {
                Ok(rows) => PageState::Loaded(rows),
                Err(e) => {
                    tracing::error!("could not load bills: {}", e);
                    PageState::Failed(e.to_string())
                }
            };
            if route.get_untracked() == Route::Bills {
                page.set(state);
            }
        });
    });

    let on_new_bill = {
        let bills = bills.clone();
        Callback::new(move |_: ()| bills.handle_click_new_bill())
    };
    let on_icon_eye = Callback::new(move |url: String| modal.set(Some(bills.handle_click_icon_eye(&url))));
    let on_close_modal = Callback::new(move |_: ()| modal.set(None));
    let on_file_change = {
        let new_bill = new_bill.clone();
        Callback::new(move |ev: ev::Event| {
            let new_bill = new_bill.clone();
            spawn_local(async move {
                let Some(file) = browser::selected_file(&ev).await else {
                    return;
                };
                match new_bill.handle_change_file(file).await {
                    Ok(_) => file_error.set(None),
                    Err(e) => {
                        browser::clear_file_input(&ev);
                        file_error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };
    let on_submit_bill = Callback::new(move |form: NewBillForm| {
        let new_bill = new_bill.clone();
        spawn_local(async move {
            if let Err(e) = new_bill.handle_submit(form).await {
                tracing::error!("could not send bill: {}", e);
            }
        });
    });
    let on_login = Callback::new(move |credentials: Credentials| {
        let login = login.clone();
        spawn_local(async move {
            if let Err(e) = login.handle_submit_employee(credentials).await {
                tracing::error!("login failed: {}", e);
            }
        });
    });
    let on_logout = Callback::new(move |_: ()| {
        if let Err(e) = logout(storage.as_ref(), &on_navigate) {
            tracing::error!("logout failed: {}", e);
        }
    });

    let handlers = PageHandlers {
        on_new_bill: Some(on_new_bill),
        on_icon_eye: Some(on_icon_eye),
        on_file_change: Some(on_file_change),
        on_submit_bill: Some(on_submit_bill),
        on_login: Some(on_login),
        on_logout: Some(on_logout),
        on_close_modal: Some(on_close_modal),
        modal: MaybeSignal::Dynamic(modal.into()),
        file_error: MaybeSignal::Dynamic(file_error.into()),
    };

    view! {
        <div id="root">
            {move || render_route(route.get(), page.get(), handlers.clone())}
        </div>
    }
}
