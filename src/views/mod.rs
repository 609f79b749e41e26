//! Page templates. Views only render what they are given; the containers do the work.

mod bills_ui;
mod error_page;
mod loading_page;
mod login_ui;
mod new_bill_ui;
mod vertical_layout;

pub use bills_ui::BillsUI;
pub use error_page::ErrorPage;
pub use loading_page::LoadingPage;
pub use login_ui::LoginUI;
pub use new_bill_ui::NewBillUI;
pub use vertical_layout::VerticalLayout;

#[cfg(test)]
pub(crate) fn render_html<F, N>(f: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: leptos::IntoView,
{
    leptos::ssr::render_to_string(f).to_string()
}
