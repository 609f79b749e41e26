//! Browser-only glue: location hash and the file input. Natively these are inert.
#[cfg(not(target_arch = "wasm32"))]
use crate::{models::SelectedFile, routes::Route};

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlInputElement;
    use crate::models::SelectedFile;
    use crate::routes::Route;

    pub fn current_route() -> Route {
        let hash = web_sys::window().and_then(|w| w.location().hash().ok()).unwrap_or_default();
        Route::from_path(&hash)
    }

    pub fn show_route(route: Route) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_hash(route.path()) {
                tracing::warn!("could not update location: {:?}", e);
            }
        }
    }

    fn file_input(ev: &web_sys::Event) -> Option<HtmlInputElement> {
        ev.target()?.dyn_into::<HtmlInputElement>().ok()
    }

    pub async fn selected_file(ev: &web_sys::Event) -> Option<SelectedFile> {
        let file = file_input(ev)?.files()?.get(0)?;
        let buffer = match JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => buffer,
            Err(e) => {
                tracing::warn!("could not read {}: {:?}", file.name(), e);
                return None;
            }
        };
        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
        Some(SelectedFile::new(file.name(), file.type_(), bytes))
    }

    pub fn clear_file_input(ev: &web_sys::Event) {
        if let Some(input) = file_input(ev) {
            input.set_value("");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{clear_file_input, current_route, selected_file, show_route};

#[cfg(not(target_arch = "wasm32"))]
pub fn current_route() -> Route {
    Route::Login
}

#[cfg(not(target_arch = "wasm32"))]
pub fn show_route(route: Route) {
    tracing::debug!(path = route.path(), "navigated");
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn selected_file(_ev: &web_sys::Event) -> Option<SelectedFile> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clear_file_input(_ev: &web_sys::Event) {}
