//! Build-time configuration. A WASM bundle has no process environment, so the
//! API location is baked in with `BILLED_API_URL`.

pub const DEFAULT_API_URL: &str = "http://localhost:5678/";
pub const DEFAULT_MODAL_WIDTH: u32 = 500;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Width of the receipt modal; the receipt image takes half of it.
    pub receipt_modal_width: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_URL.to_string(), receipt_modal_width: DEFAULT_MODAL_WIDTH }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_api_url(option_env!("BILLED_API_URL"))
    }

    fn with_api_url(url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = if url.ends_with('/') { url.to_string() } else { format!("{}/", url) };
        }
        config
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
