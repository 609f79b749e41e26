use std::rc::Rc;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use crate::config::AppConfig;
use crate::models::{Bill, Credentials, SelectedFile, StoredFile};
use crate::storage::{LocalStorage, JWT_KEY};
use super::{Store, StoreError};

/// Store backed by the Billed REST API.
pub struct RestStore {
    client: reqwest::Client,
    config: AppConfig,
    storage: Rc<dyn LocalStorage>,
}

#[derive(Deserialize)]
struct LoginResponse {
    jwt: String,
}

impl RestStore {
    pub fn new(config: AppConfig, storage: Rc<dyn LocalStorage>) -> Self {
        Self { client: reqwest::Client::new(), config, storage }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.config.endpoint(path));
        if let Some(jwt) = self.storage.get_item(JWT_KEY).filter(|t| !t.is_empty()) {
            req = req.header("Authorization", format!("Bearer {}", jwt));
        }
        req
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, StoreError> {
        let resp = req.send().await.map_err(|e| StoreError::Network { message: e.to_string() })?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "store call rejected");
            return Err(StoreError::Http { status: status.as_u16() });
        }
        resp.json::<T>().await.map_err(|e| StoreError::Decode { message: e.to_string() })
    }
}

#[async_trait(?Send)]
impl Store for RestStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        tracing::debug!("listing bills");
        self.send(self.request(Method::GET, "bills")).await
    }

    async fn create(&self, bill: &Bill) -> Result<Bill, StoreError> {
        tracing::debug!(name = %bill.name, "creating bill");
        self.send(self.request(Method::POST, "bills").json(bill)).await
    }

    async fn upload(&self, file: &SelectedFile, email: Option<&str>) -> Result<StoredFile, StoreError> {
        tracing::debug!(file = %file.name, "uploading receipt");
        let mime = if file.content_type.is_empty() { "application/octet-stream" } else { file.content_type.as_str() };
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(mime)
            .map_err(|e| StoreError::Network { message: e.to_string() })?;
        let mut form = Form::new().part("file", part);
        if let Some(email) = email {
            form = form.text("email", email.to_string());
        }
        self.send(self.request(Method::POST, "bills/upload").multipart(form)).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<String, StoreError> {
        tracing::debug!(email = %credentials.email, "logging in");
        let resp: LoginResponse = self.send(self.request(Method::POST, "auth/login").json(credentials)).await?;
        Ok(resp.jwt)
    }
}
