//! Access to the bills backend.
use async_trait::async_trait;
use thiserror::Error;
use crate::models::{Bill, Credentials, SelectedFile, StoredFile};

pub mod fixtures;
pub mod mock;
pub mod rest;

pub use mock::MockStore;
pub use rest::RestStore;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backend answered with a non-success status.
    #[error("Erreur {status}")]
    Http { status: u16 },
    #[error("Erreur réseau : {message}")]
    Network { message: String },
    #[error("Réponse illisible : {message}")]
    Decode { message: String },
    #[error("Stockage local indisponible : {message}")]
    Storage { message: String },
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_message(&self.to_string())
    }
}

/// The failures the error page tells apart, recognised from the message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ServerError,
    Other,
}

impl ErrorKind {
    pub fn from_message(message: &str) -> Self {
        if message.contains("404") {
            Self::NotFound
        } else if message.contains("500") {
            Self::ServerError
        } else {
            Self::Other
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::NotFound => "Page introuvable",
            Self::ServerError => "Erreur du serveur",
            Self::Other => "Erreur",
        }
    }
}

/// The bills collection. Futures are `!Send`: the app runs on the browser's single thread.
#[async_trait(?Send)]
pub trait Store {
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;
    async fn create(&self, bill: &Bill) -> Result<Bill, StoreError>;
    async fn upload(&self, file: &SelectedFile, email: Option<&str>) -> Result<StoredFile, StoreError>;
    /// Returns the session token.
    async fn login(&self, credentials: &Credentials) -> Result<String, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_carry_their_status() {
        assert_eq!(StoreError::Http { status: 404 }.to_string(), "Erreur 404");
        assert_eq!(StoreError::Http { status: 404 }.kind(), ErrorKind::NotFound);
        assert_eq!(StoreError::Http { status: 500 }.kind(), ErrorKind::ServerError);
        assert_eq!(StoreError::Http { status: 403 }.kind(), ErrorKind::Other);
    }

    #[test]
    fn kind_matches_substrings() {
        assert_eq!(ErrorKind::from_message("Error: Erreur 404"), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_message("Erreur 500"), ErrorKind::ServerError);
        assert_eq!(ErrorKind::from_message("boom"), ErrorKind::Other);
    }
}
