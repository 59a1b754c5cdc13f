use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Client for the path-addressed JSON document store. A collection
/// lives at `{base}/{path}.json` and reads back as a single JSON value.
#[derive(Clone)]
pub struct DocumentStore {
    http: Client,
    base_url: String,
    auth_token: Option<SecretString>,
}

impl DocumentStore {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|err| AppError::InternalError(format!("HTTP client: {}", err)))?;

        Ok(Self {
            http,
            base_url: config.store_base_url.trim_end_matches('/').to_string(),
            auth_token: config.store_auth_token.clone(),
        })
    }

    fn document_url(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path.trim_matches('/'))
    }

    /// Reads the document at `path`. A stored `null` (the subtree was
    /// never written) comes back as `None`.
    pub async fn get_document(&self, path: &str) -> AppResult<Option<Value>> {
        let mut request = self.http.get(self.document_url(path));
        if let Some(token) = &self.auth_token {
            request = request.query(&[("auth", token.expose_secret())]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(AppError::FetchFailed(format!(
                "GET '{}' returned {}",
                path,
                response.status()
            )));
        }

        let value: Value = response.json().await?;
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }

    pub async fn health_check(&self) -> AppResult<()> {
        let response = self
            .http
            .get(format!("{}/.json", self.base_url))
            .query(&[("shallow", "true")])
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppError::FetchFailed(format!(
                "store root returned {}",
                response.status()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url_joins_path() {
        let store = DocumentStore::new(&Config::test_config()).expect("client should build");

        assert_eq!(
            store.document_url("quizes"),
            "http://localhost:9000/quizes.json"
        );
        assert_eq!(
            store.document_url("/users/"),
            "http://localhost:9000/users.json"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let mut config = Config::test_config();
        config.store_base_url = "http://localhost:9000/".to_string();

        let store = DocumentStore::new(&config).expect("client should build");
        assert_eq!(
            store.document_url("users"),
            "http://localhost:9000/users.json"
        );
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DocumentStore>();
    }
}
