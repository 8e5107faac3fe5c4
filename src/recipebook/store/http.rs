use super::RemoteStore;
use crate::config::RecipeConfig;
use crate::error::Result;
use crate::model::{Record, RecordId, RecordPayload};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// REST-backed store. `base_url` is the collection endpoint; records live at
/// `<base_url>/<id>`.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), None)
    }

    pub fn from_config(config: &RecipeConfig) -> Result<Self> {
        Self::build(
            config.api_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(base_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn record_url(&self, id: &RecordId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn list(&self) -> Result<Vec<Record>> {
        debug!(url = %self.base_url, "GET");
        let records = self
            .client
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(records)
    }

    async fn create(&self, payload: &RecordPayload) -> Result<Record> {
        debug!(url = %self.base_url, "POST");
        let record = self
            .client
            .post(&self.base_url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(record)
    }

    async fn update(&self, id: &RecordId, payload: &RecordPayload) -> Result<Record> {
        let url = self.record_url(id);
        debug!(%url, "PUT");
        let record = self
            .client
            .put(&url)
            .json(payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(record)
    }

    async fn delete(&self, id: &RecordId) -> Result<()> {
        let url = self.record_url(id);
        debug!(%url, "DELETE");
        self.client.delete(&url).send().await?.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base() {
        let store = HttpStore::new("http://localhost:9999/api/").unwrap();
        assert_eq!(store.base_url(), "http://localhost:9999/api");
        assert_eq!(
            store.record_url(&RecordId::new("abc")),
            "http://localhost:9999/api/abc"
        );
    }

    #[test]
    fn from_config_uses_api_url() {
        let config = RecipeConfig {
            api_url: "http://example.test/recipes".into(),
            timeout_secs: Some(5),
        };
        let store = HttpStore::from_config(&config).unwrap();
        assert_eq!(store.base_url(), "http://example.test/recipes");
    }
}
