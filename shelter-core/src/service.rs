use crate::query::CollectionQuery;
use crate::submission::NewReport;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const PET_IMAGES_BUCKET: &str = "pet-images";

#[derive(Clone, Debug, Error)]
pub enum ServiceError {
    #[error("service configuration missing: {0}")]
    Config(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// Endpoint and anon key for the managed data service. Supplied from the
/// environment; how they get there is out of scope.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    url: String,
    anon_key: String,
}

impl ServiceConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub fn select_url(&self, query: &CollectionQuery) -> String {
        format!("{}/rest/v1/{}?{}", self.url, query.collection, query.to_params())
    }

    pub fn insert_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{collection}", self.url)
    }

    pub fn upload_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/{bucket}/{path}", self.url)
    }

    pub fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{path}", self.url)
    }
}

/// The three primitives this front-end consumes. The wasm bridge is the
/// production implementation; tests substitute an in-memory mock.
#[allow(async_fn_in_trait)]
pub trait DataService {
    async fn select<T: DeserializeOwned>(&self, query: CollectionQuery) -> Result<Vec<T>, ServiceError>;

    async fn insert_report(&self, report: &NewReport) -> Result<(), ServiceError>;

    /// Uploads the bytes under `path` in the pet-images bucket and returns
    /// the public URL for the stored object.
    async fn upload(&self, path: &str, content_type: &str, bytes: &[u8]) -> Result<String, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_urls_join_without_double_slashes() {
        let config = ServiceConfig::new("https://demo.example.co/", "anon-key");
        assert_eq!(
            config.select_url(&CollectionQuery::pets()),
            "https://demo.example.co/rest/v1/pets?select=*&status=eq.available&order=created_at.desc"
        );
        assert_eq!(config.insert_url("reports"), "https://demo.example.co/rest/v1/reports");
        assert_eq!(
            config.upload_url(PET_IMAGES_BUCKET, "reports/abc.png"),
            "https://demo.example.co/storage/v1/object/pet-images/reports/abc.png"
        );
        assert_eq!(
            config.public_url(PET_IMAGES_BUCKET, "reports/abc.png"),
            "https://demo.example.co/storage/v1/object/public/pet-images/reports/abc.png"
        );
    }
}
