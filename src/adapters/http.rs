use crate::core::validator::json_kind;
use crate::domain::model::{ProductPayload, UserPayload};
use crate::domain::ports::{ConfigProvider, RecordSource};
use crate::utils::error::{IntegrationError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_PRODUCTS_ENDPOINT: &str = "https://fakestoreapi.com/products";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;

/// Fetches users and products over HTTP with a single GET each, no retries.
pub struct HttpRecordSource {
    client: Client,
    users_endpoint: String,
    products_endpoint: String,
}

impl HttpRecordSource {
    pub fn new(config: &impl ConfigProvider) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()
            .map_err(|source| IntegrationError::ClientSetup { source })?;

        Ok(Self {
            client,
            users_endpoint: config.users_endpoint().trim_end_matches('/').to_string(),
            products_endpoint: config.products_endpoint().trim_end_matches('/').to_string(),
        })
    }

    async fn get_record<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        resource: &'static str,
        id: i64,
    ) -> Result<T> {
        let url = format!("{}/{}", endpoint, id);
        tracing::debug!("Fetching {} {} from {}", resource, id, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| IntegrationError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        tracing::debug!("{} response status: {}", resource, status);

        if status == StatusCode::NOT_FOUND {
            return Err(IntegrationError::NotFound { resource, id });
        }
        if !status.is_success() {
            return Err(IntegrationError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| IntegrationError::Network {
                url: url.clone(),
                source,
            })?;

        decode_record(&body, resource, id)
    }
}

/// Decodes a single-record body. Empty, `null` and `{}` bodies mean the
/// service has no such record; anything but a JSON object is a parse error.
/// Field types are left to the validator.
pub(crate) fn decode_record<T: DeserializeOwned>(
    body: &str,
    resource: &'static str,
    id: i64,
) -> Result<T> {
    let value: serde_json::Value = if body.trim().is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(body).map_err(|e| IntegrationError::Parse {
            resource,
            message: e.to_string(),
        })?
    };

    match &value {
        serde_json::Value::Null => return Err(IntegrationError::NotFound { resource, id }),
        serde_json::Value::Object(map) if map.is_empty() => {
            return Err(IntegrationError::NotFound { resource, id })
        }
        serde_json::Value::Object(_) => {}
        other => {
            return Err(IntegrationError::Parse {
                resource,
                message: format!("expected a JSON object, got {}", json_kind(other)),
            })
        }
    }

    serde_json::from_value(value).map_err(|e| IntegrationError::Parse {
        resource,
        message: e.to_string(),
    })
}

#[async_trait::async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_user(&self, id: i64) -> Result<UserPayload> {
        self.get_record(&self.users_endpoint, "user", id).await
    }

    async fn fetch_product(&self, id: i64) -> Result<ProductPayload> {
        self.get_record(&self.products_endpoint, "product", id).await
    }
}
