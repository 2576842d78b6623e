use crate::domain::model::{ProductPayload, UserPayload};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn users_endpoint(&self) -> &str;
    fn products_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

/// Source of the two records a check needs. Implementations surface
/// NotFound/Network/Parse errors; field validation happens downstream.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_user(&self, id: i64) -> Result<UserPayload>;
    async fn fetch_product(&self, id: i64) -> Result<ProductPayload>;
}
