use serde_json::Value;

use crate::client::LexofficeClient;
use crate::domain::{ApiResult, QueryFilters};
use crate::resources::{Resource, ResourceManager};

#[derive(Clone)]
/// `countries` endpoint: country codes with their tax classification.
pub struct Countries {
    inner: ResourceManager,
}

impl Countries {
    pub fn new(client: LexofficeClient) -> Self {
        Self {
            inner: ResourceManager::new(client, Resource::COUNTRIES),
        }
    }

    pub async fn all(&self) -> ApiResult<Value> {
        self.inner.all(QueryFilters::new()).await
    }
}
