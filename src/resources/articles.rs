use serde::Serialize;
use serde_json::Value;

use crate::client::LexofficeClient;
use crate::domain::{ApiResult, ArticleFilters, ResourceId};
use crate::resources::{Resource, ResourceManager};

#[derive(Clone)]
/// `articles` endpoint: products and services.
pub struct Articles {
    inner: ResourceManager,
}

impl Articles {
    pub fn new(client: LexofficeClient) -> Self {
        Self {
            inner: ResourceManager::new(client, Resource::ARTICLES),
        }
    }

    pub async fn create<B>(&self, data: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.inner.create(data, false).await
    }

    pub async fn update<B>(&self, id: &ResourceId, data: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.inner.update(id, data).await
    }

    pub async fn find(&self, id: &ResourceId) -> ApiResult<Value> {
        self.inner.find(id).await
    }

    pub async fn all(&self, filters: ArticleFilters) -> ApiResult<Value> {
        self.inner.all(filters).await
    }

    pub async fn delete(&self, id: &ResourceId) -> ApiResult<Value> {
        self.inner.delete(id).await
    }
}
