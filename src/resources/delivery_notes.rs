use serde::Serialize;
use serde_json::Value;

use crate::client::LexofficeClient;
use crate::domain::{ApiResult, DeeplinkKind, ResourceId, ValidationError};
use crate::resources::{Resource, ResourceManager};

#[derive(Clone)]
/// `delivery-notes` endpoint. Delivery notes are drafts unless finalized.
pub struct DeliveryNotes {
    inner: ResourceManager,
}

impl DeliveryNotes {
    pub fn new(client: LexofficeClient) -> Self {
        Self {
            inner: ResourceManager::new(client, Resource::DELIVERY_NOTES),
        }
    }

    /// `POST delivery-notes[?finalize=true]`.
    pub async fn create<B>(&self, data: &B, finalize: bool) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.inner.create(data, finalize).await
    }

    /// Create a delivery note following a preceding sales voucher (e.g. an order confirmation).
    pub async fn pursue_to_delivery_note<B>(
        &self,
        data: &B,
        preceding_sales_voucher_id: &ResourceId,
        finalize: bool,
    ) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.inner
            .pursue(data, preceding_sales_voucher_id, finalize)
            .await
    }

    pub async fn find(&self, id: &ResourceId) -> ApiResult<Value> {
        self.inner.find(id).await
    }

    pub async fn render_document(&self, id: &ResourceId) -> ApiResult<Value> {
        self.inner.render_document(id).await
    }

    pub fn deeplink(&self, id: &ResourceId, kind: DeeplinkKind) -> String {
        self.inner.deeplink(id, kind)
    }

    pub fn generate_deeplink(&self, id: &ResourceId, kind: &str) -> Result<String, ValidationError> {
        self.inner.generate_deeplink(id, kind)
    }
}
