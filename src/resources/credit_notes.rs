use serde::Serialize;
use serde_json::Value;

use crate::client::LexofficeClient;
use crate::domain::{ApiResult, DeeplinkKind, ResourceId, ValidationError};
use crate::resources::{Resource, ResourceManager};

#[derive(Clone)]
/// `credit-notes` endpoint.
///
/// Credit notes are created as drafts unless `finalize` is set.
pub struct CreditNotes {
    inner: ResourceManager,
}

impl CreditNotes {
    pub fn new(client: LexofficeClient) -> Self {
        Self {
            inner: ResourceManager::new(client, Resource::CREDIT_NOTES),
        }
    }

    /// `POST credit-notes[?finalize=true]`.
    pub async fn create<B>(&self, data: &B, finalize: bool) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        self.inner.create(data, finalize).await
    }

    /// Create a credit note referring to an existing sales voucher (e.g. an invoice).
    ///
    /// `POST credit-notes?precedingSalesVoucherId={id}[&finalize=true]`.
    pub async fn pursue_to_credit_note<B>(
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

    /// Trigger PDF rendering. The returned `documentFileId` can be fetched with
    /// [`crate::Files::download`].
    pub async fn render_document(&self, id: &ResourceId) -> ApiResult<Value> {
        self.inner.render_document(id).await
    }

    pub fn deeplink(&self, id: &ResourceId, kind: DeeplinkKind) -> String {
        self.inner.deeplink(id, kind)
    }

    /// Deeplink for `kind` `"view"` or `"edit"`; other values are rejected.
    pub fn generate_deeplink(&self, id: &ResourceId, kind: &str) -> Result<String, ValidationError> {
        self.inner.generate_deeplink(id, kind)
    }
}
