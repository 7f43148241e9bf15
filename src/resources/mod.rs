//! Resource managers: per-resource request shaping on top of
//! [`LexofficeClient::execute`].
//!
//! All managers share [`ResourceManager`]; the typed façades only choose the
//! [`Resource`] and expose the verbs lexoffice supports for it.

mod articles;
mod contacts;
mod countries;
mod credit_notes;
mod delivery_notes;
mod files;

use serde::Serialize;
use serde_json::Value;

use crate::client::LexofficeClient;
use crate::domain::{
    ApiResult, DeeplinkKind, Method, NO_RESPONSE_STATUS, QueryFilters, Request, ResourceId,
    ValidationError,
};

pub use articles::Articles;
pub use contacts::Contacts;
pub use countries::Countries;
pub use credit_notes::CreditNotes;
pub use delivery_notes::DeliveryNotes;
pub use files::Files;

const FINALIZE: &str = "finalize";
const PRECEDING_SALES_VOUCHER_ID: &str = "precedingSalesVoucherId";
const DOCUMENT: &str = "document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A lexoffice resource family: its path segment and whether it knows drafts.
pub struct Resource {
    segment: &'static str,
    supports_finalize: bool,
}

impl Resource {
    pub const CONTACTS: Self = Self::new("contacts", false);
    pub const CREDIT_NOTES: Self = Self::new("credit-notes", true);
    pub const DELIVERY_NOTES: Self = Self::new("delivery-notes", true);
    pub const ARTICLES: Self = Self::new("articles", false);
    pub const COUNTRIES: Self = Self::new("countries", false);
    pub const FILES: Self = Self::new("files", false);

    /// Describe a resource not covered by the typed managers.
    pub const fn new(segment: &'static str, supports_finalize: bool) -> Self {
        Self {
            segment,
            supports_finalize,
        }
    }

    pub const fn segment(self) -> &'static str {
        self.segment
    }

    /// Whether `create` may be sent with `?finalize=true`.
    pub const fn supports_finalize(self) -> bool {
        self.supports_finalize
    }
}

#[derive(Clone)]
/// Request builder shared by all resources. Each method shapes one request and
/// hands it to the client; none of them retries or inspects payloads.
pub struct ResourceManager {
    client: LexofficeClient,
    resource: Resource,
}

impl ResourceManager {
    pub fn new(client: LexofficeClient, resource: Resource) -> Self {
        Self { client, resource }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// `POST {segment}`, with `?finalize=true` when requested and supported.
    pub async fn create<B>(&self, data: &B, finalize: bool) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .request(Method::Post)
            .query(self.finalize_query(finalize));
        self.send_json(request, data).await
    }

    /// `PUT {segment}/{id}`.
    pub async fn update<B>(&self, id: &ResourceId, data: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::Put).segment(id.as_str());
        self.send_json(request, data).await
    }

    /// `GET {segment}/{id}`.
    pub async fn find(&self, id: &ResourceId) -> ApiResult<Value> {
        self.client
            .execute(self.request(Method::Get).segment(id.as_str()))
            .await
    }

    /// `GET {segment}` with the present filters as query string.
    pub async fn all(&self, filters: impl Into<QueryFilters>) -> ApiResult<Value> {
        self.client
            .execute(self.request(Method::Get).query(filters))
            .await
    }

    /// `DELETE {segment}/{id}`.
    pub async fn delete(&self, id: &ResourceId) -> ApiResult<Value> {
        self.client
            .execute(self.request(Method::Delete).segment(id.as_str()))
            .await
    }

    /// `POST {segment}?precedingSalesVoucherId={id}[&finalize=true]`.
    pub async fn pursue<B>(
        &self,
        data: &B,
        preceding_sales_voucher_id: &ResourceId,
        finalize: bool,
    ) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        let query = QueryFilters::new().with(
            PRECEDING_SALES_VOUCHER_ID,
            preceding_sales_voucher_id.as_str(),
        );
        let request = self
            .request(Method::Post)
            .query(query)
            .query(self.finalize_query(finalize));
        self.send_json(request, data).await
    }

    /// `GET {segment}/{id}/document`; the data carries `documentFileId`.
    pub async fn render_document(&self, id: &ResourceId) -> ApiResult<Value> {
        self.client
            .execute(
                self.request(Method::Get)
                    .segment(id.as_str())
                    .segment(DOCUMENT),
            )
            .await
    }

    /// `GET {segment}/{id}` returning the raw body.
    pub async fn download(&self, id: &ResourceId) -> ApiResult<Vec<u8>> {
        self.client
            .execute_bytes(self.request(Method::Get).segment(id.as_str()))
            .await
    }

    /// Permalink into the lexoffice web application. No network call.
    pub fn deeplink(&self, id: &ResourceId, kind: DeeplinkKind) -> String {
        self.client.permalink(self.resource.segment, kind, id)
    }

    /// Like [`ResourceManager::deeplink`], parsing `kind` first.
    ///
    /// Anything but `view` or `edit` is rejected before a URL is built.
    pub fn generate_deeplink(&self, id: &ResourceId, kind: &str) -> Result<String, ValidationError> {
        let kind = kind.parse::<DeeplinkKind>()?;
        Ok(self.deeplink(id, kind))
    }

    fn request(&self, method: Method) -> Request {
        Request::new(method, self.resource.segment)
    }

    fn finalize_query(&self, finalize: bool) -> QueryFilters {
        if finalize && self.resource.supports_finalize {
            QueryFilters::new().with(FINALIZE, true)
        } else {
            QueryFilters::new()
        }
    }

    async fn send_json<B>(&self, request: Request, data: &B) -> ApiResult<Value>
    where
        B: Serialize + ?Sized,
    {
        match request.json(data) {
            Ok(request) => self.client.execute(request).await,
            Err(err) => ApiResult::failure_with(
                NO_RESPONSE_STATUS,
                format!("failed to encode request body: {err}"),
            ),
        }
    }
}
