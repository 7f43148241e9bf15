//! Client layer: owns the immutable configuration and runs every API call
//! through one execution path that normalizes outcomes into [`ApiResult`].

mod config;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::domain::{
    ApiFailure, ApiResult, DeeplinkKind, Method, Request, ResourceId, ValidationError,
};
use crate::resources::{Articles, Contacts, Countries, CreditNotes, DeliveryNotes, Files};
use crate::transport::{
    HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, decode_error_message,
};

pub use config::{
    API_TOKEN_ENV, BASE_URL_ENV, ClientConfig, DEFAULT_BASE_URL, DEFAULT_PERMALINK_BASE_URL,
    PERMALINK_BASE_URL_ENV,
};

const ACCEPT_JSON: &str = "application/json";
const ACCEPT_ANY: &str = "*/*";

#[derive(Debug, thiserror::Error)]
/// Errors raised while constructing a [`LexofficeClient`].
///
/// API calls never return this type; they report through [`ApiResult`].
pub enum LexofficeError {
    /// The underlying HTTP client could not be created.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// A configured URL is not an absolute `http(s)` URL.
    #[error("invalid {field}: {value:?} ({reason})")]
    InvalidUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A required environment variable is not set.
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Clone)]
/// Builder for [`LexofficeClient`].
///
/// `timeout` and `user_agent` configure the default reqwest transport and are
/// ignored when a custom transport is injected.
pub struct LexofficeClientBuilder {
    config: ClientConfig,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl LexofficeClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport instead of reqwest.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build a [`LexofficeClient`].
    pub fn build(self) -> Result<LexofficeClient, LexofficeError> {
        let base_url = parse_base_url("base URL", self.config.base_url_str())?;
        let permalink_base_url =
            parse_base_url("permalink base URL", self.config.permalink_base_url_str())?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| LexofficeError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(LexofficeClient {
            authorization: self.config.token().bearer(),
            base_url,
            permalink_base_url,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level lexoffice client.
///
/// Every remote operation goes through [`LexofficeClient::execute`] (or
/// [`LexofficeClient::execute_bytes`] for binary downloads): one attempt, no
/// retries, and the outcome always ends up in an [`ApiResult`]. Cloning is
/// cheap and shares the transport.
pub struct LexofficeClient {
    authorization: String,
    base_url: Url,
    permalink_base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl LexofficeClient {
    /// Create a client using the default reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self, LexofficeError> {
        LexofficeClientBuilder::new(config).build()
    }

    /// Create a client from `LEXOFFICE_*` environment variables.
    pub fn from_env() -> Result<Self, LexofficeError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Start building a client with custom settings.
    pub fn builder(config: ClientConfig) -> LexofficeClientBuilder {
        LexofficeClientBuilder::new(config)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn contacts(&self) -> Contacts {
        Contacts::new(self.clone())
    }

    pub fn credit_notes(&self) -> CreditNotes {
        CreditNotes::new(self.clone())
    }

    pub fn delivery_notes(&self) -> DeliveryNotes {
        DeliveryNotes::new(self.clone())
    }

    pub fn articles(&self) -> Articles {
        Articles::new(self.clone())
    }

    pub fn countries(&self) -> Countries {
        Countries::new(self.clone())
    }

    pub fn files(&self) -> Files {
        Files::new(self.clone())
    }

    /// Perform one API call and decode the 2xx body as JSON.
    ///
    /// - 2xx: `Success` with the decoded body (`Value::Null` for an empty body);
    ///   an undecodable body becomes a `Failure` carrying the response status.
    /// - non-2xx: `Failure` with the status and the upstream `message`, or a
    ///   description of the failed call when the body has none.
    /// - no response: `Failure` with the transport code and message.
    pub async fn execute(&self, request: Request) -> ApiResult<Value> {
        self.dispatch(request, ACCEPT_JSON)
            .await
            .and_then(decode_json_body)
    }

    /// Like [`LexofficeClient::execute`] but returns the raw 2xx body.
    pub async fn execute_bytes(&self, request: Request) -> ApiResult<Vec<u8>> {
        self.dispatch(request, ACCEPT_ANY)
            .await
            .map(|response| response.body)
    }

    pub(crate) fn permalink(&self, segment: &str, kind: DeeplinkKind, id: &ResourceId) -> String {
        let mut url = self.permalink_base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["permalink", segment, kind.as_str(), id.as_str()]);
        }
        url.into()
    }

    async fn dispatch(&self, request: Request, accept: &'static str) -> ApiResult<HttpResponse> {
        let method = request.method();
        let url = request.url(&self.base_url);
        tracing::debug!(%method, %url, "sending lexoffice request");

        let http_request = HttpRequest {
            method,
            url: url.clone(),
            headers: self.headers(accept),
            body: request.into_body(),
        };

        let response = match self.http.send(http_request).await {
            Ok(response) => response,
            Err(failure) => {
                tracing::warn!(
                    %method,
                    %url,
                    code = failure.code,
                    error = %failure.message,
                    "lexoffice request failed without a response"
                );
                return ApiResult::Failure(ApiFailure::new(failure.code, failure.message));
            }
        };

        tracing::debug!(%method, %url, status = response.status, "received lexoffice response");
        if response.is_success() {
            return ApiResult::Success(response);
        }

        let error = decode_error_message(&response.body)
            .unwrap_or_else(|| describe_status(method, &url, response.status));
        tracing::warn!(%method, %url, status = response.status, %error, "lexoffice request rejected");
        ApiResult::failure_with(response.status, error)
    }

    fn headers(&self, accept: &'static str) -> Vec<(&'static str, String)> {
        vec![
            ("Accept", accept.to_owned()),
            ("Content-Type", ACCEPT_JSON.to_owned()),
            ("Authorization", self.authorization.clone()),
        ]
    }
}

fn parse_base_url(field: &'static str, value: &str) -> Result<Url, LexofficeError> {
    let invalid = |reason: String| LexofficeError::InvalidUrl {
        field,
        value: value.to_owned(),
        reason,
    };
    let url = Url::parse(value.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(invalid("expected an absolute http(s) URL".to_owned()));
    }
    Ok(url)
}

fn decode_json_body(response: HttpResponse) -> ApiResult<Value> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return ApiResult::Success(Value::Null);
    }
    match serde_json::from_slice(&response.body) {
        Ok(data) => ApiResult::Success(data),
        Err(err) => {
            tracing::warn!(status = response.status, error = %err, "undecodable lexoffice response body");
            ApiResult::failure_with(response.status, format!("invalid JSON response: {err}"))
        }
    }
}

fn describe_status(method: Method, url: &Url, status: u16) -> String {
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status");
    format!("{method} {url} resulted in a `{status} {reason}` response")
}
