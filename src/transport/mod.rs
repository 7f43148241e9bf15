//! Transport layer: the HTTP capability the client is built on, plus
//! wire-format details of upstream error bodies.

mod error_body;

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;
use url::Url;

use crate::domain::{Method, NO_RESPONSE_STATUS};

pub(crate) use error_body::decode_error_message;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq)]
/// Fully resolved request handed to an [`HttpTransport`].
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status and raw body of a received response, whatever the status class.
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
/// No usable response was obtained (DNS, connect, TLS, timeout, broken body).
pub struct TransportFailure {
    /// Transport-provided code, [`NO_RESPONSE_STATUS`] when there is none.
    pub code: u16,
    pub message: String,
}

impl TransportFailure {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        let code = err
            .status()
            .map_or(NO_RESPONSE_STATUS, |status| status.as_u16());
        Self::new(code, err.to_string())
    }
}

/// HTTP capability used by [`crate::LexofficeClient`].
///
/// Implementations perform exactly one attempt and report any received
/// response as `Ok`, including non-2xx ones. Only the absence of a response is
/// an `Err`.
pub trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: HttpRequest)
    -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
/// Default transport backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move {
            let mut builder = self.client.request(reqwest_method(request.method), request.url);
            for (name, value) in &request.headers {
                builder = builder.header(*name, value.as_str());
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|err| TransportFailure::new(status, err.to_string()))?;
            Ok(HttpResponse {
                status,
                body: body.to_vec(),
            })
        })
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}
