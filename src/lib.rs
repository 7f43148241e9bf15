//! Typed Rust client for the lexoffice REST API.
//!
//! The crate is layered like this: a domain layer of validated values and the
//! normalized [`ApiResult`], a transport layer holding the HTTP capability, a
//! client owning configuration and the single execution path, and resource
//! managers that only shape requests.
//!
//! Remote operations never return `Err`: every outcome (success, upstream
//! business error, transport failure) arrives as an [`ApiResult`].
//!
//! ```rust,no_run
//! use lexoffice::{ApiResult, ApiToken, ClientConfig, ContactFilters, LexofficeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lexoffice::LexofficeError> {
//!     let client = LexofficeClient::new(ClientConfig::new(ApiToken::new("...")?))?;
//!     let filters = ContactFilters {
//!         email: Some("max@gmx.de".to_owned()),
//!         ..Default::default()
//!     };
//!     match client.contacts().all(filters).await {
//!         ApiResult::Success(data) => println!("{data}"),
//!         ApiResult::Failure(failure) => eprintln!("{}: {}", failure.status, failure.error),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod resources;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use client::{ClientConfig, LexofficeClient, LexofficeClientBuilder, LexofficeError};
pub use domain::{
    ApiFailure, ApiResult, ApiToken, ArticleFilters, ArticleType, ContactFilters, DeeplinkKind,
    Method, NO_RESPONSE_STATUS, QueryFilters, Request, ResourceId, ValidationError,
};
pub use resources::{
    Articles, Contacts, Countries, CreditNotes, DeliveryNotes, Files, Resource, ResourceManager,
};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportFailure};
