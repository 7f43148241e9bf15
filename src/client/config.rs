use crate::client::LexofficeError;
use crate::domain::ApiToken;

pub const DEFAULT_BASE_URL: &str = "https://api.lexoffice.io/v1/";
pub const DEFAULT_PERMALINK_BASE_URL: &str = "https://app.lexoffice.de";

/// Environment variable holding the API token.
pub const API_TOKEN_ENV: &str = "LEXOFFICE_API_TOKEN";
/// Optional override of [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "LEXOFFICE_BASE_URL";
/// Optional override of [`DEFAULT_PERMALINK_BASE_URL`].
pub const PERMALINK_BASE_URL_ENV: &str = "LEXOFFICE_PERMALINK_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Settings a [`crate::LexofficeClient`] is built from.
///
/// URLs are kept as given and validated when the client is built.
pub struct ClientConfig {
    token: ApiToken,
    base_url: String,
    permalink_base_url: String,
}

impl ClientConfig {
    /// Configuration with the public lexoffice endpoints.
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            permalink_base_url: DEFAULT_PERMALINK_BASE_URL.to_owned(),
        }
    }

    /// Read the configuration from `LEXOFFICE_*` environment variables.
    ///
    /// `LEXOFFICE_API_TOKEN` is required; the URL variables fall back to the defaults.
    pub fn from_env() -> Result<Self, LexofficeError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, LexofficeError> {
        let token = lookup(API_TOKEN_ENV).ok_or(LexofficeError::MissingEnv(API_TOKEN_ENV))?;
        let mut config = Self::new(ApiToken::new(token)?);
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            config = config.base_url(base_url);
        }
        if let Some(permalink) =
            lookup(PERMALINK_BASE_URL_ENV).filter(|value| !value.trim().is_empty())
        {
            config = config.permalink_base_url(permalink);
        }
        Ok(config)
    }

    /// Override the API base URL (useful for sandboxes and mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the web application URL deeplinks are built on.
    pub fn permalink_base_url(mut self, url: impl Into<String>) -> Self {
        self.permalink_base_url = url.into();
        self
    }

    pub fn token(&self) -> &ApiToken {
        &self.token
    }

    pub fn base_url_str(&self) -> &str {
        &self.base_url
    }

    pub fn permalink_base_url_str(&self) -> &str {
        &self.permalink_base_url
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::ValidationError;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn new_uses_public_endpoints() {
        let config = ClientConfig::new(ApiToken::new("token").unwrap());
        assert_eq!(config.base_url_str(), DEFAULT_BASE_URL);
        assert_eq!(config.permalink_base_url_str(), DEFAULT_PERMALINK_BASE_URL);
    }

    #[test]
    fn from_lookup_requires_token() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, LexofficeError::MissingEnv(API_TOKEN_ENV)));
    }

    #[test]
    fn from_lookup_rejects_blank_token() {
        let err = ClientConfig::from_lookup(lookup(&[(API_TOKEN_ENV, "  ")])).unwrap_err();
        assert!(matches!(
            err,
            LexofficeError::Validation(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn from_lookup_applies_overrides_and_ignores_blank_ones() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_TOKEN_ENV, "token"),
            (BASE_URL_ENV, "http://localhost:8080/v1/"),
            (PERMALINK_BASE_URL_ENV, " "),
        ]))
        .unwrap();
        assert_eq!(config.token().as_str(), "token");
        assert_eq!(config.base_url_str(), "http://localhost:8080/v1/");
        assert_eq!(config.permalink_base_url_str(), DEFAULT_PERMALINK_BASE_URL);
    }
}
