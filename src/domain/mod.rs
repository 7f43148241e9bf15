//! Domain layer: validated values, request descriptions and the normalized
//! result type (no I/O).

mod query;
mod request;
mod result;
mod validation;
mod value;

pub use query::{ArticleFilters, ArticleType, ContactFilters, QueryFilters};
pub use request::{Method, Request};
pub use result::{ApiFailure, ApiResult, NO_RESPONSE_STATUS};
pub use validation::ValidationError;
pub use value::{ApiToken, DeeplinkKind, ResourceId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_token_rejects_empty() {
        assert!(matches!(
            ApiToken::new("   "),
            Err(ValidationError::Empty {
                field: ApiToken::FIELD
            })
        ));
    }

    #[test]
    fn api_token_is_trimmed_and_masked_in_debug() {
        let token = ApiToken::new("  secret-token ").unwrap();
        assert_eq!(token.as_str(), "secret-token");
        assert_eq!(format!("{token:?}"), "ApiToken(*****)");
        assert_eq!(token.bearer(), "Bearer secret-token");
    }

    #[test]
    fn resource_id_rejects_empty() {
        assert!(matches!(
            ResourceId::new(""),
            Err(ValidationError::Empty {
                field: ResourceId::FIELD
            })
        ));
    }

    #[test]
    fn deeplink_kind_parses_view_and_edit_only() {
        assert_eq!("view".parse::<DeeplinkKind>(), Ok(DeeplinkKind::View));
        assert_eq!("edit".parse::<DeeplinkKind>(), Ok(DeeplinkKind::Edit));
        assert_eq!(
            "delete".parse::<DeeplinkKind>(),
            Err(ValidationError::InvalidDeeplinkKind {
                input: "delete".to_owned()
            })
        );
        assert!("View".parse::<DeeplinkKind>().is_err());
    }
}
