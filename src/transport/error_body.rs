use serde::Deserialize;

/// Upstream error payload. lexoffice answers either
/// `{"timestamp", "status", "error", "path", "traceId", "message"}` or the
/// legacy `{"IssueList": [...]}` shape; only `message` is surfaced.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Message {
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Extract a non-empty string `message` from an error response body.
pub(crate) fn decode_error_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.message? {
        Message::Text(text) if !text.trim().is_empty() => Some(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_message_from_json_error() {
        let body = br#"
        {
          "timestamp": "2024-01-01T12:00:00.000+01:00",
          "status": 404,
          "error": "Not Found",
          "path": "/v1/contacts/abc",
          "traceId": "90d78d0777be",
          "message": "Contact not found"
        }
        "#;
        assert_eq!(
            decode_error_message(body).as_deref(),
            Some("Contact not found")
        );
    }

    #[test]
    fn legacy_issue_list_has_no_message() {
        let body = br#"{"IssueList":[{"i18nKey":"missing_entity","source":"id","type":"validation_failure"}]}"#;
        assert_eq!(decode_error_message(body), None);
    }

    #[test]
    fn non_json_body_has_no_message() {
        assert_eq!(decode_error_message(b"<html>Bad Gateway</html>"), None);
        assert_eq!(decode_error_message(b""), None);
    }

    #[test]
    fn non_string_or_blank_message_is_ignored() {
        assert_eq!(decode_error_message(br#"{"message": 42}"#), None);
        assert_eq!(decode_error_message(br#"{"message": "  "}"#), None);
        assert_eq!(decode_error_message(br#"{"message": null}"#), None);
        assert_eq!(decode_error_message(br#"[1, 2, 3]"#), None);
    }
}
