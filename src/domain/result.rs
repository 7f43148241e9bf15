use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Status reported when no HTTP response was received and the transport
/// supplied no code of its own.
pub const NO_RESPONSE_STATUS: u16 = 0;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("lexoffice request failed (status {status}): {error}")]
/// Failure half of [`ApiResult`].
pub struct ApiFailure {
    /// HTTP status code, or a transport-provided code when no response arrived.
    pub status: u16,
    /// Upstream `message`, or the transport / fallback description.
    pub error: String,
}

impl ApiFailure {
    pub fn new(status: u16, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Normalized outcome of every remote operation.
///
/// Exactly one of `data` or (`status`, `error`) exists. Serializes as
/// `{"success": true, "data": ...}` or `{"success": false, "status": ..., "error": ...}`.
pub enum ApiResult<T> {
    Success(T),
    Failure(ApiFailure),
}

impl<T> ApiResult<T> {
    pub fn failure_with(status: u16, error: impl Into<String>) -> Self {
        Self::Failure(ApiFailure::new(status, error))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Decoded response body, present only on success.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Status code, present only on failure.
    pub fn status(&self) -> Option<u16> {
        self.failure().map(|failure| failure.status)
    }

    /// Error description, present only on failure.
    pub fn error(&self) -> Option<&str> {
        self.failure().map(|failure| failure.error.as_str())
    }

    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    pub fn map<U, F>(self, f: F) -> ApiResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(data) => ApiResult::Success(f(data)),
            Self::Failure(failure) => ApiResult::Failure(failure),
        }
    }

    pub fn and_then<U, F>(self, f: F) -> ApiResult<U>
    where
        F: FnOnce(T) -> ApiResult<U>,
    {
        match self {
            Self::Success(data) => f(data),
            Self::Failure(failure) => ApiResult::Failure(failure),
        }
    }

    /// Convert into a std `Result` so `?` can be used by callers that prefer it.
    pub fn into_result(self) -> Result<T, ApiFailure> {
        self.into()
    }
}

impl<T> From<ApiResult<T>> for Result<T, ApiFailure> {
    fn from(value: ApiResult<T>) -> Self {
        match value {
            ApiResult::Success(data) => Ok(data),
            ApiResult::Failure(failure) => Err(failure),
        }
    }
}

impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Success(data) => {
                let mut state = serializer.serialize_struct("ApiResult", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            Self::Failure(failure) => {
                let mut state = serializer.serialize_struct("ApiResult", 3)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("status", &failure.status)?;
                state.serialize_field("error", &failure.error)?;
                state.end()
            }
        }
    }
}
