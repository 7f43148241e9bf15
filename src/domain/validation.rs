use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidDeeplinkKind { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidDeeplinkKind { input } => write!(
                f,
                "invalid deeplink type: {input:?} (allowed types are 'view' or 'edit')"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
