#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum XgenError {
    #[error("secure entropy source unavailable: {reason}")]
    EntropyUnavailable { reason: String },

    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    #[error("missing required signature field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid base32 value: {input}")]
    InvalidBase32 { input: String },

    #[error("password hashing failed: {reason}")]
    Hash { reason: String },
}

pub type Result<T> = std::result::Result<T, XgenError>;
