use thiserror::Error;

/// Coarse classification of an [`AbookError`], for callers that branch on the
/// kind of failure rather than the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    DuplicateKey,
    Io,
    Api,
}

#[derive(Error, Debug)]
pub enum AbookError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Phone number should be a 10-digit number: {0}")]
    InvalidPhone(String),

    #[error("Birthday is not a date (expected DD.MM.YYYY): {0}")]
    InvalidBirthday(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Contact already exists: {0}")]
    DuplicateContact(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl AbookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AbookError::EmptyName | AbookError::InvalidPhone(_) | AbookError::InvalidBirthday(_) => {
                ErrorKind::Validation
            }
            AbookError::ContactNotFound(_) | AbookError::PhoneNotFound { .. } => {
                ErrorKind::NotFound
            }
            AbookError::DuplicateContact(_) => ErrorKind::DuplicateKey,
            AbookError::Io(_) | AbookError::Serialization(_) => ErrorKind::Io,
            AbookError::Api(_) => ErrorKind::Api,
        }
    }
}

pub type Result<T> = std::result::Result<T, AbookError>;
