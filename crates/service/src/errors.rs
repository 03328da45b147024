use thiserror::Error;

/// The two error kinds this layer surfaces.
///
/// `IntegrityViolation` is a domain rule broken before persistence; the
/// caller can correct the input and resubmit. `ObjectNotFound` means no
/// stored record matched an id or filter. Messages identify the entity and
/// the offending value and are part of the contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    IntegrityViolation(String),
    #[error("{0}")]
    ObjectNotFound(String),
}

impl ServiceError {
    pub fn integrity(message: impl Into<String>) -> Self {
        Self::IntegrityViolation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::ObjectNotFound(message.into())
    }
}
