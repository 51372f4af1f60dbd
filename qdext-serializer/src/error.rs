//! Error types for the augmentation layer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SerializerError {
    #[error("serializer variant not found: {0}")]
    VariantNotFound(String),

    #[error("serializer variant already registered: {0}")]
    VariantAlreadyRegistered(String),
}
