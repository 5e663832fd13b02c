// src/domain/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by the order workflow and the repositories behind it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Insufficient stock for product {product_id} ({product_name}): requested {requested}, available {available}")]
    InsufficientStock {
        product_id: i64,
        product_name: String,
        requested: i64,
        available: i64,
    },

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn product_not_found(product_id: i64) -> Self {
        DomainError::NotFound(format!("Product {} not found", product_id))
    }

    pub fn order_not_found(order_id: i64) -> Self {
        DomainError::NotFound(format!("Order {} not found", order_id))
    }

    pub fn user_not_found(user_id: i64) -> Self {
        DomainError::NotFound(format!("User {} not found", user_id))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type DomainResult<T> = Result<T, DomainError>;
