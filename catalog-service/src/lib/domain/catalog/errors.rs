use thiserror::Error;

/// Error type for CatalogName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogNameError {
    #[error("Name is empty")]
    Empty,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error type for product and distributor operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid name: {0}")]
    InvalidName(#[from] CatalogNameError),

    #[error("{field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: i64 },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Product already exists: {0}")]
    ProductAlreadyExists(String),

    #[error("Distributor already exists: {0}")]
    DistributorAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
