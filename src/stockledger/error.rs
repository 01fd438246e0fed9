use crate::format::FormatReport;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Inventory file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("{0}")]
    MalformedFile(FormatReport),

    #[error("Invalid entry: {0}")]
    Validation(#[from] FieldError),

    /// The mutation is already applied to the in-memory records; the file on
    /// disk still holds the previous state.
    #[error("Changes applied but not saved to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Row {0} is not one of the selected items")]
    NotSelectable(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// A single input field that failed its constraint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("product code '{0}' is not in the format SKU#####")]
    BadCode(String),

    #[error("product name cannot be empty")]
    EmptyProduct,

    #[error("product name is longer than {max} characters")]
    ProductTooLong { max: usize },

    #[error("{field} cannot contain ','")]
    Delimiter { field: &'static str },

    #[error("country: {0}")]
    BadCountry(String),

    #[error("cost '{0}' must be a positive number")]
    BadCost(String),

    #[error("quantity '{0}' must be a whole positive number")]
    BadQuantity(String),

    #[error("new price {new} must be lower than the current price {current}")]
    PriceNotLower { current: String, new: String },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
