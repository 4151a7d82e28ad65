//! Catalog error types.

use homevalue_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Please fill in all fields to get personalized recommendations.")]
    IncompleteAssessment { missing: Vec<&'static str> },
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        CoreError::Validation {
            message: err.to_string(),
        }
    }
}
