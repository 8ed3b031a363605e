use thiserror::Error;

use crate::application::catalog::CatalogError;
use crate::application::listing::InvalidQuery;
use crate::application::render::MalformedInput;
use crate::domain::error::DomainError;
use crate::infra::error::InfraError;

/// Top-level error for the binary's command handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Query(#[from] InvalidQuery),
    #[error(transparent)]
    Render(#[from] MalformedInput),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}
