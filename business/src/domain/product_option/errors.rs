use uuid::Uuid;

use crate::domain::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ProductOptionError {
    #[error("product_option.validation")]
    Validation(ValidationErrors),
    #[error("product_option.not_found")]
    NotFound(Uuid),
    /// The owning product was absent when an option was about to be created.
    #[error("product.not_found")]
    ProductNotFound(Uuid),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
