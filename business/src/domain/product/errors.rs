use uuid::Uuid;

use crate::domain::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.validation")]
    Validation(ValidationErrors),
    #[error("product.not_found")]
    NotFound(Uuid),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
