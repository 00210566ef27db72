use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductChanges};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
    /// Matches any product whose name contains `name` as a substring.
    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn exists(&self, id: Uuid) -> Result<bool, RepositoryError>;
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Merges `changes` onto the stored row in a single statement. Matching
    /// zero rows is not an error.
    async fn update(&self, id: Uuid, changes: &ProductChanges) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
