use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{ProductOption, ProductOptionChanges};

#[async_trait]
pub trait ProductOptionRepository: Send + Sync {
    async fn get_all_by_product_id(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductOption>, RepositoryError>;
    /// Scoped lookup: a row only matches when both the option id and its
    /// owning product id line up.
    async fn get_by_id(
        &self,
        id: Uuid,
        product_id: Uuid,
    ) -> Result<Option<ProductOption>, RepositoryError>;
    async fn insert(&self, option: &ProductOption) -> Result<(), RepositoryError>;
    /// Merges `changes` onto the stored row in a single statement. Matching
    /// zero rows is not an error.
    async fn update(
        &self,
        id: Uuid,
        product_id: Uuid,
        changes: &ProductOptionChanges,
    ) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, product_id: Uuid) -> Result<(), RepositoryError>;
}
