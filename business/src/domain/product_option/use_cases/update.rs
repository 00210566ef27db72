use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product_option::errors::ProductOptionError;

/// Partial update scoped to the owning product; absent fields keep their
/// stored values, and a `(id, product_id)` pair that matches no row still
/// succeeds.
pub struct UpdateProductOptionParams {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateProductOptionUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductOptionParams) -> Result<(), ProductOptionError>;
}
