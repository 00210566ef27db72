use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;

pub struct GetProductOptionByIdParams {
    pub id: Uuid,
    pub product_id: Uuid,
}

#[async_trait]
pub trait GetProductOptionByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetProductOptionByIdParams,
    ) -> Result<ProductOption, ProductOptionError>;
}
