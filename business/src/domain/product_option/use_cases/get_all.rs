use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;

pub struct GetAllProductOptionsParams {
    pub product_id: Uuid,
}

/// Lists the options of one product. A product without options (or an
/// unknown product id) yields an empty list, not an error.
#[async_trait]
pub trait GetAllProductOptionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllProductOptionsParams,
    ) -> Result<Vec<ProductOption>, ProductOptionError>;
}
