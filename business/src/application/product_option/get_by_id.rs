use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::get_by_id::{
    GetProductOptionByIdParams, GetProductOptionByIdUseCase,
};

pub struct GetProductOptionByIdUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductOptionByIdUseCase for GetProductOptionByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductOptionByIdParams,
    ) -> Result<ProductOption, ProductOptionError> {
        self.logger.info(&format!(
            "Fetching option {} of product {}",
            params.id, params.product_id
        ));

        self.repository
            .get_by_id(params.id, params.product_id)
            .await?
            .ok_or(ProductOptionError::NotFound(params.id))
    }
}
