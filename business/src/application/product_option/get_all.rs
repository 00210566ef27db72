use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOption;
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::get_all::{
    GetAllProductOptionsParams, GetAllProductOptionsUseCase,
};

pub struct GetAllProductOptionsUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductOptionsUseCase for GetAllProductOptionsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllProductOptionsParams,
    ) -> Result<Vec<ProductOption>, ProductOptionError> {
        self.logger.info(&format!(
            "Fetching options for product: {}",
            params.product_id
        ));

        let options = self
            .repository
            .get_all_by_product_id(params.product_id)
            .await?;

        self.logger
            .info(&format!("Found {} options", options.len()));
        Ok(options)
    }
}
