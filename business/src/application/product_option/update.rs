use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::ProductOptionChanges;
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::update::{
    UpdateProductOptionParams, UpdateProductOptionUseCase,
};

pub struct UpdateProductOptionUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductOptionUseCase for UpdateProductOptionUseCaseImpl {
    async fn execute(&self, params: UpdateProductOptionParams) -> Result<(), ProductOptionError> {
        self.logger.info(&format!(
            "Updating option {} of product {}",
            params.id, params.product_id
        ));

        let changes = ProductOptionChanges {
            name: params.name,
            description: params.description,
        };

        self.repository
            .update(params.id, params.product_id, &changes)
            .await?;

        self.logger
            .info(&format!("Option {} updated", params.id));
        Ok(())
    }
}
