use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::repository::ProductOptionRepository;
use crate::domain::product_option::use_cases::delete::{
    DeleteProductOptionParams, DeleteProductOptionUseCase,
};

pub struct DeleteProductOptionUseCaseImpl {
    pub repository: Arc<dyn ProductOptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductOptionUseCase for DeleteProductOptionUseCaseImpl {
    async fn execute(&self, params: DeleteProductOptionParams) -> Result<(), ProductOptionError> {
        self.logger.info(&format!(
            "Deleting option {} of product {}",
            params.id, params.product_id
        ));

        self.repository
            .delete(params.id, params.product_id)
            .await?;

        self.logger
            .info(&format!("Option {} deleted", params.id));
        Ok(())
    }
}
