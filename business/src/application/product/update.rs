use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductChanges;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Updating product with id: {}", params.id));

        let changes = ProductChanges {
            name: params.name,
            description: params.description,
            price: params.price,
            delivery_price: params.delivery_price,
        };

        // Absent fields keep their stored values; the repository merges in
        // a single statement, so there is no read-then-write window.
        self.repository.update(params.id, &changes).await?;

        self.logger
            .info(&format!("Product {} updated", params.id));
        Ok(())
    }
}
