use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product_option::errors::ProductOptionError;
use crate::domain::product_option::model::{NewProductOptionProps, ProductOption};
use crate::domain::validation::ValidationErrors;

pub struct CreateProductOptionParams {
    pub product_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CreateProductOptionParams {
    /// Same presence rules as product creation: `Name` and `Description`
    /// must be non-empty, empty strings fail like absent values.
    pub fn validate(self) -> Result<NewProductOptionProps, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.as_deref().unwrap_or("").is_empty() {
            errors.require("Name");
        }
        if self.description.as_deref().unwrap_or("").is_empty() {
            errors.require("Description");
        }

        let product_id = self.product_id;
        match (self.name, self.description) {
            (Some(name), Some(description)) if errors.is_empty() => Ok(NewProductOptionProps {
                product_id,
                name,
                description,
            }),
            _ => Err(errors),
        }
    }
}

#[async_trait]
pub trait CreateProductOptionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateProductOptionParams,
    ) -> Result<ProductOption, ProductOptionError>;
}
