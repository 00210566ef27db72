use poem_openapi::Object;

use business::domain::product_option::model::ProductOption;

/// All fields optional so an incomplete body still reaches domain validation.
#[derive(Debug, Clone, Object)]
pub struct CreateProductOptionRequest {
    /// Option name (required, cannot be empty)
    pub name: Option<String>,
    /// Option description (required, cannot be empty)
    pub description: Option<String>,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductOptionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductOptionResponse {
    /// Option unique identifier
    pub id: String,
    /// Owning product identifier
    pub product_id: String,
    /// Option name
    pub name: String,
    /// Option description
    pub description: String,
}

impl From<ProductOption> for ProductOptionResponse {
    fn from(option: ProductOption) -> Self {
        Self {
            id: option.id.to_string(),
            product_id: option.product_id.to_string(),
            name: option.name,
            description: option.description,
        }
    }
}
