use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::product::model::Product;

/// Converts a JSON number into the decimal the domain stores. Going through
/// the string form keeps `10.99` as `10.99` instead of its binary expansion.
/// JSON numbers are always finite, so the parse cannot fail in practice.
pub fn price_from_json(value: f64) -> BigDecimal {
    BigDecimal::from_str(&value.to_string()).unwrap_or_default()
}

pub fn price_to_json(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// All fields optional so an incomplete body still reaches domain validation,
/// which reports every missing field at once.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (required, cannot be empty)
    pub name: Option<String>,
    /// Product description (required, cannot be empty)
    pub description: Option<String>,
    /// Sale price
    pub price: Option<f64>,
    /// Delivery price
    pub delivery_price: Option<f64>,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub delivery_price: Option<f64>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Sale price
    pub price: f64,
    /// Delivery price
    pub delivery_price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: price_to_json(&product.price),
            delivery_price: price_to_json(&product.delivery_price),
        }
    }
}
