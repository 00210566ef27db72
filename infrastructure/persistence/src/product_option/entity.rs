use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product_option::model::ProductOption;

#[derive(Debug, FromRow)]
pub struct ProductOptionEntity {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub description: String,
}

impl ProductOptionEntity {
    pub fn into_domain(self) -> ProductOption {
        ProductOption::from_repository(self.id, self.product_id, self.name, self.description)
    }
}
