use bigdecimal::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub delivery_price: BigDecimal,
}

/// Validated field set for a new product; ids are generated here, never
/// accepted from the caller.
#[derive(Debug)]
pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub delivery_price: BigDecimal,
}

/// Partial update; `None` keeps the stored value for that column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub delivery_price: Option<BigDecimal>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            delivery_price: props.delivery_price,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: BigDecimal,
        delivery_price: BigDecimal,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            delivery_price,
        }
    }
}
