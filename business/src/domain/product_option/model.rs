use uuid::Uuid;

/// An option belonging to exactly one product. Every read, update, and
/// delete filters by the `(id, product_id)` pair, so an option is never
/// reachable through a parent other than its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductOption {
    pub id: Uuid,
    pub product_id: Uuid,
    pub name: String,
    pub description: String,
}

/// Validated field set for a new option; ids are generated here, never
/// accepted from the caller.
#[derive(Debug)]
pub struct NewProductOptionProps {
    pub product_id: Uuid,
    pub name: String,
    pub description: String,
}

/// Partial update; `None` keeps the stored value for that column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductOptionChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProductOption {
    pub fn new(props: NewProductOptionProps) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id: props.product_id,
            name: props.name,
            description: props.description,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, product_id: Uuid, name: String, description: String) -> Self {
        Self {
            id,
            product_id,
            name,
            description,
        }
    }
}
