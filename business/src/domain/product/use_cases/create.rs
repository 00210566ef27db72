use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::validation::ValidationErrors;

/// Create payload with every field optional so that validation, not
/// deserialization, decides what is missing.
pub struct CreateProductParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub delivery_price: Option<BigDecimal>,
}

impl CreateProductParams {
    /// Field-presence check: `Name` and `Description` must be non-empty,
    /// `Price` and `DeliveryPrice` must be present. An empty string fails
    /// the same way as an absent value; nothing is trimmed.
    pub fn validate(self) -> Result<NewProductProps, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.as_deref().unwrap_or("").is_empty() {
            errors.require("Name");
        }
        if self.description.as_deref().unwrap_or("").is_empty() {
            errors.require("Description");
        }
        if self.price.is_none() {
            errors.require("Price");
        }
        if self.delivery_price.is_none() {
            errors.require("DeliveryPrice");
        }

        match (self.name, self.description, self.price, self.delivery_price) {
            (Some(name), Some(description), Some(price), Some(delivery_price))
                if errors.is_empty() =>
            {
                Ok(NewProductProps {
                    name,
                    description,
                    price,
                    delivery_price,
                })
            }
            _ => Err(errors),
        }
    }
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use proptest::prelude::*;

    use super::*;

    fn full_params() -> CreateProductParams {
        CreateProductParams {
            name: Some("Olive Oil".to_string()),
            description: Some("Extra virgin".to_string()),
            price: Some(BigDecimal::from_str("10.99").unwrap()),
            delivery_price: Some(BigDecimal::from_str("5.99").unwrap()),
        }
    }

    #[test]
    fn should_yield_props_when_every_field_is_present() {
        let props = full_params().validate().unwrap();

        assert_eq!(props.name, "Olive Oil");
        assert_eq!(props.description, "Extra virgin");
        assert_eq!(props.price, BigDecimal::from_str("10.99").unwrap());
        assert_eq!(props.delivery_price, BigDecimal::from_str("5.99").unwrap());
    }

    #[test]
    fn should_fail_name_when_empty_string() {
        let params = CreateProductParams {
            name: Some("".to_string()),
            ..full_params()
        };

        let errors = params.validate().unwrap_err();

        assert_eq!(errors.fields()["Name"], vec!["The Name field is required."]);
        assert_eq!(errors.fields().len(), 1);
    }

    #[test]
    fn should_fail_description_when_absent() {
        let params = CreateProductParams {
            description: None,
            ..full_params()
        };

        let errors = params.validate().unwrap_err();

        assert_eq!(
            errors.fields()["Description"],
            vec!["The Description field is required."]
        );
    }

    #[test]
    fn should_collect_every_missing_field_at_once() {
        let params = CreateProductParams {
            name: None,
            description: Some("".to_string()),
            price: None,
            delivery_price: None,
        };

        let errors = params.validate().unwrap_err();
        let fields: Vec<&String> = errors.fields().keys().collect();

        assert_eq!(fields, ["DeliveryPrice", "Description", "Name", "Price"]);
    }

    proptest! {
        /// Any presence/absence combination reports exactly the absent or
        /// empty fields, never more, never fewer.
        #[test]
        fn should_report_exactly_the_absent_fields(
            name in proptest::option::of("[A-Za-z ]{0,12}"),
            description in proptest::option::of("[A-Za-z ]{0,12}"),
            price in proptest::option::of(0u32..10_000u32),
            delivery_price in proptest::option::of(0u32..10_000u32),
        ) {
            let params = CreateProductParams {
                name: name.clone(),
                description: description.clone(),
                price: price.map(BigDecimal::from),
                delivery_price: delivery_price.map(BigDecimal::from),
            };

            let expected: Vec<&str> = [
                ("DeliveryPrice", delivery_price.is_none()),
                ("Description", description.as_deref().unwrap_or("").is_empty()),
                ("Name", name.as_deref().unwrap_or("").is_empty()),
                ("Price", price.is_none()),
            ]
            .iter()
            .filter(|(_, invalid)| *invalid)
            .map(|(field, _)| *field)
            .collect();

            match params.validate() {
                Ok(_) => prop_assert!(expected.is_empty()),
                Err(errors) => {
                    let fields: Vec<&str> =
                        errors.fields().keys().map(String::as_str).collect();
                    prop_assert_eq!(fields, expected);
                }
            }
        }
    }
}
