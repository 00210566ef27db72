use std::collections::BTreeMap;

/// Field-level failures for a create payload, keyed by the wire-facing
/// PascalCase field name ("Name", "DeliveryPrice").
///
/// A `BTreeMap` keeps the serialized key order stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a required-field failure with the standard message.
    pub fn require(&mut self, field: &str) {
        self.add(field, format!("The {field} field is required."));
    }

    pub fn add(&mut self, field: &str, message: String) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    pub fn into_fields(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}
