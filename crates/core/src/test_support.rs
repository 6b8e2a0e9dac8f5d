//! Fixture builders shared by unit tests.

use crate::component::{Category, Component, SpecEntry};
use crate::types::Price;

/// A catalog record of `category` with the given price and specifications.
pub fn component(category: Category, price: Price, specs: &[(&str, &str)]) -> Component {
    Component {
        category,
        id: 1,
        name: format!("Test {category}"),
        code: format!("TEST-{}", category.as_str().to_uppercase()),
        brand: Some("Test Brand".to_string()),
        price,
        stock: 10,
        specifications: specs
            .iter()
            .map(|(name, value)| SpecEntry {
                spec_name: name.to_string(),
                spec_value: value.to_string(),
            })
            .collect(),
    }
}
