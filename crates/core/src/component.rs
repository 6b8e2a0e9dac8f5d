//! Catalog component records as the engine sees them.
//!
//! A [`Component`] is a read-only view of one purchasable part. Everything
//! the rules need (socket, wattage, form factor, dimensions) travels through
//! the free-form `specifications` list and is parsed on demand by
//! [`crate::spec`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Price};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

pub const CATEGORY_CPU: &str = "cpu";
pub const CATEGORY_MOTHERBOARD: &str = "motherboard";
pub const CATEGORY_RAM: &str = "ram";
pub const CATEGORY_STORAGE: &str = "storage";
pub const CATEGORY_GPU: &str = "gpu";
pub const CATEGORY_PSU: &str = "psu";
pub const CATEGORY_CASE: &str = "case";
pub const CATEGORY_COOLING: &str = "cooling";

/// The closed set of hardware categories a build slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Motherboard,
    Ram,
    Storage,
    Gpu,
    Psu,
    Case,
    Cooling,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => CATEGORY_CPU,
            Self::Motherboard => CATEGORY_MOTHERBOARD,
            Self::Ram => CATEGORY_RAM,
            Self::Storage => CATEGORY_STORAGE,
            Self::Gpu => CATEGORY_GPU,
            Self::Psu => CATEGORY_PSU,
            Self::Case => CATEGORY_CASE,
            Self::Cooling => CATEGORY_COOLING,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// One `{spec_name, spec_value}` pair from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub spec_name: String,
    pub spec_value: String,
}

/// A catalog record placed into a build slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "component_type")]
    pub category: Category,
    #[serde(rename = "product_id")]
    pub id: DbId,
    #[serde(rename = "product_name")]
    pub name: String,
    #[serde(rename = "product_code")]
    pub code: String,
    #[serde(rename = "brand_name", default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub price: Price,
    #[serde(rename = "stock_quantity")]
    pub stock: u32,
    #[serde(default)]
    pub specifications: Vec<SpecEntry>,
}

impl Component {
    /// Parse the first specification whose name matches one of `aliases`
    /// (case-insensitive, surrounding whitespace ignored).
    ///
    /// Aliases are tried in order, so earlier aliases take precedence over
    /// later ones regardless of where they appear in the list. An alias
    /// whose value does not parse is skipped.
    pub fn parse_spec<T>(&self, aliases: &[&str], parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        aliases.iter().find_map(|alias| {
            self.specifications
                .iter()
                .filter(|s| s.spec_name.trim().to_lowercase() == alias.to_lowercase())
                .find_map(|s| parse(&s.spec_value))
        })
    }

    /// Check the identifying fields the catalog guarantees.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{} product {} has an empty product_name",
                self.category, self.id
            )));
        }
        if self.code.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{} product {} has an empty product_code",
                self.category, self.id
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
