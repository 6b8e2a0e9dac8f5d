//! The build aggregate: one slot per hardware category.

use serde::{Deserialize, Serialize};

use crate::component::{Category, Component};
use crate::error::CoreError;

/// Component slots of a build.
///
/// Single-part categories are `Option`s; RAM modules and storage drives are
/// lists. Fields are spelled out rather than keyed by category so that new
/// rules get exhaustive access at compile time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildComponents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motherboard: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<Component>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling: Option<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ram: Vec<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storage: Vec<Component>,
}

/// A build submitted for evaluation.
///
/// Derived values a client may send back (`total_price`, `estimated_power`,
/// compatibility) are not part of this type and are dropped on deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Build {
    #[serde(default)]
    pub build_name: String,
    #[serde(default)]
    pub components: BuildComponents,
}

impl BuildComponents {
    /// Every populated slot paired with the category it is declared as.
    ///
    /// List slots yield one entry per element. Order is fixed (single slots
    /// first, then RAM, then storage) and never depends on caller input.
    pub fn slotted(&self) -> impl Iterator<Item = (Category, &Component)> {
        let singles = [
            (Category::Cpu, self.cpu.as_ref()),
            (Category::Motherboard, self.motherboard.as_ref()),
            (Category::Gpu, self.gpu.as_ref()),
            (Category::Psu, self.psu.as_ref()),
            (Category::Case, self.case.as_ref()),
            (Category::Cooling, self.cooling.as_ref()),
        ];
        singles
            .into_iter()
            .filter_map(|(slot, c)| c.map(|c| (slot, c)))
            .chain(self.ram.iter().map(|c| (Category::Ram, c)))
            .chain(self.storage.iter().map(|c| (Category::Storage, c)))
    }

    /// Every populated component.
    pub fn populated(&self) -> impl Iterator<Item = &Component> {
        self.slotted().map(|(_, c)| c)
    }
}

impl Build {
    /// Check the structural contract: each slot holds a component of its own
    /// category and every component carries its identifying fields.
    ///
    /// A failure here is a caller or catalog bug, never a compatibility
    /// finding.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (slot, component) in self.components.slotted() {
            if component.category != slot {
                return Err(CoreError::SlotMismatch {
                    slot,
                    found: component.category,
                });
            }
            component.validate()?;
        }
        Ok(())
    }
}
