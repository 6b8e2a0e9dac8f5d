//! Build price aggregation.

use crate::build::BuildComponents;
use crate::types::Price;

/// Sum the selling price of every installed part.
///
/// Each RAM module and storage drive counts once per physical unit.
pub fn total_price(components: &BuildComponents) -> Price {
    components
        .populated()
        .fold(0, |acc: Price, c| acc.saturating_add(c.price))
}
