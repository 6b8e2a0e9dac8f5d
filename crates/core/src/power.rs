//! Whole-system power draw estimation.
//!
//! Each installed load (everything but the PSU) contributes either the
//! wattage declared in its specifications or a conservative per-category
//! default. A fixed baseline covers the motherboard, fans and peripherals.

use crate::build::BuildComponents;
use crate::component::{Category, Component};
use crate::config::EngineConfig;
use crate::spec::parse_watts;
use crate::types::Watts;

// ---------------------------------------------------------------------------
// Draw specification keys
// ---------------------------------------------------------------------------

pub const CPU_DRAW_KEYS: &[&str] = &["TDP", "Công suất", "Công suất tiêu thụ", "Power"];
pub const GPU_DRAW_KEYS: &[&str] = &["Tiêu thụ điện", "TDP", "Công suất", "Power"];
pub const PERIPHERAL_DRAW_KEYS: &[&str] = &["Công suất", "Power"];

// ---------------------------------------------------------------------------
// Default draw per category
// ---------------------------------------------------------------------------

pub const DEFAULT_CPU_WATTS: Watts = 65;
pub const DEFAULT_GPU_WATTS: Watts = 200;
pub const DEFAULT_RAM_WATTS: Watts = 5;
pub const DEFAULT_STORAGE_WATTS: Watts = 8;
pub const DEFAULT_COOLING_WATTS: Watts = 5;

/// Specification aliases consulted for a category's draw.
///
/// Empty for categories that never count as a load: the PSU is the supply,
/// and the motherboard and case are folded into the baseline.
pub fn draw_keys(category: Category) -> &'static [&'static str] {
    match category {
        Category::Cpu => CPU_DRAW_KEYS,
        Category::Gpu => GPU_DRAW_KEYS,
        Category::Ram | Category::Storage | Category::Cooling => PERIPHERAL_DRAW_KEYS,
        Category::Motherboard | Category::Case | Category::Psu => &[],
    }
}

/// Fallback draw when a component declares none.
pub fn default_draw(category: Category) -> Watts {
    match category {
        Category::Cpu => DEFAULT_CPU_WATTS,
        Category::Gpu => DEFAULT_GPU_WATTS,
        Category::Ram => DEFAULT_RAM_WATTS,
        Category::Storage => DEFAULT_STORAGE_WATTS,
        Category::Cooling => DEFAULT_COOLING_WATTS,
        Category::Motherboard | Category::Case | Category::Psu => 0,
    }
}

/// Draw attributed to one component placed in `slot`.
pub fn component_draw(slot: Category, component: &Component) -> Watts {
    let keys = draw_keys(slot);
    if keys.is_empty() {
        return 0;
    }
    component
        .parse_spec(keys, parse_watts)
        .unwrap_or_else(|| default_draw(slot))
}

/// Estimated whole-system draw in watts: every load plus the baseline.
pub fn estimate_power(components: &BuildComponents, config: &EngineConfig) -> Watts {
    components
        .slotted()
        .map(|(slot, c)| component_draw(slot, c))
        .fold(config.baseline_watts, Watts::saturating_add)
}
