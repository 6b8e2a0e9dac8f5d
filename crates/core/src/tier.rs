//! Coarse performance classes derived from price bands.
//!
//! Price is the only class signal every catalog record carries. The bands
//! are in VND and deliberately wide: the performance rule only needs to
//! catch gross mismatches such as a flagship GPU paired with an entry CPU.

use std::fmt;

use crate::types::Price;

/// CPU band upper bounds (exclusive): entry, mainstream, high-end.
pub const CPU_TIER_BOUNDS: [Price; 3] = [3_000_000, 7_000_000, 12_000_000];

/// GPU band upper bounds (exclusive): entry, mainstream, high-end.
pub const GPU_TIER_BOUNDS: [Price; 3] = [6_000_000, 15_000_000, 30_000_000];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PerformanceTier {
    Entry,
    Mainstream,
    HighEnd,
    Flagship,
}

impl PerformanceTier {
    fn from_bounds(price: Price, bounds: &[Price; 3]) -> Self {
        match bounds.iter().position(|bound| price < *bound) {
            Some(0) => Self::Entry,
            Some(1) => Self::Mainstream,
            Some(_) => Self::HighEnd,
            None => Self::Flagship,
        }
    }

    pub fn for_cpu(price: Price) -> Self {
        Self::from_bounds(price, &CPU_TIER_BOUNDS)
    }

    pub fn for_gpu(price: Price) -> Self {
        Self::from_bounds(price, &GPU_TIER_BOUNDS)
    }

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Number of tiers between `self` and `other`.
    pub fn gap(self, other: Self) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry => f.write_str("entry"),
            Self::Mainstream => f.write_str("mainstream"),
            Self::HighEnd => f.write_str("high-end"),
            Self::Flagship => f.write_str("flagship"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_bands() {
        assert_eq!(PerformanceTier::for_cpu(2_500_000), PerformanceTier::Entry);
        assert_eq!(PerformanceTier::for_cpu(3_000_000), PerformanceTier::Mainstream);
        assert_eq!(PerformanceTier::for_cpu(9_000_000), PerformanceTier::HighEnd);
        assert_eq!(PerformanceTier::for_cpu(15_000_000), PerformanceTier::Flagship);
    }

    #[test]
    fn gpu_bands() {
        assert_eq!(PerformanceTier::for_gpu(0), PerformanceTier::Entry);
        assert_eq!(PerformanceTier::for_gpu(10_000_000), PerformanceTier::Mainstream);
        assert_eq!(PerformanceTier::for_gpu(29_999_999), PerformanceTier::HighEnd);
        assert_eq!(PerformanceTier::for_gpu(50_000_000), PerformanceTier::Flagship);
    }

    #[test]
    fn gap_is_symmetric() {
        assert_eq!(PerformanceTier::Entry.gap(PerformanceTier::Flagship), 3);
        assert_eq!(PerformanceTier::Flagship.gap(PerformanceTier::Entry), 3);
        assert_eq!(PerformanceTier::HighEnd.gap(PerformanceTier::HighEnd), 0);
    }
}
