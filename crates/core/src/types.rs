/// Opaque catalog product identifier, echoed back unchanged.
pub type DbId = i64;

/// Currency amounts in the smallest unit (e.g. whole VND).
pub type Price = u64;

/// Whole watts.
pub type Watts = u32;
