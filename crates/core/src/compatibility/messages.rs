//! User-facing finding messages.
//!
//! Every string a rule puts into a finding is built here and nowhere else.

use crate::spec::{FormFactor, MemoryGeneration, Socket};
use crate::tier::PerformanceTier;
use crate::types::Watts;

// --- Socket ---

pub fn socket_mismatch(cpu: &Socket, motherboard: &Socket) -> String {
    format!("CPU socket {cpu} does not match motherboard socket {motherboard}")
}

pub fn socket_unknown() -> String {
    "Cannot verify socket compatibility: socket information is missing for the CPU or motherboard"
        .to_string()
}

// --- Memory ---

pub fn memory_mismatch(modules: &[MemoryGeneration], supported: &[MemoryGeneration]) -> String {
    format!(
        "RAM type {} is not supported by the motherboard (supports {})",
        join(modules),
        join(supported)
    )
}

pub fn memory_unknown() -> String {
    "Cannot verify memory compatibility: RAM type is missing for the motherboard or a RAM module"
        .to_string()
}

pub fn memory_slots_exceeded(modules: usize, slots: u32) -> String {
    format!("{modules} RAM modules selected but the motherboard has only {slots} slots")
}

// --- Power ---

pub fn power_insufficient(psu_watts: Watts, estimated: Watts) -> String {
    format!("PSU rated {psu_watts}W is below the estimated system draw of {estimated}W")
}

pub fn power_low_headroom(psu_watts: Watts, recommended: Watts) -> String {
    format!(
        "PSU rated {psu_watts}W leaves little headroom; at least {recommended}W is recommended"
    )
}

pub fn power_unknown() -> String {
    "Cannot verify power sufficiency: PSU wattage is missing".to_string()
}

// --- Physical fit ---

pub fn gpu_too_long(gpu_mm: u32, max_mm: u32) -> String {
    format!("Graphics card length {gpu_mm}mm exceeds the case limit of {max_mm}mm")
}

pub fn gpu_length_unknown() -> String {
    "Cannot verify graphics card clearance: length data is missing for the GPU or case".to_string()
}

pub fn cooler_too_tall(cooler_mm: u32, max_mm: u32) -> String {
    format!("CPU cooler height {cooler_mm}mm exceeds the case limit of {max_mm}mm")
}

pub fn cooler_height_unknown() -> String {
    "Cannot verify cooler clearance: height data is missing for the cooler or case".to_string()
}

pub fn form_factor_unsupported(board: FormFactor, largest: FormFactor) -> String {
    format!("{board} motherboard does not fit a case that supports up to {largest}")
}

pub fn form_factor_unknown() -> String {
    "Cannot verify motherboard fit: form factor data is missing for the motherboard or case"
        .to_string()
}

// --- Performance ---

pub fn performance_imbalance(cpu: PerformanceTier, gpu: PerformanceTier) -> String {
    if cpu < gpu {
        format!("The {cpu} CPU may bottleneck the {gpu} graphics card")
    } else {
        format!("The {gpu} graphics card underuses the {cpu} CPU")
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_mismatch_lists_generations() {
        let msg = memory_mismatch(
            &[MemoryGeneration::Ddr4],
            &[MemoryGeneration::Ddr5],
        );
        assert_eq!(msg, "RAM type DDR4 is not supported by the motherboard (supports DDR5)");
    }

    #[test]
    fn performance_message_names_the_weaker_part() {
        let msg = performance_imbalance(PerformanceTier::Entry, PerformanceTier::Flagship);
        assert_eq!(msg, "The entry CPU may bottleneck the flagship graphics card");
        let msg = performance_imbalance(PerformanceTier::Flagship, PerformanceTier::Entry);
        assert!(msg.contains("underuses"));
    }
}
