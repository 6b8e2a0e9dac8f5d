//! The compatibility rule set.
//!
//! [`RULES`] is an ordered list of independent checks. Each rule declares
//! the slots it needs (`applies`) and inspects only those (`check`). A rule
//! that cannot read the data it needs emits a warning, never an error.

use std::collections::BTreeSet;

use crate::build::BuildComponents;
use crate::component::{Category, Component};
use crate::config::EngineConfig;
use crate::spec::{
    parse_millimetres, parse_number, parse_watts, FormFactor, MemoryGeneration, Socket,
    CASE_FORM_FACTOR_KEYS, CASE_MAX_COOLER_HEIGHT_KEYS, CASE_MAX_GPU_LENGTH_KEYS,
    COOLER_HEIGHT_KEYS, FORM_FACTOR_KEYS, GPU_LENGTH_KEYS, MEMORY_TYPE_KEYS, PSU_WATTAGE_KEYS,
    RAM_SLOT_KEYS, SOCKET_KEYS,
};
use crate::tier::PerformanceTier;
use crate::types::Watts;

use super::finding::{ErrorType, Finding, WarningType};
use super::messages;

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// Everything a rule may read.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub components: &'a BuildComponents,
    pub estimated_power: Watts,
    pub config: &'a EngineConfig,
}

/// One entry of the rule set.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub description: &'static str,
    pub applies: fn(&BuildComponents) -> bool,
    pub check: fn(&RuleContext<'_>) -> Vec<Finding>,
}

pub const RULE_SOCKET: &str = "socket";
pub const RULE_MEMORY: &str = "memory";
pub const RULE_POWER: &str = "power";
pub const RULE_PHYSICAL_FIT: &str = "physical_fit";
pub const RULE_FORM_FACTOR: &str = "form_factor";
pub const RULE_PERFORMANCE: &str = "performance";

/// The rule set, in output order.
pub const RULES: &[Rule] = &[
    Rule {
        name: RULE_SOCKET,
        description: "CPU socket matches the motherboard socket",
        applies: |c| c.cpu.is_some() && c.motherboard.is_some(),
        check: check_socket,
    },
    Rule {
        name: RULE_MEMORY,
        description: "RAM generation and module count are supported by the motherboard",
        applies: |c| c.motherboard.is_some() && !c.ram.is_empty(),
        check: check_memory,
    },
    Rule {
        name: RULE_POWER,
        description: "PSU covers the estimated draw with headroom",
        applies: |c| c.psu.is_some(),
        check: check_power,
    },
    Rule {
        name: RULE_PHYSICAL_FIT,
        description: "Graphics card and CPU cooler fit inside the case",
        applies: |c| c.case.is_some() && (c.gpu.is_some() || c.cooling.is_some()),
        check: check_physical_fit,
    },
    Rule {
        name: RULE_FORM_FACTOR,
        description: "Motherboard form factor is supported by the case",
        applies: |c| c.case.is_some() && c.motherboard.is_some(),
        check: check_form_factor,
    },
    Rule {
        name: RULE_PERFORMANCE,
        description: "CPU and graphics card are in comparable performance classes",
        applies: |c| c.cpu.is_some() && c.gpu.is_some(),
        check: check_performance,
    },
];

// ---------------------------------------------------------------------------
// Socket
// ---------------------------------------------------------------------------

fn check_socket(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let (Some(cpu), Some(board)) = (&ctx.components.cpu, &ctx.components.motherboard) else {
        return Vec::new();
    };
    let pair = [Category::Cpu, Category::Motherboard];

    match (
        cpu.parse_spec(SOCKET_KEYS, Socket::parse),
        board.parse_spec(SOCKET_KEYS, Socket::parse),
    ) {
        (Some(a), Some(b)) if a != b => vec![Finding::error(
            ErrorType::SocketMismatch,
            messages::socket_mismatch(&a, &b),
            &pair,
        )],
        (Some(_), Some(_)) => Vec::new(),
        _ => vec![Finding::warning(
            WarningType::Socket,
            messages::socket_unknown(),
            &pair,
        )],
    }
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

fn board_memory(board: &Component) -> Option<Vec<MemoryGeneration>> {
    board.parse_spec(MEMORY_TYPE_KEYS, |v| {
        let generations = MemoryGeneration::parse_all(v);
        (!generations.is_empty()).then_some(generations)
    })
}

fn check_memory(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let Some(board) = &ctx.components.motherboard else {
        return Vec::new();
    };
    let modules = &ctx.components.ram;
    let pair = [Category::Ram, Category::Motherboard];
    let mut findings = Vec::new();

    let module_generations: Vec<Option<MemoryGeneration>> = modules
        .iter()
        .map(|m| m.parse_spec(MEMORY_TYPE_KEYS, MemoryGeneration::parse))
        .collect();

    match board_memory(board) {
        Some(supported) => {
            // BTreeSet keeps the message independent of module order.
            let unsupported: BTreeSet<MemoryGeneration> = module_generations
                .iter()
                .flatten()
                .filter(|g| !supported.contains(g))
                .copied()
                .collect();
            if !unsupported.is_empty() {
                let unsupported: Vec<_> = unsupported.into_iter().collect();
                findings.push(Finding::error(
                    ErrorType::MemoryIncompatible,
                    messages::memory_mismatch(&unsupported, &supported),
                    &pair,
                ));
            }
            if module_generations.iter().any(Option::is_none) {
                findings.push(Finding::warning(
                    WarningType::Memory,
                    messages::memory_unknown(),
                    &pair,
                ));
            }
        }
        None => findings.push(Finding::warning(
            WarningType::Memory,
            messages::memory_unknown(),
            &pair,
        )),
    }

    if let Some(slots) = board.parse_spec(RAM_SLOT_KEYS, parse_number) {
        if slots > 0 && modules.len() > slots as usize {
            findings.push(Finding::error(
                ErrorType::MemoryIncompatible,
                messages::memory_slots_exceeded(modules.len(), slots),
                &pair,
            ));
        }
    }

    findings
}

// ---------------------------------------------------------------------------
// Power
// ---------------------------------------------------------------------------

/// Smallest PSU rating that satisfies the headroom factor.
pub fn recommended_psu_watts(estimated: Watts, headroom_factor: f64) -> Watts {
    // The epsilon absorbs binary float error (420 × 1.2 = 504.00000000000006).
    let exact = f64::from(estimated) * headroom_factor;
    (exact - 1e-9).ceil().max(0.0) as Watts
}

fn check_power(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let Some(psu) = &ctx.components.psu else {
        return Vec::new();
    };
    let Some(rated) = psu.parse_spec(PSU_WATTAGE_KEYS, parse_watts) else {
        return vec![Finding::warning(
            WarningType::Power,
            messages::power_unknown(),
            &[Category::Psu],
        )];
    };

    let estimated = ctx.estimated_power;
    let recommended = recommended_psu_watts(estimated, ctx.config.headroom_factor);

    if rated < estimated {
        vec![Finding::error(
            ErrorType::PowerInsufficient,
            messages::power_insufficient(rated, estimated),
            &[Category::Psu],
        )]
    } else if rated < recommended {
        vec![Finding::warning(
            WarningType::Power,
            messages::power_low_headroom(rated, recommended),
            &[Category::Psu],
        )]
    } else {
        Vec::new()
    }
}

// ---------------------------------------------------------------------------
// Physical fit
// ---------------------------------------------------------------------------

/// Compare a part dimension against a case clearance.
fn clearance(
    part: &Component,
    part_keys: &[&str],
    case: &Component,
    case_keys: &[&str],
    pair: [Category; 2],
    too_big: fn(u32, u32) -> String,
    unknown: fn() -> String,
) -> Option<Finding> {
    match (
        part.parse_spec(part_keys, parse_millimetres),
        case.parse_spec(case_keys, parse_millimetres),
    ) {
        (Some(size), Some(max)) if size > max => Some(Finding::error(
            ErrorType::SizeConflict,
            too_big(size, max),
            &pair,
        )),
        (Some(_), Some(_)) => None,
        _ => Some(Finding::warning(WarningType::Size, unknown(), &pair)),
    }
}

fn check_physical_fit(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let Some(case) = &ctx.components.case else {
        return Vec::new();
    };
    let mut findings = Vec::new();

    if let Some(gpu) = &ctx.components.gpu {
        findings.extend(clearance(
            gpu,
            GPU_LENGTH_KEYS,
            case,
            CASE_MAX_GPU_LENGTH_KEYS,
            [Category::Gpu, Category::Case],
            messages::gpu_too_long,
            messages::gpu_length_unknown,
        ));
    }
    if let Some(cooler) = &ctx.components.cooling {
        findings.extend(clearance(
            cooler,
            COOLER_HEIGHT_KEYS,
            case,
            CASE_MAX_COOLER_HEIGHT_KEYS,
            [Category::Cooling, Category::Case],
            messages::cooler_too_tall,
            messages::cooler_height_unknown,
        ));
    }

    findings
}

// ---------------------------------------------------------------------------
// Form factor
// ---------------------------------------------------------------------------

fn check_form_factor(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let (Some(board), Some(case)) = (&ctx.components.motherboard, &ctx.components.case) else {
        return Vec::new();
    };
    let pair = [Category::Motherboard, Category::Case];

    let board_ff = board.parse_spec(FORM_FACTOR_KEYS, FormFactor::parse);
    // A case that takes a given size also takes every smaller one.
    let largest = case.parse_spec(CASE_FORM_FACTOR_KEYS, |v| {
        FormFactor::parse_all(v).into_iter().max()
    });

    match (board_ff, largest) {
        (Some(ff), Some(max)) if ff > max => vec![Finding::error(
            ErrorType::SizeConflict,
            messages::form_factor_unsupported(ff, max),
            &pair,
        )],
        (Some(_), Some(_)) => Vec::new(),
        _ => vec![Finding::warning(
            WarningType::Size,
            messages::form_factor_unknown(),
            &pair,
        )],
    }
}

// ---------------------------------------------------------------------------
// Performance balance
// ---------------------------------------------------------------------------

fn check_performance(ctx: &RuleContext<'_>) -> Vec<Finding> {
    let (Some(cpu), Some(gpu)) = (&ctx.components.cpu, &ctx.components.gpu) else {
        return Vec::new();
    };
    let cpu_tier = PerformanceTier::for_cpu(cpu.price);
    let gpu_tier = PerformanceTier::for_gpu(gpu.price);

    if cpu_tier.gap(gpu_tier) >= ctx.config.performance_tier_gap {
        vec![Finding::warning(
            WarningType::Performance,
            messages::performance_imbalance(cpu_tier, gpu_tier),
            &[Category::Cpu, Category::Gpu],
        )]
    } else {
        Vec::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
