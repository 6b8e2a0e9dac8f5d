//! Build evaluator: pure logic, no I/O.
//!
//! Validates the build shape, computes price and power totals, then folds
//! the rule set into a single [`CompatibilityReport`].

use serde::Serialize;

use crate::build::Build;
use crate::config::EngineConfig;
use crate::error::CoreError;
use crate::power::estimate_power;
use crate::price::total_price;
use crate::types::{Price, Watts};

use super::finding::{CompatibilityReport, Finding};
use super::rules::{Rule, RuleContext, RULES};

/// Everything the engine derives from one build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub compatibility: CompatibilityReport,
    pub total_price: Price,
    pub estimated_power: Watts,
}

/// Evaluate a build with the default engine configuration.
pub fn evaluate(build: &Build) -> Result<Evaluation, CoreError> {
    evaluate_with(build, &EngineConfig::default())
}

/// Evaluate a build.
///
/// Incompatibility is data in the returned report. `Err` means the input
/// itself is malformed (a slot holding the wrong category, a component
/// without identifying fields) or the configuration is unusable.
pub fn evaluate_with(build: &Build, config: &EngineConfig) -> Result<Evaluation, CoreError> {
    config.validate()?;
    build.validate()?;

    let total_price = total_price(&build.components);
    let estimated_power = estimate_power(&build.components, config);

    let ctx = RuleContext {
        components: &build.components,
        estimated_power,
        config,
    };
    let compatibility = CompatibilityReport::from_findings(run_rules(RULES, &ctx));

    tracing::debug!(
        build_name = %build.build_name,
        total_price,
        estimated_power,
        errors = compatibility.errors.len(),
        warnings = compatibility.warnings.len(),
        "Build evaluated"
    );

    Ok(Evaluation {
        compatibility,
        total_price,
        estimated_power,
    })
}

/// Run every applicable rule in order and concatenate the findings.
pub fn run_rules(rules: &[Rule], ctx: &RuleContext<'_>) -> Vec<Finding> {
    let mut findings = Vec::new();
    for rule in rules {
        if !(rule.applies)(ctx.components) {
            continue;
        }
        let produced = (rule.check)(ctx);
        tracing::trace!(rule = rule.name, findings = produced.len(), "Rule checked");
        findings.extend(produced);
    }
    findings
}
