//! Handlers for the `/builds` resource.
//!
//! Builds arrive fully resolved (catalog records already looked up by the
//! caller). The handler only shuttles JSON in and out of the engine.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use pcbuild_core::build::{Build, BuildComponents};
use pcbuild_core::compatibility::finding::{CompatibilityReport, CompatibilityStatus};
use pcbuild_core::compatibility::rules::RULES;
use pcbuild_core::types::{Price, Watts};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// The submitted build echoed back with freshly derived values.
#[derive(Debug, Serialize)]
pub struct EvaluatedBuild {
    pub build_name: String,
    pub components: BuildComponents,
    pub total_price: Price,
    pub estimated_power: Watts,
    pub compatibility_status: CompatibilityStatus,
}

#[derive(Debug, Serialize)]
pub struct Totals {
    pub price: Price,
    pub power: Watts,
}

#[derive(Debug, Serialize)]
pub struct BuildCheckResponse {
    pub build: EvaluatedBuild,
    pub compatibility: CompatibilityReport,
    pub totals: Totals,
}

/// Public description of one compatibility rule.
#[derive(Debug, Serialize)]
pub struct RuleInfo {
    pub name: &'static str,
    pub description: &'static str,
}

// ---------------------------------------------------------------------------
// POST /builds/check
// ---------------------------------------------------------------------------

/// POST /api/v1/builds/check
///
/// Evaluate a build and return its totals and compatibility verdict.
/// An incompatible build is a successful response; only malformed input
/// yields an error.
pub async fn check_build(
    State(state): State<AppState>,
    payload: Result<Json<Build>, JsonRejection>,
) -> AppResult<Json<DataResponse<BuildCheckResponse>>> {
    let Json(build) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let evaluation = pcbuild_core::evaluate_with(&build, &state.config.engine)?;
    let status = evaluation.compatibility.status();

    tracing::info!(
        build_name = %build.build_name,
        status = ?status,
        total_price = evaluation.total_price,
        estimated_power = evaluation.estimated_power,
        "Build checked"
    );

    let response = BuildCheckResponse {
        build: EvaluatedBuild {
            build_name: build.build_name,
            components: build.components,
            total_price: evaluation.total_price,
            estimated_power: evaluation.estimated_power,
            compatibility_status: status,
        },
        compatibility: evaluation.compatibility,
        totals: Totals {
            price: evaluation.total_price,
            power: evaluation.estimated_power,
        },
    };

    Ok(Json(DataResponse::new(response)))
}

// ---------------------------------------------------------------------------
// GET /builds/rules
// ---------------------------------------------------------------------------

/// GET /api/v1/builds/rules
///
/// List the compatibility rules in evaluation order.
pub async fn list_rules() -> Json<DataResponse<Vec<RuleInfo>>> {
    let rules = RULES
        .iter()
        .map(|r| RuleInfo {
            name: r.name,
            description: r.description,
        })
        .collect();
    Json(DataResponse::new(rules))
}
