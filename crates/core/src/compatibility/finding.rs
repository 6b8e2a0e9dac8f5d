//! Finding and verdict types.
//!
//! Rules emit [`Finding`]s. A finding is either a blocking error or an
//! advisory warning, and the kind enums are disjoint, so a rule cannot put
//! an error type in the warnings list. [`CompatibilityReport`] partitions
//! findings into the two public lists.

use serde::{Deserialize, Serialize};

use crate::component::Category;

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// Error types. Every error blocks the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    SocketMismatch,
    PowerInsufficient,
    SizeConflict,
    MemoryIncompatible,
}

/// Warning types. Warnings never affect `is_compatible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    Power,
    Socket,
    Memory,
    Size,
    Performance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Blocking,
    Advisory,
}

impl Severity {
    pub fn is_blocking(self) -> bool {
        self == Self::Blocking
    }
}

// ---------------------------------------------------------------------------
// Finding
// ---------------------------------------------------------------------------

/// A single observation produced by one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    Error {
        kind: ErrorType,
        message: String,
        component_types: Vec<Category>,
    },
    Warning {
        kind: WarningType,
        message: String,
        component_types: Vec<Category>,
    },
}

impl Finding {
    pub fn error(kind: ErrorType, message: String, component_types: &[Category]) -> Self {
        Self::Error {
            kind,
            message,
            component_types: component_types.to_vec(),
        }
    }

    pub fn warning(kind: WarningType, message: String, component_types: &[Category]) -> Self {
        Self::Warning {
            kind,
            message,
            component_types: component_types.to_vec(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Error { .. } => Severity::Blocking,
            Self::Warning { .. } => Severity::Advisory,
        }
    }
}

// ---------------------------------------------------------------------------
// Public verdict
// ---------------------------------------------------------------------------

/// An entry of the `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityError {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub message: String,
    pub component_types: Vec<Category>,
    pub blocking: bool,
}

/// An entry of the `warnings` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityWarning {
    #[serde(rename = "type")]
    pub kind: WarningType,
    pub message: String,
    pub component_types: Vec<Category>,
}

/// Aggregated verdict for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub is_compatible: bool,
    pub errors: Vec<CompatibilityError>,
    pub warnings: Vec<CompatibilityWarning>,
}

/// Summary label stored on an evaluated build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityStatus {
    Compatible,
    Warning,
    Incompatible,
}

impl CompatibilityReport {
    /// Partition findings into errors and warnings, keeping rule order.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for finding in findings {
            let blocking = finding.severity().is_blocking();
            match finding {
                Finding::Error {
                    kind,
                    message,
                    component_types,
                } => errors.push(CompatibilityError {
                    kind,
                    message,
                    component_types,
                    blocking,
                }),
                Finding::Warning {
                    kind,
                    message,
                    component_types,
                } => warnings.push(CompatibilityWarning {
                    kind,
                    message,
                    component_types,
                }),
            }
        }

        Self {
            is_compatible: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn status(&self) -> CompatibilityStatus {
        if !self.is_compatible {
            CompatibilityStatus::Incompatible
        } else if !self.warnings.is_empty() {
            CompatibilityStatus::Warning
        } else {
            CompatibilityStatus::Compatible
        }
    }
}
