use serde::{Deserialize, Serialize};

use crate::dom::dom_model::NodeId;
use crate::fields::field_model::{DetectedField, FieldDescriptor};

// Skip reasons are part of the host contract; the strings are stable.
pub const SKIP_PRIVACY: &str = "skipped: privacy-sensitive field";
pub const SKIP_UPLOAD: &str = "skipped: requires manual upload";
pub const SKIP_NO_DATA: &str = "skipped: no profile data";
pub const SKIP_MANUAL_ANSWER: &str = "skipped: needs a manual answer";

/// Outcome for one field. `target` is the node that was actually mutated;
/// for radios that is the matched group member, not necessarily the control
/// that was classified.
#[derive(Debug, Clone)]
pub struct FillResult {
    pub field: DetectedField,
    pub target: NodeId,
    pub success: bool,
    pub value_filled: String,
    /// Snapshot taken once, immediately before mutation. Empty for skips.
    pub previous_value: String,
    pub error: Option<String>,
}

/// Aggregate outcome of a fill pass.
#[derive(Debug, Clone, Default)]
pub struct FormFillResult {
    pub total_fields: usize,
    pub filled_fields: usize,
    pub skipped_fields: usize,
    pub failed_fields: usize,
    pub results: Vec<FillResult>,
}

impl FillResult {
    /// Skips are non-successes whose reason carries the skip prefix.
    pub fn is_skip(&self) -> bool {
        self.error
            .as_deref()
            .is_some_and(|e| e.starts_with("skipped:"))
    }

    pub fn outcome_label(&self) -> &'static str {
        if self.success {
            "filled"
        } else if self.is_skip() {
            "skipped"
        } else {
            "failed"
        }
    }
}

/// What the engine would do for one field, decided without touching the
/// document.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedAction {
    Fill(String),
    Skip(&'static str),
}

#[derive(Debug, Clone)]
pub struct FillPlan {
    pub field: DetectedField,
    pub action: PlannedAction,
}

// ============================================================================
// Transferable summary (node handles and values stripped)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillOutcome {
    pub field: FieldDescriptor,
    pub success: bool,
    pub error: Option<String>,
    /// Length of the written value; the value itself never leaves the core.
    pub value_len: usize,
}

/// Serializable view of one planned step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedStep {
    pub field: FieldDescriptor,
    pub action: String,
    pub reason: Option<String>,
    /// Length of the value that would be written, zero for skips.
    pub value_len: usize,
}

impl PlannedStep {
    pub fn from_plan(plan: &FillPlan) -> Self {
        let (action, reason, value_len) = match &plan.action {
            PlannedAction::Fill(value) => ("fill", None, value.chars().count()),
            PlannedAction::Skip(why) => ("skip", Some((*why).to_string()), 0),
        };
        Self {
            field: FieldDescriptor::from(&plan.field),
            action: action.to_string(),
            reason,
            value_len,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillSummary {
    pub total_fields: usize,
    pub filled_fields: usize,
    pub skipped_fields: usize,
    pub failed_fields: usize,
    pub outcomes: Vec<FillOutcome>,
}

impl FillSummary {
    pub fn from_fill(result: &FormFillResult) -> Self {
        Self {
            total_fields: result.total_fields,
            filled_fields: result.filled_fields,
            skipped_fields: result.skipped_fields,
            failed_fields: result.failed_fields,
            outcomes: result
                .results
                .iter()
                .map(|r| FillOutcome {
                    field: FieldDescriptor::from(&r.field),
                    success: r.success,
                    error: r.error.clone(),
                    value_len: r.value_filled.chars().count(),
                })
                .collect(),
        }
    }
}
