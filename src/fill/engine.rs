use chrono::NaiveDate;

use crate::classify::labels::extract_label;
use crate::dom::document::Document;
use crate::dom::dom_model::NodeId;
use crate::fields::field_model::{DetectedField, FieldType, InputKind};
use crate::fill::commit::ValueCommit;
use crate::fill::fill_model::{
    FillPlan, FillResult, FormFillResult, PlannedAction, SKIP_MANUAL_ANSWER, SKIP_NO_DATA,
    SKIP_PRIVACY, SKIP_UPLOAD,
};
use crate::profile::dropdown::{best_dropdown_option, loose_contains};
use crate::profile::mapper::field_value;
use crate::profile::profile_model::Profile;

pub const ERR_NO_OPTION: &str = "no matching option";
pub const ERR_MISSING: &str = "element not found";

const TRUTHY_VALUES: &[&str] = &["yes", "true", "1", "on", "y"];

// ============================================================================
// Planning
// ============================================================================

/// Decide per field what the engine would do, without touching the document.
/// The fill pass consumes exactly this plan, so previews are faithful.
pub fn plan_fill(fields: &[DetectedField], profile: &Profile, today: NaiveDate) -> Vec<FillPlan> {
    fields
        .iter()
        .map(|field| FillPlan {
            field: field.clone(),
            action: plan_action(field, profile, today),
        })
        .collect()
}

/// Skip policy order is fixed: privacy first, uploads, free-form questions,
/// then anything the profile cannot answer.
fn plan_action(field: &DetectedField, profile: &Profile, today: NaiveDate) -> PlannedAction {
    if field.field_type.is_demographic() {
        return PlannedAction::Skip(SKIP_PRIVACY);
    }
    if field.input_kind == InputKind::File || field.field_type.is_upload() {
        return PlannedAction::Skip(SKIP_UPLOAD);
    }
    if field.field_type == FieldType::CustomQuestion {
        return PlannedAction::Skip(SKIP_MANUAL_ANSWER);
    }
    let value = field_value(field.field_type, profile, today);
    if value.trim().is_empty() {
        return PlannedAction::Skip(SKIP_NO_DATA);
    }
    PlannedAction::Fill(value)
}

// ============================================================================
// Fill
// ============================================================================

/// Fill every plannable field. Skips are recorded as non-success results
/// with their reason in `error`; attempted fields capture their previous
/// value before mutation so the pass can be undone.
pub fn fill_form(
    doc: &mut Document,
    fields: &[DetectedField],
    profile: &Profile,
    commit: &dyn ValueCommit,
    today: NaiveDate,
) -> FormFillResult {
    let mut out = FormFillResult {
        total_fields: fields.len(),
        ..Default::default()
    };

    for plan in plan_fill(fields, profile, today) {
        let result = match plan.action {
            PlannedAction::Skip(reason) => {
                out.skipped_fields += 1;
                skip_result(plan.field, reason)
            }
            PlannedAction::Fill(value) => {
                let result = fill_one(doc, commit, &plan.field, &value);
                if result.success {
                    out.filled_fields += 1;
                } else {
                    out.failed_fields += 1;
                }
                result
            }
        };
        out.results.push(result);
    }

    out
}

fn fill_one(
    doc: &mut Document,
    commit: &dyn ValueCommit,
    field: &DetectedField,
    value: &str,
) -> FillResult {
    match field.input_kind {
        InputKind::Text | InputKind::Textarea => fill_text(doc, commit, field, value),
        InputKind::Select => fill_select(doc, commit, field, value),
        InputKind::Radio => fill_radio(doc, commit, field, value),
        InputKind::Checkbox => fill_checkbox(doc, commit, field, value),
        // Planned out earlier; kept for exhaustiveness.
        InputKind::File => skip_result(field.clone(), SKIP_UPLOAD),
    }
}

fn fill_text(
    doc: &mut Document,
    commit: &dyn ValueCommit,
    field: &DetectedField,
    value: &str,
) -> FillResult {
    let Some(previous) = doc.get(field.node).map(|n| n.value.clone()) else {
        return failure(field, field.node, String::new(), ERR_MISSING);
    };
    match commit.commit_text(doc, field.node, value) {
        Ok(()) => success(field, field.node, value.to_string(), previous),
        Err(e) => failure(field, field.node, previous, &e.to_string()),
    }
}

fn fill_select(
    doc: &mut Document,
    commit: &dyn ValueCommit,
    field: &DetectedField,
    desired: &str,
) -> FillResult {
    let (previous, matched) = match doc.get(field.node) {
        Some(node) => (node.value.clone(), best_dropdown_option(&node.options, desired)),
        None => return failure(field, field.node, String::new(), ERR_MISSING),
    };
    let Some(value) = matched else {
        return failure(field, field.node, previous, ERR_NO_OPTION);
    };
    match commit.commit_option(doc, field.node, &value) {
        Ok(()) => success(field, field.node, value, previous),
        Err(e) => failure(field, field.node, previous, &e.to_string()),
    }
}

fn fill_radio(
    doc: &mut Document,
    commit: &dyn ValueCommit,
    field: &DetectedField,
    desired: &str,
) -> FillResult {
    let Some(target) = find_radio_match(doc, field.node, desired) else {
        let reason = if doc.contains(field.node) {
            ERR_NO_OPTION
        } else {
            ERR_MISSING
        };
        return failure(field, field.node, String::new(), reason);
    };
    let previous = doc
        .get(target)
        .map(|n| bool_string(n.checked))
        .unwrap_or_default();
    match commit.commit_checked(doc, target, true) {
        Ok(()) => success(field, target, desired.to_string(), previous),
        Err(e) => failure(field, target, previous, &e.to_string()),
    }
}

fn fill_checkbox(
    doc: &mut Document,
    commit: &dyn ValueCommit,
    field: &DetectedField,
    value: &str,
) -> FillResult {
    let desired = TRUTHY_VALUES.contains(&value.trim().to_lowercase().as_str());
    let Some(previous) = doc.get(field.node).map(|n| bool_string(n.checked)) else {
        return failure(field, field.node, String::new(), ERR_MISSING);
    };
    match commit.commit_checked(doc, field.node, desired) {
        Ok(()) => success(field, field.node, bool_string(desired), previous),
        Err(e) => failure(field, field.node, previous, &e.to_string()),
    }
}

/// Locate the radio in the shared-name group whose value or label matches
/// the desired value, case-insensitively, substring in either direction.
fn find_radio_match(doc: &Document, node: NodeId, desired: &str) -> Option<NodeId> {
    let name = doc.get(node)?.attr("name")?.to_string();
    let desired = desired.trim().to_lowercase();
    if desired.is_empty() {
        return None;
    }

    doc.descendants(doc.root())
        .into_iter()
        .filter(|id| {
            doc.get(*id).is_some_and(|n| {
                n.tag == "input"
                    && n.input_type().unwrap_or("").eq_ignore_ascii_case("radio")
                    && n.attr("name") == Some(name.as_str())
            })
        })
        .find(|id| {
            let Some(n) = doc.get(*id) else { return false };
            let value = n
                .attr("value")
                .unwrap_or(n.value.as_str())
                .trim()
                .to_lowercase();
            if loose_contains(&value, &desired) {
                return true;
            }
            let label = extract_label(doc, *id).to_lowercase();
            loose_contains(&label, &desired)
        })
}

fn bool_string(checked: bool) -> String {
    if checked { "true" } else { "false" }.to_string()
}

fn skip_result(field: DetectedField, reason: &str) -> FillResult {
    let target = field.node;
    FillResult {
        field,
        target,
        success: false,
        value_filled: String::new(),
        previous_value: String::new(),
        error: Some(reason.to_string()),
    }
}

fn success(field: &DetectedField, target: NodeId, value: String, previous: String) -> FillResult {
    FillResult {
        field: field.clone(),
        target,
        success: true,
        value_filled: value,
        previous_value: previous,
        error: None,
    }
}

fn failure(field: &DetectedField, target: NodeId, previous: String, error: &str) -> FillResult {
    FillResult {
        field: field.clone(),
        target,
        success: false,
        value_filled: String::new(),
        previous_value: previous,
        error: Some(error.to_string()),
    }
}

// ============================================================================
// Undo
// ============================================================================

/// Restore every successfully filled field to its captured previous value,
/// re-emitting the same notification protocol. Nodes removed since the fill
/// are skipped silently. Returns the number of fields restored.
pub fn undo_fill(doc: &mut Document, fill: &FormFillResult, commit: &dyn ValueCommit) -> usize {
    let mut restored = 0;
    for result in &fill.results {
        if !result.success {
            continue;
        }
        if !doc.contains(result.target) {
            continue;
        }
        let ok = match result.field.input_kind {
            InputKind::Text | InputKind::Textarea => commit
                .commit_text(doc, result.target, &result.previous_value)
                .is_ok(),
            InputKind::Select => commit
                .commit_option(doc, result.target, &result.previous_value)
                .is_ok(),
            InputKind::Radio | InputKind::Checkbox => commit
                .commit_checked(doc, result.target, result.previous_value == "true")
                .is_ok(),
            InputKind::File => false,
        };
        if ok {
            restored += 1;
        }
    }
    restored
}
