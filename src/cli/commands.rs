use chrono::NaiveDate;

use crate::adapters::registry::AdapterRegistry;
use crate::classify::classifier::FieldClassifier;
use crate::classify::discovery::collect_fields;
use crate::cli::config::AppConfig;
use crate::dom::document::Document;
use crate::dom::snapshot::parse_snapshot;
use crate::error::AutofillError;
use crate::fields::field_model::{
    DetectedField, DetectionSummary, FieldDescriptor, FieldType, FormDetectionResult,
};
use crate::fill::commit::NativeCommit;
use crate::fill::engine::{fill_form, plan_fill, undo_fill};
use crate::fill::fill_model::{FillPlan, FillSummary, FormFillResult, PlannedAction, PlannedStep};
use crate::profile::mapper::parse_date;
use crate::profile::profile_model::Profile;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::AutofillEvent;

// ============================================================================
// Input loading
// ============================================================================

/// Read and parse a page snapshot JSON file.
pub fn load_page(path: &str) -> Result<Document, AutofillError> {
    let content = std::fs::read_to_string(path).map_err(|e| AutofillError::FileRead {
        path: path.to_string(),
        source: e,
    })?;
    parse_snapshot(&content)
}

/// Load a candidate profile. `.json` files parse as JSON, anything else as YAML.
pub fn load_profile(path: &str) -> Result<Profile, AutofillError> {
    let content = std::fs::read_to_string(path).map_err(|e| AutofillError::FileRead {
        path: path.to_string(),
        source: e,
    })?;
    if path.ends_with(".json") {
        Profile::from_json_str(&content)
    } else {
        Profile::from_yaml_str(&content)
    }
}

// ============================================================================
// detect subcommand
// ============================================================================

pub fn cmd_detect(
    page_path: &str,
    json: bool,
    config: &AppConfig,
    verbose: u8,
) -> Result<(), AutofillError> {
    let doc = load_page(page_path)?;
    let url = doc.url().to_string();

    if verbose > 0 {
        eprintln!("Detecting platform for {}...", url);
    }

    let mut registry = build_registry(config);
    let classifier = FieldClassifier::new();
    let adapter = registry.resolve(&url);
    let detection = adapter.detect_form(&doc, &classifier);

    if json {
        let summary = DetectionSummary::from_detection(&url, &detection);
        println!("{}", to_json(&summary, "detection summary")?);
    } else {
        print!("{}", format_detection_report(&url, &detection));
    }

    Ok(())
}

// ============================================================================
// classify subcommand
// ============================================================================

/// Classify every fillable control in the page, detection aside.
pub fn cmd_classify(page_path: &str, json: bool, verbose: u8) -> Result<(), AutofillError> {
    let doc = load_page(page_path)?;
    let classifier = FieldClassifier::new();
    let nodes = collect_fields(&doc, doc.root());
    let fields = classifier.detect_fields(&doc, &nodes);

    if verbose > 0 {
        eprintln!("Classified {} controls in {}", fields.len(), doc.url());
    }

    if json {
        let descriptors: Vec<FieldDescriptor> = fields.iter().map(FieldDescriptor::from).collect();
        println!("{}", to_json(&descriptors, "classified fields")?);
    } else {
        print!("{}", format_classify_report(doc.url(), &fields));
    }

    Ok(())
}

// ============================================================================
// fill subcommand
// ============================================================================

/// Fill a detected form and return whether nothing failed.
pub fn cmd_fill(
    page_path: &str,
    profile_path: &str,
    undo: bool,
    plan_only: bool,
    json: bool,
    trace_path: Option<&str>,
    config: &AppConfig,
    verbose: u8,
) -> Result<bool, AutofillError> {
    let mut doc = load_page(page_path)?;
    let profile = load_profile(profile_path)?;
    let url = doc.url().to_string();

    let mut registry = build_registry(config);
    let classifier = FieldClassifier::new();
    let adapter = registry.resolve(&url);
    let platform = adapter.platform();
    let detection = adapter.detect_form(&doc, &classifier);

    // CLI flag wins over the config file.
    let tracer = match trace_path.or(config.fill.trace.as_deref()) {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    tracer.log(
        &AutofillEvent::now("detect", &url)
            .with_platform(platform)
            .with_outcome(if detection.is_application_form {
                "form"
            } else {
                "no_form"
            }),
    );

    if !detection.is_application_form {
        println!("No application form detected at {}", url);
        return Ok(true);
    }

    let today = resolve_today(config);
    if verbose > 0 {
        eprintln!(
            "Platform {}: {} fields (reference date {})",
            platform.name(),
            detection.fields.len(),
            today
        );
    }

    if plan_only {
        let plans = plan_fill(&detection.fields, &profile, today);
        if json {
            let steps: Vec<PlannedStep> = plans.iter().map(PlannedStep::from_plan).collect();
            println!("{}", to_json(&steps, "fill plan")?);
        } else {
            print!("{}", format_plan_report(&url, &plans));
        }
        return Ok(true);
    }

    let fill = fill_form(&mut doc, &detection.fields, &profile, &NativeCommit, today);

    for result in &fill.results {
        let mut event = AutofillEvent::now("fill", &url)
            .with_platform(platform)
            .with_field(&result.field)
            .with_outcome(result.outcome_label())
            .with_value_len(result.value_filled.chars().count())
            .with_confidence(result.field.confidence);
        if let Some(reason) = &result.error {
            event = event.with_reason(reason);
        }
        tracer.log(&event);
    }

    let restored = if undo {
        let count = undo_fill(&mut doc, &fill, &NativeCommit);
        tracer.log(
            &AutofillEvent::now("undo", &url)
                .with_platform(platform)
                .with_outcome(format!("{} restored", count)),
        );
        Some(count)
    } else {
        None
    };

    if json {
        let summary = FillSummary::from_fill(&fill);
        println!("{}", to_json(&summary, "fill summary")?);
    } else {
        print!("{}", format_fill_report(&url, &fill, restored));
    }

    Ok(fill.failed_fields == 0)
}

// ============================================================================
// Helpers
// ============================================================================

/// Registry from config rules, or the built-in set when none are given.
fn build_registry(config: &AppConfig) -> AdapterRegistry {
    if config.platforms.is_empty() {
        AdapterRegistry::new()
    } else {
        AdapterRegistry::with_rules(config.platforms.clone())
    }
}

/// Reference date for experience math: config override, else the local date.
fn resolve_today(config: &AppConfig) -> NaiveDate {
    config
        .fill
        .today
        .as_deref()
        .and_then(parse_date)
        .unwrap_or_else(|| chrono::Local::now().date_naive())
}

fn to_json<T: serde::Serialize>(value: &T, context: &str) -> Result<String, AutofillError> {
    serde_json::to_string_pretty(value).map_err(|e| AutofillError::Serialize {
        context: context.to_string(),
        source: e,
    })
}

// ============================================================================
// Console reports
// ============================================================================

/// Format a detection result for terminal output.
///
/// Produces output like:
/// ```text
/// === Form Detection: https://boards.greenhouse.io/acme/jobs/123 ===
///
/// Platform: greenhouse
/// ✓ Application form detected (4 fields)
///
///   [0.95] Email            text      Email address *
///   [0.75] FirstName        text      First name
///
/// Job: Senior Engineer at Acme (Remote)
/// ```
pub fn format_detection_report(url: &str, detection: &FormDetectionResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Form Detection: {} ===\n\n", url));
    out.push_str(&format!("Platform: {}\n", detection.platform.name()));

    if !detection.is_application_form {
        out.push_str("\u{2717} No application form detected\n");
        return out;
    }

    out.push_str(&format!(
        "\u{2713} Application form detected ({} fields)\n\n",
        detection.fields.len()
    ));

    for field in &detection.fields {
        out.push_str(&format_field_line(field));
    }

    if let Some(details) = &detection.job_details {
        out.push_str(&format!("\nJob: {}", details.title));
        if !details.company.is_empty() {
            out.push_str(&format!(" at {}", details.company));
        }
        if !details.location.is_empty() {
            out.push_str(&format!(" ({})", details.location));
        }
        out.push('\n');
    }

    out
}

pub fn format_classify_report(url: &str, fields: &[DetectedField]) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Field Classification: {} ===\n\n", url));

    if fields.is_empty() {
        out.push_str("No fillable controls found\n");
        return out;
    }

    for field in fields {
        out.push_str(&format_field_line(field));
    }

    let recognized = fields
        .iter()
        .filter(|f| f.field_type != FieldType::Unknown)
        .count();
    out.push_str(&format!(
        "\n=== {} controls, {} recognized ===\n",
        fields.len(),
        recognized
    ));

    out
}

pub fn format_plan_report(url: &str, plans: &[FillPlan]) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Fill Plan: {} ===\n\n", url));

    let mut fills = 0;
    for plan in plans {
        let type_name = format!("{:?}", plan.field.field_type);
        match &plan.action {
            PlannedAction::Fill(value) => {
                fills += 1;
                out.push_str(&format!("  \u{2713} {:<16} \"{}\"\n", type_name, value));
            }
            PlannedAction::Skip(reason) => {
                out.push_str(&format!("  - {:<16} {}\n", type_name, reason));
            }
        }
    }

    out.push_str(&format!(
        "\n=== {} to fill, {} skipped ({} total) ===\n",
        fills,
        plans.len() - fills,
        plans.len()
    ));

    out
}

/// Format a fill pass for terminal output.
///
/// Produces output like:
/// ```text
/// === Form Fill: https://jobs.lever.co/acme/123/apply ===
///
/// ✓ Email            filled (24 chars)
/// - Gender           skipped: privacy-sensitive field
/// ✗ Country          no matching option
///
/// === Results: 1 filled, 1 skipped, 1 failed (3 total) ===
/// ```
pub fn format_fill_report(url: &str, fill: &FormFillResult, restored: Option<usize>) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Form Fill: {} ===\n\n", url));

    for result in &fill.results {
        let type_name = format!("{:?}", result.field.field_type);
        if result.success {
            out.push_str(&format!(
                "\u{2713} {:<16} filled ({} chars)\n",
                type_name,
                result.value_filled.chars().count()
            ));
        } else if result.is_skip() {
            out.push_str(&format!(
                "- {:<16} {}\n",
                type_name,
                result.error.as_deref().unwrap_or("skipped")
            ));
        } else {
            out.push_str(&format!(
                "\u{2717} {:<16} {}\n",
                type_name,
                result.error.as_deref().unwrap_or("failed")
            ));
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} filled, {} skipped, {} failed ({} total) ===\n",
        fill.filled_fields, fill.skipped_fields, fill.failed_fields, fill.total_fields
    ));

    if let Some(count) = restored {
        out.push_str(&format!("Undo: {} fields restored\n", count));
    }

    out
}

fn format_field_line(field: &DetectedField) -> String {
    let label = if field.label.is_empty() {
        "(no label)"
    } else {
        field.label.as_str()
    };
    let required = if field.required { " *" } else { "" };
    format!(
        "  [{:.2}] {:<16} {:<9} {}{}\n",
        field.confidence,
        format!("{:?}", field.field_type),
        format!("{:?}", field.input_kind).to_lowercase(),
        label,
        required
    )
}
