use serde::{Deserialize, Serialize};

use crate::adapters::adapter::Platform;
use crate::dom::dom_model::NodeId;

/// Everything a candidate profile can answer on an application form. Closed
/// set: anything unrecognized lands on `Unknown` and is skipped at fill time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    Linkedin,
    Github,
    Portfolio,
    Address,
    City,
    State,
    PostalCode,
    Country,
    CurrentCompany,
    CurrentTitle,
    YearsExperience,
    Salary,
    Resume,
    CoverLetter,
    Gender,
    Ethnicity,
    VeteranStatus,
    Disability,
    CustomQuestion,
    Unknown,
}

impl FieldType {
    pub const ALL: &'static [FieldType] = &[
        FieldType::FirstName,
        FieldType::LastName,
        FieldType::FullName,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Linkedin,
        FieldType::Github,
        FieldType::Portfolio,
        FieldType::Address,
        FieldType::City,
        FieldType::State,
        FieldType::PostalCode,
        FieldType::Country,
        FieldType::CurrentCompany,
        FieldType::CurrentTitle,
        FieldType::YearsExperience,
        FieldType::Salary,
        FieldType::Resume,
        FieldType::CoverLetter,
        FieldType::Gender,
        FieldType::Ethnicity,
        FieldType::VeteranStatus,
        FieldType::Disability,
        FieldType::CustomQuestion,
        FieldType::Unknown,
    ];

    /// Demographic/EEO fields are never auto-filled.
    pub fn is_demographic(&self) -> bool {
        matches!(
            self,
            FieldType::Gender
                | FieldType::Ethnicity
                | FieldType::VeteranStatus
                | FieldType::Disability
        )
    }

    /// Upload fields need a real file picker, which only the user can drive.
    pub fn is_upload(&self) -> bool {
        matches!(self, FieldType::Resume | FieldType::CoverLetter)
    }
}

/// Normalized control kind, driving fill dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Textarea,
    Select,
    Radio,
    Checkbox,
    File,
}

/// One classified form control.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedField {
    pub node: NodeId,
    pub field_type: FieldType,
    pub label: String,
    pub input_kind: InputKind,
    pub required: bool,
    pub confidence: f32,
}

/// Outcome of running platform detection over a document.
///
/// Invariant: `is_application_form == false` implies `fields` is empty and
/// `form_root` is `None`.
#[derive(Debug, Clone)]
pub struct FormDetectionResult {
    pub is_application_form: bool,
    pub platform: Platform,
    pub form_root: Option<NodeId>,
    pub fields: Vec<DetectedField>,
    pub job_details: Option<JobDetails>,
}

impl FormDetectionResult {
    /// The "no form here" result for a platform.
    pub fn none(platform: Platform) -> Self {
        Self {
            is_application_form: false,
            platform,
            form_root: None,
            fields: Vec::new(),
            job_details: None,
        }
    }
}

/// Posting metadata scraped alongside the form. Absent parts stay empty
/// rather than failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source_url: String,
}

// ============================================================================
// Transferable descriptors (node handles stripped)
// ============================================================================

/// Serializable view of a detected field. Carries no node handle, so it can
/// cross a process or messaging boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub field_type: FieldType,
    pub label: String,
    pub input_kind: InputKind,
    pub required: bool,
    pub confidence: f32,
}

impl From<&DetectedField> for FieldDescriptor {
    fn from(field: &DetectedField) -> Self {
        Self {
            field_type: field.field_type,
            label: field.label.clone(),
            input_kind: field.input_kind,
            required: field.required,
            confidence: field.confidence,
        }
    }
}

/// Serializable detection report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSummary {
    pub url: String,
    pub platform: String,
    pub is_application_form: bool,
    pub fields: Vec<FieldDescriptor>,
    pub job_details: Option<JobDetails>,
}

impl DetectionSummary {
    pub fn from_detection(url: &str, detection: &FormDetectionResult) -> Self {
        Self {
            url: url.to_string(),
            platform: detection.platform.name().to_string(),
            is_application_form: detection.is_application_form,
            fields: detection.fields.iter().map(FieldDescriptor::from).collect(),
            job_details: detection.job_details.clone(),
        }
    }
}
