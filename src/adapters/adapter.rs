use serde::{Deserialize, Serialize};

use crate::adapters::{generic, greenhouse, lever, linkedin, workday};
use crate::classify::classifier::FieldClassifier;
use crate::classify::discovery::collect_fields;
use crate::dom::document::{url_host, url_path, Document};
use crate::dom::dom_model::NodeId;
use crate::fields::field_model::{FormDetectionResult, JobDetails};

/// The platforms this crate understands. Closed set: dispatch is an
/// exhaustive match, and adding a platform means the compiler walks you
/// through every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Greenhouse,
    Lever,
    Workday,
    Linkedin,
    Generic,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Greenhouse => "greenhouse",
            Platform::Lever => "lever",
            Platform::Workday => "workday",
            Platform::Linkedin => "linkedin",
            Platform::Generic => "generic",
        }
    }
}

/// URL matching rule for one platform. Host patterns are substring matches
/// on the host; path patterns (when present) are substring matches on the
/// path. Rules are data, so hosts can override them from config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformRule {
    pub platform: Platform,
    #[serde(default)]
    pub host_patterns: Vec<String>,
    #[serde(default)]
    pub path_patterns: Vec<String>,
}

impl PlatformRule {
    pub fn matches(&self, url: &str) -> bool {
        // The generic rule backstops everything.
        if matches!(self.platform, Platform::Generic) {
            return true;
        }
        let host = url_host(url).to_ascii_lowercase();
        let path = url_path(url).to_ascii_lowercase();
        let host_ok = self
            .host_patterns
            .iter()
            .any(|p| host.contains(&p.to_ascii_lowercase()));
        let path_ok = self.path_patterns.is_empty()
            || self
                .path_patterns
                .iter()
                .any(|p| path.contains(&p.to_ascii_lowercase()));
        host_ok && path_ok
    }
}

/// Built-in rules for the known ATS hosts, generic last.
pub fn default_rules() -> Vec<PlatformRule> {
    vec![
        PlatformRule {
            platform: Platform::Greenhouse,
            host_patterns: vec!["greenhouse.io".to_string()],
            path_patterns: vec![],
        },
        PlatformRule {
            platform: Platform::Lever,
            host_patterns: vec!["lever.co".to_string()],
            path_patterns: vec![],
        },
        PlatformRule {
            platform: Platform::Workday,
            host_patterns: vec![
                "myworkdayjobs.com".to_string(),
                "myworkdaysite.com".to_string(),
            ],
            path_patterns: vec![],
        },
        PlatformRule {
            platform: Platform::Linkedin,
            host_patterns: vec!["linkedin.com".to_string()],
            path_patterns: vec![],
        },
        PlatformRule {
            platform: Platform::Generic,
            host_patterns: vec![],
            path_patterns: vec![],
        },
    ]
}

/// One platform's detection strategy plus its matching rule.
#[derive(Debug, Clone)]
pub struct PlatformAdapter {
    rule: PlatformRule,
}

impl PlatformAdapter {
    pub fn new(rule: PlatformRule) -> Self {
        Self { rule }
    }

    pub fn platform(&self) -> Platform {
        self.rule.platform
    }

    pub fn matches(&self, url: &str) -> bool {
        self.rule.matches(url)
    }

    /// Run this platform's form detection. Job details are attached only
    /// when a form was actually found.
    pub fn detect_form(&self, doc: &Document, classifier: &FieldClassifier) -> FormDetectionResult {
        let mut detection = match self.rule.platform {
            Platform::Greenhouse => greenhouse::detect(doc, classifier),
            Platform::Lever => lever::detect(doc, classifier),
            Platform::Workday => workday::detect(doc, classifier),
            Platform::Linkedin => linkedin::detect(doc, classifier),
            Platform::Generic => generic::detect(doc, classifier),
        };
        if detection.is_application_form {
            detection.job_details = self.extract_job_details(doc);
        }
        detection
    }

    /// Scrape posting metadata. Total: any internal miss yields `None`.
    pub fn extract_job_details(&self, doc: &Document) -> Option<JobDetails> {
        match self.rule.platform {
            Platform::Greenhouse => greenhouse::job_details(doc),
            Platform::Lever => lever::job_details(doc),
            Platform::Workday => workday::job_details(doc),
            Platform::Linkedin => linkedin::job_details(doc),
            Platform::Generic => generic::job_details(doc),
        }
    }
}

/// Shared tail of every platform's detection: classify the fields under the
/// found root, or report no form. A root with zero fillable controls counts
/// as no form, which keeps the detection invariant honest.
pub fn detection_from_root(
    doc: &Document,
    classifier: &FieldClassifier,
    platform: Platform,
    root: Option<NodeId>,
) -> FormDetectionResult {
    let Some(root) = root else {
        return FormDetectionResult::none(platform);
    };
    let nodes = collect_fields(doc, root);
    if nodes.is_empty() {
        return FormDetectionResult::none(platform);
    }
    let fields = classifier.detect_fields(doc, &nodes);
    FormDetectionResult {
        is_application_form: true,
        platform,
        form_root: Some(root),
        fields,
        job_details: None,
    }
}
