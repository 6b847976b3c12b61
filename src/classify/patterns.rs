use regex::Regex;

use crate::fields::field_model::FieldType;

pub const BASE_PATTERN_CONFIDENCE: f32 = 0.6;
pub const MAX_PATTERN_CONFIDENCE: f32 = 0.95;

/// Ordered signal patterns. Every matching alternative is scored and the
/// longest source wins, so compound patterns ("email address", "current
/// company") outrank the bare words they contain; ties keep the earlier
/// entry. Compound nouns accept space, underscore or hyphen separators so
/// `name` attributes like "first_name" match too.
pub const DEFAULT_FIELD_PATTERNS: &[(FieldType, &[&str])] = &[
    (
        FieldType::FirstName,
        &[r"first[\s_-]*name", r"given[\s_-]*name", r"\bfname\b", r"forename"],
    ),
    (
        FieldType::LastName,
        &[r"last[\s_-]*name", r"family[\s_-]*name", r"\blname\b", r"surname"],
    ),
    (
        FieldType::FullName,
        &[
            r"full[\s_-]*name",
            r"your[\s_-]*name",
            r"legal[\s_-]*name",
            r"applicant[\s_-]*name",
            r"^name$",
        ],
    ),
    (FieldType::Email, &[r"email[\s_-]*address", r"e-?mail"]),
    (
        FieldType::Phone,
        &[r"phone", r"mobile", r"telephone", r"\bcell\b"],
    ),
    (FieldType::Linkedin, &[r"linked[\s_-]*in"]),
    (FieldType::Github, &[r"git[\s_-]*hub"]),
    (
        FieldType::Portfolio,
        &[r"portfolio", r"personal[\s_-]*(web)?site", r"\bwebsite\b"],
    ),
    (
        FieldType::Address,
        &[r"street", r"address[\s_-]*line", r"\baddress\b"],
    ),
    (FieldType::City, &[r"\bcity\b", r"\btown\b"]),
    (FieldType::State, &[r"\bstate\b", r"\bprovince\b", r"\bregion\b"]),
    (FieldType::PostalCode, &[r"\bzip", r"postal"]),
    (FieldType::Country, &[r"country", r"nationality"]),
    (
        FieldType::CurrentCompany,
        &[
            r"current[\s_-]*(company|employer)",
            r"\bemployer\b",
            r"\bcompany\b",
            r"organi[sz]ation",
        ],
    ),
    (
        FieldType::CurrentTitle,
        &[
            r"current[\s_-]*(title|role|position)",
            r"job[\s_-]*title",
            r"\btitle\b",
            r"\brole\b",
        ],
    ),
    (
        FieldType::YearsExperience,
        &[
            r"years[\s_-]*of[\s_-]*experience",
            r"years[\s_-]*experience",
            r"experience[\s_-]*in[\s_-]*years",
            r"yrs[\s_-]*of[\s_-]*exp",
        ],
    ),
    (
        FieldType::Salary,
        &[
            r"salary",
            r"compensation",
            r"expected[\s_-]*pay",
            r"\bpay[\s_-]*range\b",
        ],
    ),
    (
        FieldType::Resume,
        &[r"resume", r"\bcv\b", r"curriculum[\s_-]*vitae"],
    ),
    (
        FieldType::CoverLetter,
        &[r"cover[\s_-]*letter", r"covering[\s_-]*letter"],
    ),
    (FieldType::Gender, &[r"gender", r"\bsex\b"]),
    (
        FieldType::Ethnicity,
        &[r"ethnicity", r"\brace\b", r"hispanic", r"latino"],
    ),
    (FieldType::VeteranStatus, &[r"veteran", r"military"]),
    (FieldType::Disability, &[r"disabilit", r"\bdisabled\b"]),
    (
        FieldType::CustomQuestion,
        &[
            r"why\s*(do\s*you|are\s*you)",
            r"tell\s*us",
            r"describe",
            r"explain",
            r"\bquestion\b",
        ],
    ),
];

struct CompiledPattern {
    regex: Regex,
    source_len: usize,
}

struct PatternEntry {
    field_type: FieldType,
    patterns: Vec<CompiledPattern>,
}

/// Compiled, ordered pattern table. Built once and injected into the
/// classifier; never mutated afterwards.
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Compile a pattern definition list. Patterns that fail to compile are
    /// dropped so one bad entry cannot take out the whole table.
    pub fn compile(definitions: &[(FieldType, &[&str])]) -> Self {
        let entries = definitions
            .iter()
            .map(|(field_type, sources)| PatternEntry {
                field_type: *field_type,
                patterns: sources
                    .iter()
                    .filter_map(|source| {
                        Regex::new(source).ok().map(|regex| CompiledPattern {
                            regex,
                            source_len: source.chars().count(),
                        })
                    })
                    .collect(),
            })
            .collect();
        Self { entries }
    }

    /// Highest-scoring match over a lowercase signal string. Confidence
    /// scales with pattern length; the earlier entry keeps ties.
    pub fn classify(&self, signal: &str) -> Option<(FieldType, f32)> {
        let mut best: Option<(FieldType, f32)> = None;
        for entry in &self.entries {
            for pattern in &entry.patterns {
                if !pattern.regex.is_match(signal) {
                    continue;
                }
                let confidence = pattern_confidence(pattern.source_len);
                if best.map_or(true, |(_, c)| confidence > c) {
                    best = Some((entry.field_type, confidence));
                }
            }
        }
        best
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::compile(DEFAULT_FIELD_PATTERNS)
    }
}

/// Longer patterns encode more context, so they earn slightly more
/// confidence, capped below the input-type shortcut tier.
pub fn pattern_confidence(source_len: usize) -> f32 {
    (BASE_PATTERN_CONFIDENCE + (source_len as f32 / 30.0) * 0.15).min(MAX_PATTERN_CONFIDENCE)
}
