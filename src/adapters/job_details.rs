use crate::dom::document::{url_host, url_path, Document};
use crate::fields::field_model::JobDetails;

/// Descriptions are capped so a summary never drags a whole posting along.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Path segments that can never be a company slug.
const GENERIC_SEGMENTS: &[&str] = &[
    "jobs", "careers", "job", "apply", "application", "applications", "postings", "embed",
    "boards",
];

const GENERIC_SUBDOMAINS: &[&str] = &["www", "jobs", "careers", "boards", "apply"];

/// First selector that yields a node with non-empty text.
pub fn first_matching_text(doc: &Document, selectors: &[&str]) -> Option<String> {
    for selector in selectors {
        let Ok(found) = doc.query_all(doc.root(), selector) else {
            continue;
        };
        for id in found {
            let text = doc.text_content(id);
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// First selector match carrying a non-empty attribute value.
pub fn first_attr_text(doc: &Document, selector: &str, attr: &str) -> Option<String> {
    let found = doc.query_all(doc.root(), selector).ok()?;
    found
        .into_iter()
        .filter_map(|id| doc.get(id))
        .filter_map(|node| node.attr(attr))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

pub fn truncate_description(raw: &str) -> String {
    raw.chars().take(MAX_DESCRIPTION_LEN).collect()
}

/// Assemble details from whatever extraction produced. Title or company must
/// be present for the result to be worth returning; everything else defaults
/// to empty.
pub fn build_details(
    url: &str,
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    description: Option<String>,
) -> Option<JobDetails> {
    if title.is_none() && company.is_none() {
        return None;
    }
    Some(JobDetails {
        title: title.unwrap_or_default(),
        company: company.unwrap_or_default(),
        location: location.unwrap_or_default(),
        description: description.unwrap_or_default(),
        source_url: url.to_string(),
    })
}

/// Company from the first meaningful path segment
/// (boards.greenhouse.io/acme, jobs.lever.co/acme/...).
pub fn company_from_path(url: &str) -> Option<String> {
    url_path(url)
        .split('/')
        .map(|segment| segment.trim())
        .find(|segment| {
            !segment.is_empty()
                && !segment.chars().all(|c| c.is_ascii_digit())
                && !GENERIC_SEGMENTS.contains(&segment.to_ascii_lowercase().as_str())
        })
        .map(title_case_slug)
}

/// Company from the tenant subdomain (acme.wd5.myworkdayjobs.com).
pub fn company_from_subdomain(url: &str) -> Option<String> {
    let host = url_host(url);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 3 {
        return None;
    }
    let first = labels[0];
    if first.is_empty() || GENERIC_SUBDOMAINS.contains(&first.to_ascii_lowercase().as_str()) {
        return None;
    }
    Some(title_case_slug(first))
}

/// "acme-corp" -> "Acme Corp".
pub fn title_case_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
