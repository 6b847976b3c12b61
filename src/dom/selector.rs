use crate::dom::dom_model::UiNode;
use crate::error::AutofillError;

// ============================================================================
// Mini selector language
// ============================================================================
//
// Supports the subset the platform adapters actually use: tag, #id, .class,
// [attr], [attr=v], [attr*=v], [attr^=v], [attr$=v], compounds of those, and
// comma-separated alternatives. No combinators.

#[derive(Debug, Clone)]
pub struct Selector {
    compounds: Vec<Compound>,
}

#[derive(Debug, Clone, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatcher>,
}

#[derive(Debug, Clone)]
struct AttrMatcher {
    name: String,
    op: AttrOp,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals,
    Contains,
    StartsWith,
    EndsWith,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, AutofillError> {
        let mut compounds = Vec::new();
        for part in input.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(parse_error(input, "empty selector"));
            }
            compounds.push(parse_compound(input, part)?);
        }
        Ok(Self { compounds })
    }

    /// A node matches when any comma alternative matches.
    pub fn matches(&self, node: &UiNode) -> bool {
        self.compounds.iter().any(|c| compound_matches(c, node))
    }
}

fn parse_error(selector: &str, reason: &str) -> AutofillError {
    AutofillError::Selector {
        selector: selector.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_compound(whole: &str, part: &str) -> Result<Compound, AutofillError> {
    if part.chars().any(|c| c.is_whitespace()) {
        return Err(parse_error(whole, "combinators are not supported"));
    }

    let mut compound = Compound::default();
    let bytes = part.as_bytes();
    let mut i = 0usize;

    // Optional leading tag or universal selector
    if bytes[0] != b'#' && bytes[0] != b'.' && bytes[0] != b'[' {
        if bytes[0] == b'*' {
            i = 1;
        } else {
            let end = name_end(bytes, 0);
            if end == 0 {
                return Err(parse_error(whole, "expected tag name"));
            }
            compound.tag = Some(part[..end].to_ascii_lowercase());
            i = end;
        }
    }

    while i < bytes.len() {
        match bytes[i] {
            b'#' => {
                let end = name_end(bytes, i + 1);
                if end == i + 1 {
                    return Err(parse_error(whole, "empty id"));
                }
                compound.id = Some(part[i + 1..end].to_string());
                i = end;
            }
            b'.' => {
                let end = name_end(bytes, i + 1);
                if end == i + 1 {
                    return Err(parse_error(whole, "empty class"));
                }
                compound.classes.push(part[i + 1..end].to_string());
                i = end;
            }
            b'[' => {
                let close = part[i..]
                    .find(']')
                    .ok_or_else(|| parse_error(whole, "unclosed attribute selector"))?
                    + i;
                compound.attrs.push(parse_attr(whole, &part[i + 1..close])?);
                i = close + 1;
            }
            _ => return Err(parse_error(whole, "unexpected character")),
        }
    }

    Ok(compound)
}

/// End index of an identifier run starting at `start`.
fn name_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len()
        && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'-' || bytes[end] == b'_')
    {
        end += 1;
    }
    end
}

fn parse_attr(whole: &str, body: &str) -> Result<AttrMatcher, AutofillError> {
    let ops = [
        ("*=", AttrOp::Contains),
        ("^=", AttrOp::StartsWith),
        ("$=", AttrOp::EndsWith),
        ("=", AttrOp::Equals),
    ];

    for (token, op) in ops {
        if let Some(pos) = body.find(token) {
            let name = body[..pos].trim();
            let value = body[pos + token.len()..]
                .trim()
                .trim_matches('"')
                .trim_matches('\'');
            if name.is_empty() {
                return Err(parse_error(whole, "empty attribute name"));
            }
            return Ok(AttrMatcher {
                name: name.to_ascii_lowercase(),
                op,
                value: value.to_string(),
            });
        }
    }

    let name = body.trim();
    if name.is_empty() {
        return Err(parse_error(whole, "empty attribute name"));
    }
    Ok(AttrMatcher {
        name: name.to_ascii_lowercase(),
        op: AttrOp::Exists,
        value: String::new(),
    })
}

fn compound_matches(compound: &Compound, node: &UiNode) -> bool {
    if let Some(tag) = &compound.tag {
        if node.tag != *tag {
            return false;
        }
    }
    if let Some(id) = &compound.id {
        if node.attr("id") != Some(id.as_str()) {
            return false;
        }
    }
    for class in &compound.classes {
        if !node.has_class(class) {
            return false;
        }
    }
    for matcher in &compound.attrs {
        let Some(actual) = node.attr(&matcher.name) else {
            return false;
        };
        let ok = match matcher.op {
            AttrOp::Exists => true,
            AttrOp::Equals => actual == matcher.value,
            AttrOp::Contains => actual.contains(&matcher.value),
            AttrOp::StartsWith => actual.starts_with(&matcher.value),
            AttrOp::EndsWith => actual.ends_with(&matcher.value),
        };
        if !ok {
            return false;
        }
    }
    true
}
