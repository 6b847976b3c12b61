use crate::dom::dom_model::SelectOption;

/// Fuzzy option matching for selects: exact, then prefix in either
/// direction, then substring in either direction. Case-insensitive on both
/// option text and option value. `None` means leave the select untouched.
pub fn best_dropdown_option(options: &[SelectOption], desired: &str) -> Option<String> {
    let desired = desired.trim().to_lowercase();
    if desired.is_empty() {
        return None;
    }

    find_option(options, |text, value| text == desired || value == desired)
        .or_else(|| {
            find_option(options, |text, value| {
                either_prefix(text, &desired) || either_prefix(value, &desired)
            })
        })
        .or_else(|| {
            find_option(options, |text, value| {
                loose_contains(text, &desired) || loose_contains(value, &desired)
            })
        })
}

fn find_option(
    options: &[SelectOption],
    predicate: impl Fn(&str, &str) -> bool,
) -> Option<String> {
    options.iter().find_map(|option| {
        let text = option.text.trim().to_lowercase();
        let value = option.value.trim().to_lowercase();
        if predicate(&text, &value) {
            // Options without an explicit value submit their text.
            if option.value.trim().is_empty() {
                Some(option.text.trim().to_string())
            } else {
                Some(option.value.clone())
            }
        } else {
            None
        }
    })
}

fn either_prefix(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.starts_with(b) || b.starts_with(a))
}

/// Substring match in either direction; empty strings never match.
pub fn loose_contains(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}
