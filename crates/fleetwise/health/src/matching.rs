//! Component-name matching for known-issue lookup.
//!
//! Names are normalized (lowercase, punctuation to spaces, whitespace
//! collapsed) and then matched on first words: a component and an issue
//! match when either name contains the other's first word.
//!
//! This is deliberately loose ("Main winding" matches "Main tank"), so
//! [`best_match`] prefers an exact normalized match before falling back
//! to the first loose match in catalog order.

/// Lowercase, replace non-alphanumerics with spaces and collapse whitespace.
pub fn normalize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// First word of the normalized name, if any.
pub fn first_word(normalized: &str) -> Option<&str> {
    normalized.split(' ').next().filter(|w| !w.is_empty())
}

/// Whether a component name and an issue's component name refer to the
/// same part.
pub fn names_match(component_name: &str, issue_name: &str) -> bool {
    let component = normalize(component_name);
    let issue = normalize(issue_name);
    match (first_word(&component), first_word(&issue)) {
        (Some(cw), Some(iw)) => issue.contains(cw) || component.contains(iw),
        _ => false,
    }
}

/// Pick the candidate that best matches `component_name`.
///
/// An exact normalized match wins; otherwise the first loose match in
/// candidate order.
pub fn best_match<'a, T>(
    component_name: &str,
    candidates: &'a [T],
    name_of: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let wanted = normalize(component_name);
    if wanted.is_empty() {
        return None;
    }
    candidates
        .iter()
        .find(|c| normalize(name_of(c)) == wanted)
        .or_else(|| {
            candidates
                .iter()
                .find(|c| names_match(component_name, name_of(c)))
        })
}
