//! Detection of code-like labels.
//!
//! Labels that look like code (API names, component tags, constants) are never
//! localized.

/// Check whether a label looks like a code sample, API name or constant.
///
/// A label is code-like when it contains a back-tick, an angle-bracket tag
/// delimiter, a self-closing tag marker or empty call parentheses, when it
/// uses call syntax such as `merge(a, b)`, or when it is written entirely in
/// upper-case identifier form such as `MAX_POINTS`.
#[must_use]
pub fn looks_like_code(label: &str) -> bool {
    let label = label.trim();
    label.contains('`')
        || label.contains('<')
        || label.contains("/>")
        || label.contains("()")
        || is_call_syntax(label)
        || is_constant(label)
}

/// `name(args)`: an identifier directly followed by an opening parenthesis,
/// closed at the end. `Boolean (Legacy)` is prose, not a call.
fn is_call_syntax(label: &str) -> bool {
    if !label.ends_with(')') {
        return false;
    }
    let Some(open) = label.find('(') else {
        return false;
    };
    let callee = &label[..open];
    !callee.is_empty()
        && !callee.contains(char::is_whitespace)
        && callee.ends_with(|c: char| c.is_alphanumeric() || c == '_')
}

fn is_constant(label: &str) -> bool {
    label.chars().any(|c| c.is_ascii_uppercase())
        && label
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtick_and_tags() {
        assert!(looks_like_code("`merge`"));
        assert!(looks_like_code("<Callout />"));
        assert!(looks_like_code("Using <Tabs> in pages"));
        assert!(looks_like_code("Ends with />"));
    }

    #[test]
    fn test_call_syntax() {
        assert!(looks_like_code("merge()"));
        assert!(looks_like_code("group.create(mask)"));
        assert!(looks_like_code("merge(a, b)"));
    }

    #[test]
    fn test_constants() {
        assert!(looks_like_code("MAX_POINTS"));
        assert!(looks_like_code("IO"));
        assert!(looks_like_code("CDA2"));
    }

    #[test]
    fn test_prose_is_not_code() {
        assert!(!looks_like_code("Group"));
        assert!(!looks_like_code("Boolean (Legacy)"));
        assert!(!looks_like_code("AI Texture"));
        assert!(!looks_like_code("Getting Started"));
        assert!(!looks_like_code(""));
        assert!(!looks_like_code("___"));
        assert!(!looks_like_code("2024"));
    }
}
