//! Title and description extraction from markdown sources.
//!
//! Front matter is a YAML block delimited by `---` lines at the very top of a
//! file. When it carries no title, the first H1 heading is used.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Deserializer};

/// Fields read from YAML front matter.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Version the topic first appeared in (`since: v1.1`).
    #[serde(default, deserialize_with = "scalar_text")]
    pub since: Option<String>,
}

/// Accept `since: v1.1` as well as `since: 1.1`, which YAML reads as a number.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Split a source file into its front matter block and the remaining body.
///
/// Returns `(None, content)` when the file doesn't start with a `---` line
/// or the block is never closed.
pub(crate) fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let body = &rest[offset + line.len()..];
            return (Some(&rest[..offset]), body);
        }
        offset += line.len();
    }

    (None, content)
}

/// Parse front matter YAML.
///
/// Malformed YAML is logged and treated as absent.
pub(crate) fn parse_front_matter(yaml: &str) -> FrontMatter {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return FrontMatter::default();
    }
    serde_yaml::from_str(trimmed)
        .inspect_err(|e| tracing::warn!(error = %e, "Invalid front matter, ignoring"))
        .unwrap_or_default()
}

/// Extract the text of the first H1 heading.
///
/// Inline code inside the heading contributes its literal text.
pub(crate) fn extract_h1(markdown: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut buf = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::Text(text) | Event::Code(text) if in_h1 => buf.push_str(&text),
            Event::End(TagEnd::Heading(HeadingLevel::H1)) if in_h1 => {
                let trimmed = buf.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_owned());
                }
                in_h1 = false;
                buf.clear();
            }
            _ => {}
        }
    }

    None
}
