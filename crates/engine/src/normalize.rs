//! Response normalization — extract a JSON object from arbitrary model
//! text and parse it into a typed structure.
//!
//! Extraction uses a balanced-brace scanner rather than a greedy
//! first-`{`-to-last-`}` match: the scanner is string-literal and escape
//! aware, so braces inside JSON strings do not confuse it, and a reply
//! containing two sibling objects yields the first one instead of an
//! unparseable span. If no balanced object exists, Markdown code-fence
//! markers are stripped and the remainder is tried as-is.
//!
//! Guarantee: a fully-typed value matching the expected shape, or a
//! `NormalizeError` — never a partially-populated structure.

use compass_core::error::NormalizeError;
use serde::de::DeserializeOwned;

/// Extract and parse the JSON object embedded in a model reply.
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, NormalizeError> {
    let candidate = match balanced_span(reply) {
        Some(span) => span,
        None => {
            let stripped = strip_fences(reply);
            if !stripped.contains('{') {
                return Err(NormalizeError::NoJsonFound);
            }
            stripped
        }
    };
    serde_json::from_str(candidate).map_err(|e| NormalizeError::Parse(e.to_string()))
}

/// Find the first balanced `{...}` span, tracking string literals and
/// escapes. Returns `None` when no object opens or the braces never
/// balance.
fn balanced_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Strip leading/trailing Markdown code-fence markers from trimmed text.
fn strip_fences(text: &str) -> &str {
    let mut t = text.trim();
    if let Some(rest) = t.strip_prefix("```json") {
        t = rest;
    } else if let Some(rest) = t.strip_prefix("```") {
        t = rest;
    }
    if let Some(rest) = t.strip_suffix("```") {
        t = rest;
    }
    t.trim()
}
