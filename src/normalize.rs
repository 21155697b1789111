//! Turns the assistant's text into the JSON body relayed to the caller.

use std::borrow::Cow;

use serde_json::Value;

use crate::error::Error;

const FENCE: &str = "```";

/// Remove markdown code fences the model may wrap its JSON in.
///
/// Only applies when the trimmed text opens with a fence. Every fence is dropped, together with
/// a `json` (or truncated `jso`) tag and one newline directly after it.
pub fn strip_code_fence(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim();
    if !trimmed.starts_with(FENCE) {
        return Cow::Borrowed(trimmed);
    }
    Cow::Owned(strip_fences(trimmed).trim().to_string())
}

fn strip_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + FENCE.len()..];
        if let Some(tagged) = rest.strip_prefix("jso") {
            rest = tagged.strip_prefix('n').unwrap_or(tagged);
            rest = rest.strip_prefix('\n').unwrap_or(rest);
        }
    }
    out.push_str(rest);
    out
}

/// Clean the assistant's content and parse it as JSON.
///
/// Any valid JSON is accepted; the shape is not checked.
pub fn parse_content(raw: &str) -> Result<Value, Error> {
    Ok(serde_json::from_str(&strip_code_fence(raw))?)
}
