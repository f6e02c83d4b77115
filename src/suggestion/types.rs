//! Suggestion endpoint body decoding
//!
//! The endpoint returns the full restaurant row when a suggestion exists
//! and `{"error": ...}` bodies otherwise. Decoding is strict so the two
//! failure shapes stay distinct: a body that is not JSON at all is an
//! error, a decodable body without a usable name is an absent suggestion.

use serde_json::Value;

/// A usable suggestion extracted from the endpoint body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResult {
    pub name: String,
    pub location: String,
}

/// Decode a suggestion endpoint body.
///
/// # Returns
/// * `Ok(Some(_))` - non-null object with a non-empty string `name`
/// * `Ok(None)` - valid JSON without a usable name
/// * `Err(_)` - the body is not JSON
pub fn decode_suggestion(body: &str) -> Result<Option<SuggestionResult>, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    Ok(extract(&value))
}

/// A usable name never fails on location alone: a missing or non-string
/// location is carried as the empty string.
fn extract(value: &Value) -> Option<SuggestionResult> {
    let object = value.as_object()?;
    let name = object.get("name")?.as_str().filter(|name| !name.is_empty())?;
    let location = object
        .get("location")
        .and_then(Value::as_str)
        .unwrap_or_default();

    Some(SuggestionResult {
        name: name.to_string(),
        location: location.to_string(),
    })
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
