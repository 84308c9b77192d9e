//! Translation of Wordnik's loosely shaped JSON into the session's types.
//!
//! Every endpoint answers with an array and only the first element is used.
//! A body that does not have the expected shape is a [`FetchError::Parse`],
//! a well formed body without the wanted field is [`FetchError::NotFound`].

use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;

/// One relationship group of `relatedWords`
#[derive(Debug, Deserialize)]
struct RelatedWords {
    words: Vec<String>,
}

/// Synonyms of the first relationship group, in API order
pub fn decode_synonyms(body: &str) -> Result<Vec<String>, FetchError> {
    let groups: Vec<RelatedWords> = serde_json::from_str(body)?;

    let words = groups
        .into_iter()
        .next()
        .map(|group| group.words)
        .ok_or(FetchError::NotFound)?;

    if words.is_empty() {
        return Err(FetchError::NotFound);
    }

    Ok(words)
}

/// `text` of the first definition
pub fn decode_definition(body: &str) -> Result<String, FetchError> {
    first_string_field(body, "text")
}

/// `fileUrl` of the first audio entry
pub fn decode_audio(body: &str) -> Result<String, FetchError> {
    first_string_field(body, "fileUrl")
}

fn first_string_field(body: &str, field: &str) -> Result<String, FetchError> {
    let entries: Vec<Value> = serde_json::from_str(body)?;

    entries
        .first()
        .and_then(|entry| entry.get(field))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(FetchError::NotFound)
}
