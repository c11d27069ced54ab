//! Lenient text fields for documents written by hand or sent by the browser.
//!
//! Timestamps and fret tokens arrive as strings, bare integers, `null` or
//! something else entirely. Strings and integers are kept as text; everything
//! else becomes `None` so validation can report it instead of failing to parse.

use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum Token {
    Text(String),
    Integer(i64),
    Other(IgnoredAny),
}

impl Token {
    fn into_text(self) -> Option<String> {
        match self {
            Token::Text(text) => Some(text),
            Token::Integer(n) => Some(n.to_string()),
            Token::Other(_) => None,
        }
    }
}

/// Deserialize an optional text field, mapping non-text values to `None`.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Token>::deserialize(deserializer)?.and_then(Token::into_text))
}

/// Deserialize a list of text tokens. Non-text entries become empty strings.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tokens = Vec::<Token>::deserialize(deserializer)?;
    Ok(tokens
        .into_iter()
        .map(|token| token.into_text().unwrap_or_default())
        .collect())
}
