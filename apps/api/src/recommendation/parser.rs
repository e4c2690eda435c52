//! Response Parser: pulls a `RecommendationResult` out of free-form model text.

use thiserror::Error;

use crate::recommendation::models::RecommendationResult;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No JSON object found in model output")]
    NoJsonObject,

    #[error("Model output is not a valid recommendation: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Returns the span from the first `{` to the last `}` inclusive.
///
/// Greedy on purpose: models often wrap the object in prose. Two separate
/// objects in one reply get merged into a span that will fail to decode.
fn json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Decodes the brace span of `text` strictly. No repair is attempted.
pub fn parse_recommendation(text: &str) -> Result<RecommendationResult, ParseError> {
    let span = json_span(text).ok_or(ParseError::NoJsonObject)?;
    Ok(serde_json::from_str(span)?)
}
