//! Typed response models for the API endpoints and their deserialization.
//!
//! Upstream documents routinely carry `null` or omit fields entirely, so
//! every string field deserializes those to `""`, meaning "not provided by
//! the upstream source". The expected shape is chosen by the endpoint
//! that issued the request; it is never sniffed from the body here.
//!
//! A body with `"status": "error"` is the API's own error document and
//! surfaces as [`Error::Upstream`] with its structured code and message.
//! The documented codes are: apiKeyDisabled, apiKeyExhausted,
//! apiKeyInvalid, apiKeyMissing, parameterInvalid, parametersMissing,
//! rateLimited, sourcesTooMany, sourceDoesNotExist, unexpectedError.
//! Unknown codes are carried through as-is rather than rejected.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::Error;

fn string_or_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// The publisher reference embedded in an article.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleSource {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
}

/// A single article as returned by the headlines and everything endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub url: String,
    #[serde(rename = "urlToImage", default, deserialize_with = "string_or_empty")]
    pub url_to_image: String,
    #[serde(rename = "publishedAt", default, deserialize_with = "string_or_empty")]
    pub published_at: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub content: String,
}

/// A publisher entry from the sources catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Source {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub language: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub country: String,
}

/// Article-bearing response from the headlines and everything endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlesResponse {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub status: String,
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Catalog response from the sources endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcesResponse {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub status: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Extract the `(code, message)` pair if `value` is the API error shape.
pub(crate) fn upstream_error_parts(value: &Value) -> Option<(String, String)> {
    if value.get("status").and_then(Value::as_str) != Some("error") {
        return None;
    }
    let code = value
        .get("code")
        .and_then(Value::as_str)
        .unwrap_or("unexpectedError")
        .to_string();
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Some((code, message))
}

fn parse_value(body: &str) -> Result<Value, Error> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::Response(format!("invalid JSON response: {e}")))?;
    if let Some((code, message)) = upstream_error_parts(&value) {
        return Err(Error::Upstream { code, message });
    }
    Ok(value)
}

/// Deserialize an article-bearing body.
pub fn parse_articles(body: &str) -> Result<ArticlesResponse, Error> {
    let value = parse_value(body)?;
    let response: ArticlesResponse = serde_json::from_value(value)
        .map_err(|e| Error::Response(format!("unexpected article response shape: {e}")))?;
    if response.status != "ok" {
        return Err(Error::Response(format!(
            "unexpected response status '{}'",
            response.status
        )));
    }
    Ok(response)
}

/// Deserialize a sources-catalog body.
pub fn parse_sources(body: &str) -> Result<SourcesResponse, Error> {
    let value = parse_value(body)?;
    let response: SourcesResponse = serde_json::from_value(value)
        .map_err(|e| Error::Response(format!("unexpected source response shape: {e}")))?;
    if response.status != "ok" {
        return Err(Error::Response(format!(
            "unexpected response status '{}'",
            response.status
        )));
    }
    Ok(response)
}
