//! Rendering of API payloads as Markdown or JSON.
//!
//! Both input paths normalize into [`Payload`] before anything is
//! formatted: the typed path wraps a response the caller already
//! deserialized, the raw path sniffs an upstream body by its
//! discriminating keys (`status == "error"`, `articles`, `sources`). A
//! single set of rendering functions then runs on the result, so the two
//! paths cannot drift apart.
//!
//! Markdown rendering separates entities with horizontal rules and omits
//! empty fields instead of printing blank lines; the identity fields that
//! every section needs fall back to placeholders (`No title`, `Unknown`).

use serde_json::Value;

use crate::response::{
    upstream_error_parts, Article, ArticlesResponse, Source, SourcesResponse,
};

/// The normalized shape every renderable response reduces to.
#[derive(Debug, Clone)]
pub enum Payload {
    Articles(ArticlesResponse),
    Sources(SourcesResponse),
    Failure { code: String, message: String },
}

impl Payload {
    /// Sniff a raw upstream body by its discriminating keys.
    ///
    /// Returns `None` when the body is not JSON or resembles none of the
    /// known documents; callers pass such bodies through unchanged.
    pub fn sniff(body: &str) -> Option<Payload> {
        let value: Value = serde_json::from_str(body).ok()?;
        if let Some((code, message)) = upstream_error_parts(&value) {
            return Some(Payload::Failure { code, message });
        }
        if value.get("articles").is_some() {
            return serde_json::from_value(value).ok().map(Payload::Articles);
        }
        if value.get("sources").is_some() {
            return serde_json::from_value(value).ok().map(Payload::Sources);
        }
        None
    }
}

/// Render a payload as Markdown.
pub fn markdown(payload: &Payload) -> String {
    match payload {
        Payload::Articles(response) => articles_markdown(response),
        Payload::Sources(response) => sources_markdown(response),
        Payload::Failure { code, message } => failure_markdown(code, message),
    }
}

/// Render a raw upstream body as Markdown, passing bodies that resemble no
/// known document through unmodified.
pub fn markdown_raw(body: &str) -> String {
    match Payload::sniff(body) {
        Some(payload) => markdown(&payload),
        None => body.to_string(),
    }
}

/// Re-serialize a raw upstream body as compact or indented JSON, passing
/// unparseable bodies through unchanged.
pub fn raw_json(body: &str, pretty: bool) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => {
            let rendered = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            rendered.unwrap_or_else(|_| body.to_string())
        }
        Err(_) => body.to_string(),
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn articles_markdown(response: &ArticlesResponse) -> String {
    let mut out = String::new();
    out.push_str("# Articles\n\n");
    out.push_str(&format!("{} result(s).\n\n", response.total_results));

    for (idx, article) in response.articles.iter().enumerate() {
        if idx > 0 {
            out.push_str("---\n\n");
        }
        article_markdown(&mut out, article);
    }

    out
}

fn article_markdown(out: &mut String, article: &Article) {
    let title = non_empty_or(&article.title, "No title");
    out.push_str(&format!("## {title}\n\n"));
    out.push_str(&format!(
        "**Source**: {}\n",
        non_empty_or(&article.source.name, "Unknown")
    ));
    out.push_str(&format!(
        "**Author**: {}\n",
        non_empty_or(&article.author, "Unknown")
    ));
    if !article.published_at.is_empty() {
        out.push_str(&format!("**Published**: {}\n", article.published_at));
    }
    out.push('\n');

    if !article.description.is_empty() {
        out.push_str(&format!("{}\n\n", article.description));
    }
    if !article.content.is_empty() {
        out.push_str(&format!("{}\n\n", article.content));
    }
    if !article.url_to_image.is_empty() {
        out.push_str(&format!("![{title}]({})\n\n", article.url_to_image));
    }
    if !article.url.is_empty() {
        out.push_str(&format!("[Read more]({})\n\n", article.url));
    }
}

fn sources_markdown(response: &SourcesResponse) -> String {
    let mut out = String::new();
    out.push_str("# Sources\n\n");
    out.push_str(&format!("{} source(s).\n\n", response.sources.len()));

    for (idx, source) in response.sources.iter().enumerate() {
        if idx > 0 {
            out.push_str("---\n\n");
        }
        source_markdown(&mut out, source);
    }

    out
}

fn source_markdown(out: &mut String, source: &Source) {
    out.push_str(&format!("## {}\n\n", non_empty_or(&source.name, "Unknown")));
    if !source.id.is_empty() {
        out.push_str(&format!("**ID**: {}\n", source.id));
    }
    if !source.category.is_empty() {
        out.push_str(&format!("**Category**: {}\n", source.category));
    }
    if !source.language.is_empty() {
        out.push_str(&format!("**Language**: {}\n", source.language));
    }
    if !source.country.is_empty() {
        out.push_str(&format!("**Country**: {}\n", source.country));
    }
    out.push('\n');

    if !source.description.is_empty() {
        out.push_str(&format!("{}\n\n", source.description));
    }
    if !source.url.is_empty() {
        out.push_str(&format!("[{}]({})\n\n", source.url, source.url));
    }
}

fn failure_markdown(code: &str, message: &str) -> String {
    let mut out = String::new();
    out.push_str("# API Error\n\n");
    out.push_str(&format!("**Code**: {code}\n\n"));
    if !message.is_empty() {
        out.push_str(&format!("{message}\n"));
    }
    out
}
