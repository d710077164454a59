//! Typed request models for the three API endpoints and their
//! query-parameter serialization.
//!
//! Each model serializes itself into an ordered `(name, value)` list by
//! walking its fields in declaration order, so the parameter order on the
//! wire is stable and observable in tests. Per-kind rules live in the
//! small `push_*` helpers below:
//!
//! - strings are included iff non-empty (`apiKey` is an ordinary string);
//! - the `from`/`to` range bounds are date-validated before inclusion;
//! - integers are included iff strictly positive, zero meaning "use the
//!   server default";
//! - enums always carry a concrete value and are always included;
//! - lists are comma-joined in original order and included iff non-empty.

use crate::dates::validate_date;
use crate::enums::{Category, SearchIn, SortBy};
use crate::error::Error;

/// A request that can serialize itself into an ordered list of HTTP query
/// parameters.
pub trait QueryParams {
    fn query_params(&self) -> Result<Vec<(String, String)>, Error>;
}

fn push_str(params: &mut Vec<(String, String)>, name: &str, value: &str) {
    if !value.is_empty() {
        params.push((name.to_string(), value.to_string()));
    }
}

fn push_date(params: &mut Vec<(String, String)>, name: &str, value: &str) -> Result<(), Error> {
    validate_date(value, name)?;
    push_str(params, name, value);
    Ok(())
}

fn push_int(params: &mut Vec<(String, String)>, name: &str, value: u32) {
    if value > 0 {
        params.push((name.to_string(), value.to_string()));
    }
}

fn push_enum(params: &mut Vec<(String, String)>, name: &str, value: &str) {
    params.push((name.to_string(), value.to_string()));
}

fn push_list(params: &mut Vec<(String, String)>, name: &str, values: &[String]) {
    if !values.is_empty() {
        params.push((name.to_string(), values.join(",")));
    }
}

fn push_enum_list(params: &mut Vec<(String, String)>, name: &str, values: &[SearchIn]) {
    if !values.is_empty() {
        let joined = values
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(",");
        params.push((name.to_string(), joined));
    }
}

/// Request for the top-headlines endpoint.
///
/// At least one of `country` or `sources` must be non-empty; the CLI
/// enforces that before serialization, the model itself does not.
#[derive(Debug, Clone)]
pub struct HeadlinesRequest {
    pub api_key: String,
    pub country: String,
    pub category: Category,
    pub sources: Vec<String>,
    pub page_size: u32,
    pub page: u32,
}

impl Default for HeadlinesRequest {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            country: String::new(),
            category: Category::default(),
            sources: Vec::new(),
            page_size: 20,
            page: 1,
        }
    }
}

impl QueryParams for HeadlinesRequest {
    fn query_params(&self) -> Result<Vec<(String, String)>, Error> {
        let mut params = Vec::new();
        push_str(&mut params, "apiKey", &self.api_key);
        push_str(&mut params, "country", &self.country);
        push_enum(&mut params, "category", self.category.as_str());
        push_list(&mut params, "sources", &self.sources);
        push_int(&mut params, "pageSize", self.page_size);
        push_int(&mut params, "page", self.page);
        Ok(params)
    }
}

/// Request for the sources (publisher catalog) endpoint.
///
/// Every filter is optional; an all-empty request returns the full
/// catalog. Category arrives already validated and encoded by the caller.
#[derive(Debug, Clone, Default)]
pub struct SourcesRequest {
    pub api_key: String,
    pub category: String,
    pub language: String,
    pub country: String,
}

impl QueryParams for SourcesRequest {
    fn query_params(&self) -> Result<Vec<(String, String)>, Error> {
        let mut params = Vec::new();
        push_str(&mut params, "apiKey", &self.api_key);
        push_str(&mut params, "category", &self.category);
        push_str(&mut params, "language", &self.language);
        push_str(&mut params, "country", &self.country);
        Ok(params)
    }
}

/// Request for the everything (full-archive search) endpoint.
///
/// `query` must be non-empty; the CLI enforces that before serialization.
/// `from` and `to` are validated independently — whether `from` must
/// precede `to` is deliberately not checked.
#[derive(Debug, Clone)]
pub struct EverythingRequest {
    pub api_key: String,
    pub query: String,
    pub search_in: Vec<SearchIn>,
    pub sources: Vec<String>,
    pub domains: Vec<String>,
    pub exclude_domains: Vec<String>,
    pub from: String,
    pub to: String,
    pub language: String,
    pub sort_by: SortBy,
    pub page_size: u32,
    pub page: u32,
}

impl Default for EverythingRequest {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            query: String::new(),
            search_in: Vec::new(),
            sources: Vec::new(),
            domains: Vec::new(),
            exclude_domains: Vec::new(),
            from: String::new(),
            to: String::new(),
            language: String::new(),
            sort_by: SortBy::default(),
            page_size: 100,
            page: 1,
        }
    }
}

impl QueryParams for EverythingRequest {
    fn query_params(&self) -> Result<Vec<(String, String)>, Error> {
        let mut params = Vec::new();
        push_str(&mut params, "apiKey", &self.api_key);
        push_str(&mut params, "q", &self.query);
        push_enum_list(&mut params, "searchIn", &self.search_in);
        push_list(&mut params, "sources", &self.sources);
        push_list(&mut params, "domains", &self.domains);
        push_list(&mut params, "excludeDomains", &self.exclude_domains);
        push_date(&mut params, "from", &self.from)?;
        push_date(&mut params, "to", &self.to)?;
        push_str(&mut params, "language", &self.language);
        push_enum(&mut params, "sortBy", self.sort_by.as_str());
        push_int(&mut params, "pageSize", self.page_size);
        push_int(&mut params, "page", self.page);
        Ok(params)
    }
}
