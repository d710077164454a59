use crate::client::{self, ApiConfig, Endpoint};
use crate::output::{self, Format};
use crate::prelude::{println, *};
use newswire_core::enums::{SearchIn, SortBy};
use newswire_core::render::Payload;
use newswire_core::request::EverythingRequest;
use newswire_core::response::parse_articles;
use newswire_core::Error;

/// Options for the everything (full-archive search) command.
#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// Keywords or phrase to search for
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Article fields to restrict the search to (title, description, content)
    #[arg(long, value_delimiter = ',', value_name = "FIELDS")]
    pub search_in: Vec<SearchIn>,

    /// Comma-separated publisher identifiers to search within
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub sources: Vec<String>,

    /// Domains to restrict the search to
    #[arg(long, value_delimiter = ',', value_name = "DOMAINS")]
    pub domains: Vec<String>,

    /// Domains to exclude from the search
    #[arg(long, value_delimiter = ',', value_name = "DOMAINS")]
    pub exclude_domains: Vec<String>,

    /// Oldest article date or timestamp to include
    #[arg(long, default_value = "", value_name = "DATE")]
    pub from: String,

    /// Newest article date or timestamp to include
    #[arg(long, default_value = "", value_name = "DATE")]
    pub to: String,

    /// Two-letter language code to restrict the search to
    #[arg(short, long, default_value = "")]
    pub language: String,

    /// Result ordering (relevancy, popularity, publishedAt)
    #[arg(long, default_value = "publishedAt")]
    pub sort_by: SortBy,

    /// Number of results per page
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    ensure_query(&options)?;

    let config = ApiConfig::from_env()?;
    let request = build_request(&options, config.api_key);

    if global.verbose {
        println!("GET {}", Endpoint::Everything.url());
    }

    let body = client::fetch(Endpoint::Everything, &request).await?;
    let rendered = output::render_body(&body, Format::from_global(&global), |b| {
        parse_articles(b).map(Payload::Articles)
    })?;
    output::emit(&rendered, global.output.as_deref())
}

/// The search endpoint is useless without a query.
fn ensure_query(options: &Options) -> Result<(), Error> {
    if options.query.is_empty() {
        return Err(Error::Validation(
            "the everything command requires --query".to_string(),
        ));
    }
    Ok(())
}

fn build_request(options: &Options, api_key: String) -> EverythingRequest {
    EverythingRequest {
        api_key,
        query: options.query.clone(),
        search_in: options.search_in.clone(),
        sources: options.sources.clone(),
        domains: options.domains.clone(),
        exclude_domains: options.exclude_domains.clone(),
        from: options.from.clone(),
        to: options.to.clone(),
        language: options.language.clone(),
        sort_by: options.sort_by,
        page_size: options.page_size,
        page: options.page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newswire_core::request::QueryParams;

    fn options() -> Options {
        Options {
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

    #[test]
    fn test_query_check_rejects_empty_query() {
        let err = ensure_query(&options()).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("--query"));
    }

    #[test]
    fn test_query_check_accepts_non_empty_query() {
        let mut opts = options();
        opts.query = "bitcoin".to_string();
        assert!(ensure_query(&opts).is_ok());
    }

    #[test]
    fn test_build_request_maps_every_option() {
        let mut opts = options();
        opts.query = "rust".to_string();
        opts.search_in = vec![SearchIn::Title];
        opts.domains = vec!["wired.com".to_string()];
        opts.from = "2024-01-01".to_string();
        opts.sort_by = SortBy::Relevancy;
        opts.page_size = 10;

        let request = build_request(&opts, "key".to_string());

        assert_eq!(request.query, "rust");
        assert_eq!(request.search_in, vec![SearchIn::Title]);
        assert_eq!(request.domains, vec!["wired.com".to_string()]);
        assert_eq!(request.from, "2024-01-01");
        assert_eq!(request.sort_by, SortBy::Relevancy);
        assert_eq!(request.page_size, 10);
    }

    #[test]
    fn test_built_request_rejects_malformed_dates_at_serialization() {
        let mut opts = options();
        opts.query = "rust".to_string();
        opts.from = "2024/01/01".to_string();

        let request = build_request(&opts, "key".to_string());

        assert!(request.query_params().is_err());
    }
}
