use crate::client::{self, ApiConfig, Endpoint};
use crate::output::{self, Format};
use crate::prelude::{println, *};
use newswire_core::enums::Category;
use newswire_core::render::Payload;
use newswire_core::request::HeadlinesRequest;
use newswire_core::response::parse_articles;
use newswire_core::Error;

/// Options for the top-headlines command.
#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// Two-letter country code to pull headlines for
    #[arg(short, long, default_value = "")]
    pub country: String,

    /// Topic category
    #[arg(long, default_value = "general")]
    pub category: Category,

    /// Comma-separated publisher identifiers to pull headlines from
    #[arg(long, value_delimiter = ',', value_name = "IDS")]
    pub sources: Vec<String>,

    /// Number of results per page
    #[arg(long, default_value = "20", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub page_size: u32,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    ensure_scope(&options)?;

    let config = ApiConfig::from_env()?;
    let request = build_request(&options, config.api_key);

    if global.verbose {
        println!("GET {}", Endpoint::TopHeadlines.url());
    }

    let body = client::fetch(Endpoint::TopHeadlines, &request).await?;
    let rendered = output::render_body(&body, Format::from_global(&global), |b| {
        parse_articles(b).map(Payload::Articles)
    })?;
    output::emit(&rendered, global.output.as_deref())
}

/// Headlines must be scoped to a country or an explicit source list.
fn ensure_scope(options: &Options) -> Result<(), Error> {
    if options.country.is_empty() && options.sources.is_empty() {
        return Err(Error::Validation(
            "the headlines command requires --country or --sources".to_string(),
        ));
    }
    Ok(())
}

fn build_request(options: &Options, api_key: String) -> HeadlinesRequest {
    HeadlinesRequest {
        api_key,
        country: options.country.clone(),
        category: options.category,
        sources: options.sources.clone(),
        page_size: options.page_size,
        page: options.page,
    }
}
