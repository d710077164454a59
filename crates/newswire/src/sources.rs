use crate::client::{self, ApiConfig, Endpoint};
use crate::output::{self, Format};
use crate::prelude::{println, *};
use newswire_core::enums::Category;
use newswire_core::render::Payload;
use newswire_core::request::SourcesRequest;
use newswire_core::response::parse_sources;

/// Options for the sources (publisher catalog) command.
///
/// Every filter is optional; with none set the full catalog comes back.
#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// Topic category to filter the catalog by
    #[arg(long)]
    pub category: Option<Category>,

    /// Two-letter language code to filter the catalog by
    #[arg(short, long, default_value = "")]
    pub language: String,

    /// Two-letter country code to filter the catalog by
    #[arg(short, long, default_value = "")]
    pub country: String,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let config = ApiConfig::from_env()?;
    let request = build_request(&options, config.api_key);

    if global.verbose {
        println!("GET {}", Endpoint::Sources.url());
    }

    let body = client::fetch(Endpoint::Sources, &request).await?;
    let rendered = output::render_body(&body, Format::from_global(&global), |b| {
        parse_sources(b).map(Payload::Sources)
    })?;
    output::emit(&rendered, global.output.as_deref())
}

fn build_request(options: &Options, api_key: String) -> SourcesRequest {
    SourcesRequest {
        api_key,
        category: options
            .category
            .map(|c| c.as_str().to_string())
            .unwrap_or_default(),
        language: options.language.clone(),
        country: options.country.clone(),
    }
}
