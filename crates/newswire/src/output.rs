use std::path::Path;

use crate::prelude::{println, *};
use newswire_core::render::{self, Payload};
use newswire_core::Error;

/// The output format selected by the global flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Markdown,
    Json,
    Pretty,
}

impl Format {
    pub fn from_global(global: &crate::Global) -> Format {
        if global.pretty {
            Format::Pretty
        } else if global.json {
            Format::Json
        } else {
            Format::Markdown
        }
    }
}

/// Render a fetched body for the selected format.
///
/// `deserialize` runs only on the Markdown path; the JSON formats pass the
/// upstream bytes through largely unchanged.
pub fn render_body<F>(body: &str, format: Format, deserialize: F) -> Result<String>
where
    F: FnOnce(&str) -> Result<Payload, Error>,
{
    match format {
        Format::Markdown => Ok(render::markdown(&deserialize(body)?)),
        Format::Json => Ok(render::raw_json(body, false)),
        Format::Pretty => Ok(render::raw_json(body, true)),
    }
}

/// Write rendered output to stdout, or to the requested file (overwriting
/// it) with a confirmation line.
pub fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote output to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
