//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::labels::Lang;
use crate::model::DocumentRecord;
use anyhow::{anyhow, Result};

/// Trait for rendering a DocumentRecord into a specific output format.
pub trait Renderer {
    fn render(&self, record: &DocumentRecord) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, lang: Lang) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer::new(lang.labels()))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown or json",
            format
        )),
    }
}
