//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the DocumentRecord directly.

use crate::model::DocumentRecord;
use crate::render::Renderer;
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, record: &DocumentRecord) -> Result<String> {
        let mut out = serde_json::to_string_pretty(record)
            .with_context(|| format!("failed to serialize {}", record.entity_name))?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
