//! GitHub-flavored markdown renderer.
//!
//! Section order is fixed: title, description, note, parameters, port tables,
//! code samples, usage examples. Sections without data are left out entirely.

use crate::labels::Labels;
use crate::model::{DocumentRecord, Entry};
use crate::render::Renderer;
use anyhow::Result;

/// Info string for fenced snippets.
const FENCE_LANG: &str = "systemverilog";

pub struct MarkdownRenderer {
    labels: &'static Labels,
}

impl MarkdownRenderer {
    pub fn new(labels: &'static Labels) -> Self {
        MarkdownRenderer { labels }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, rec: &DocumentRecord) -> Result<String> {
        let l = self.labels;
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {} `{}`\n", l.module, rec.entity_name));

        if !rec.documented {
            lines.push(format!("_{}_", l.no_docs));
            return Ok(finish(lines));
        }

        // Description: brief then details, each its own paragraph
        if !rec.brief.is_empty() || !rec.details.is_empty() {
            lines.push(format!("## {}\n", l.description));
            for text in [&rec.brief, &rec.details] {
                if !text.is_empty() {
                    lines.push(text.clone());
                    lines.push(String::new());
                }
            }
        }

        if !rec.note.is_empty() {
            lines.push(format!("**{}:** {}", l.note, rec.note));
            lines.push(String::new());
        }

        if !rec.parameters.is_empty() {
            lines.push(format!("## {}\n", l.parameters));
            for param in &rec.parameters {
                lines.push(render_list_item(param));
            }
            lines.push(String::new());
        }

        render_table(&mut lines, l, l.inputs, &rec.inputs);
        render_table(&mut lines, l, l.outputs, &rec.outputs);
        render_table(&mut lines, l, l.inouts, &rec.inouts);

        render_snippets(&mut lines, l.code_samples, &rec.code_snippets);
        render_snippets(&mut lines, l.usage_examples, &rec.example_snippets);

        Ok(finish(lines))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Join lines and end the page with exactly one newline.
fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n").trim_end().to_string();
    out.push('\n');
    out
}

/// `- \`name\`: description`, continuation lines indented under the item.
fn render_list_item(entry: &Entry) -> String {
    if entry.description.is_empty() {
        return format!("- `{}`", entry.name);
    }
    let indented = entry.description.replace('\n', "\n  ");
    format!("- `{}`: {}", entry.name, indented)
}

/// Port table. Nothing is emitted for an empty list.
fn render_table(lines: &mut Vec<String>, l: &Labels, title: &str, entries: &[Entry]) {
    if entries.is_empty() {
        return;
    }
    lines.push(format!("## {}\n", title));
    lines.push(format!("| {} | {} |", l.col_name, l.col_description));
    lines.push("|-------|--------|".to_string());
    for entry in entries {
        lines.push(format!(
            "| `{}` | {} |",
            entry.name,
            table_cell(&entry.description)
        ));
    }
    lines.push(String::new());
}

fn render_snippets(lines: &mut Vec<String>, title: &str, snippets: &[String]) {
    if snippets.is_empty() {
        return;
    }
    lines.push(format!("## {}\n", title));
    for snippet in snippets {
        lines.push(format!("```{}", FENCE_LANG));
        lines.push(snippet.clone());
        lines.push("```".to_string());
        lines.push(String::new());
    }
}

/// Keep a description on one table row.
pub fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}
