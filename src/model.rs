//! Data model for a parsed documentation block — format-agnostic.

use serde::Serialize;

/// Entity name used when a source unit has no declaration keyword.
pub const UNKNOWN_ENTITY: &str = "unknown";

/// Structured documentation of one source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    /// Identifier following the first declaration keyword
    pub entity_name: String,
    /// False when the unit has no `/** ... */` block at all
    pub documented: bool,
    /// @brief
    pub brief: String,
    /// @details
    pub details: String,
    /// @note
    pub note: String,
    /// @param entries, in declaration order
    pub parameters: Vec<Entry>,
    /// @input entries
    pub inputs: Vec<Entry>,
    /// @output entries
    pub outputs: Vec<Entry>,
    /// @inout entries
    pub inouts: Vec<Entry>,
    /// @code ... @endcode bodies
    pub code_snippets: Vec<String>,
    /// @example ... @endexample bodies
    pub example_snippets: Vec<String>,
}

impl DocumentRecord {
    /// Record for a unit without any documentation block.
    pub fn undocumented(entity_name: impl Into<String>) -> Self {
        DocumentRecord {
            entity_name: entity_name.into(),
            ..Default::default()
        }
    }

    /// Short description used by the summary index: the first paragraph of
    /// the brief (or of the details when there is no brief), on one line.
    pub fn summary(&self) -> Option<String> {
        let source = if self.brief.is_empty() {
            &self.details
        } else {
            &self.brief
        };
        let paragraph = source
            .split("\n\n")
            .next()
            .unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if paragraph.is_empty() {
            None
        } else {
            Some(paragraph)
        }
    }
}

/// A named row: `@param`, `@input`, `@output` or `@inout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    /// Empty when the tag carried a name only
    pub description: String,
}

impl Entry {
    /// Split flushed tag text into its first whitespace-separated token and
    /// the trimmed remainder. Returns `None` for empty text.
    pub fn from_text(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let (name, rest) = match text.find(char::is_whitespace) {
            Some(pos) => (&text[..pos], &text[pos..]),
            None => (text, ""),
        };
        Some(Entry {
            name: name.to_string(),
            description: rest.trim().to_string(),
        })
    }
}
