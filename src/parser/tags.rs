//! Tag parser — line-by-line state machine over one documentation block.
//!
//! Only one tag accumulates at a time. Every marker line flushes whatever is
//! active, so tags never nest, and an unterminated `@code` or `@example` span
//! simply flushes at the end of the block. Malformed input degrades to empty
//! fields; nothing here can fail.

use crate::model::{DocumentRecord, Entry};

/// Tag kinds that open an accumulation region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Brief,
    Details,
    Note,
    Param,
    Input,
    Output,
    Inout,
    Code,
    Example,
}

/// What a single (decoration-stripped) line means to the state machine.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    /// Marker opening a tag, with the text following it on the same line
    Open(Tag, &'a str),
    /// `@endcode` / `@endexample`
    Close,
    Text(&'a str),
}

/// Markers match as line prefixes, so `@param[in]` and `@brief:` still open
/// their tag. No marker is a prefix of another.
const MARKERS: &[(&str, Tag)] = &[
    ("@brief", Tag::Brief),
    ("@details", Tag::Details),
    ("@note", Tag::Note),
    ("@param", Tag::Param),
    ("@input", Tag::Input),
    ("@output", Tag::Output),
    ("@inout", Tag::Inout),
    ("@code", Tag::Code),
    ("@example", Tag::Example),
];

const CLOSERS: &[&str] = &["@endcode", "@endexample"];

/// The active tag and its buffered lines.
#[derive(Debug)]
struct Accumulator {
    tag: Tag,
    lines: Vec<String>,
}

#[derive(Debug, Default)]
struct ParserState {
    record: DocumentRecord,
    current: Option<Accumulator>,
}

impl ParserState {
    fn open(&mut self, tag: Tag, seed: &str) {
        self.flush();
        let lines = match tag {
            // The marker line of a snippet contributes no text
            Tag::Code | Tag::Example => Vec::new(),
            _ => vec![seed.trim().to_string()],
        };
        self.current = Some(Accumulator { tag, lines });
    }

    fn push(&mut self, text: &str) {
        // Outside any tag, text is not part of the model
        if let Some(acc) = self.current.as_mut() {
            acc.lines.push(text.to_string());
        }
    }

    /// Finalize the active tag into the record and return to no active tag.
    fn flush(&mut self) {
        let Some(acc) = self.current.take() else {
            return;
        };
        let text = acc.lines.join("\n").trim().to_string();
        let rec = &mut self.record;
        match acc.tag {
            Tag::Brief => rec.brief = text,
            Tag::Details => rec.details = text,
            Tag::Note => rec.note = text,
            Tag::Param => push_entry(&mut rec.parameters, &text),
            Tag::Input => push_entry(&mut rec.inputs, &text),
            Tag::Output => push_entry(&mut rec.outputs, &text),
            Tag::Inout => push_entry(&mut rec.inouts, &text),
            Tag::Code => push_snippet(&mut rec.code_snippets, text),
            Tag::Example => push_snippet(&mut rec.example_snippets, text),
        }
    }
}

fn push_entry(list: &mut Vec<Entry>, text: &str) {
    if let Some(entry) = Entry::from_text(text) {
        list.push(entry);
    }
}

fn push_snippet(list: &mut Vec<String>, text: String) {
    if !text.is_empty() {
        list.push(text);
    }
}

// -- Public API ---------------------------------------------------------------

/// Parse the body of one documentation block.
///
/// Scalar fields keep the last flush of their tag; list fields keep every
/// non-empty flush in order. `entity_name` and `documented` are left at their
/// defaults for the caller to fill in.
pub fn parse_block(block: &str) -> DocumentRecord {
    let mut state = ParserState::default();

    for raw in block.trim().lines() {
        match classify(strip_decoration(raw)) {
            Line::Open(tag, seed) => state.open(tag, seed),
            Line::Close => state.flush(),
            Line::Text(text) => state.push(text),
        }
    }
    state.flush();

    state.record
}

// -- Line handling ------------------------------------------------------------

/// Remove surrounding whitespace and `*` comment decoration.
fn strip_decoration(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '*')
}

fn classify(line: &str) -> Line<'_> {
    for &(marker, tag) in MARKERS {
        if let Some(tail) = line.strip_prefix(marker) {
            return Line::Open(tag, tail.trim());
        }
    }
    if CLOSERS.iter().any(|closer| line.starts_with(closer)) {
        return Line::Close;
    }
    Line::Text(line)
}
