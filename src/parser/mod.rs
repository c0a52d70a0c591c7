//! Parser module — source text in, one `DocumentRecord` out.

pub mod extract;
pub mod tags;

use crate::model::DocumentRecord;
pub use extract::Dialect;

/// Parse one source unit.
///
/// The entity name comes from the first declaration keyword; the documentation
/// comes from the first `/** ... */` block only. Later blocks are ignored.
pub fn parse_source(text: &str, dialect: &Dialect) -> DocumentRecord {
    let name = extract::entity_name(text, dialect);
    let blocks = extract::extract_blocks(text);

    let Some(first) = blocks.first() else {
        return DocumentRecord::undocumented(name);
    };
    if blocks.len() > 1 {
        log::debug!(
            "{}: {} documentation blocks, using the first",
            name,
            blocks.len()
        );
    }

    let mut record = tags::parse_block(first);
    record.entity_name = name;
    record.documented = true;
    record
}
