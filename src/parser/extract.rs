//! Comment-block extraction and entity-name lookup.
//!
//! Both scans work on the whole source text and are independent of each
//! other: a unit may have a name without docs, docs without a name, or both.

use crate::model::UNKNOWN_ENTITY;
use anyhow::{bail, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Declaration keywords recognized when none are configured.
pub const DEFAULT_KEYWORDS: &[&str] = &["module"];

// `/** ... */`, shortest match, spanning lines
static RE_DOC_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*\*(.*?)\*/").unwrap());

static RE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_]\w*$").unwrap());

/// Immutable lexical configuration for one run: which declaration keywords
/// name a source unit.
#[derive(Debug, Clone)]
pub struct Dialect {
    declaration: Regex,
}

impl Dialect {
    /// Build a dialect from a list of declaration keywords.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        if keywords.is_empty() {
            bail!("at least one declaration keyword is required");
        }
        let mut alternatives = Vec::with_capacity(keywords.len());
        for kw in keywords {
            let kw = kw.as_ref();
            if !RE_KEYWORD.is_match(kw) {
                bail!("invalid declaration keyword: {:?}", kw);
            }
            alternatives.push(regex::escape(kw));
        }
        let pattern = format!(r"\b(?:{})\s+(\w+)", alternatives.join("|"));
        Ok(Dialect {
            declaration: Regex::new(&pattern)?,
        })
    }
}

impl Default for Dialect {
    fn default() -> Self {
        // DEFAULT_KEYWORDS always passes validation
        Dialect::new(DEFAULT_KEYWORDS).unwrap()
    }
}

/// All documentation block bodies in source order, without the delimiters.
pub fn extract_blocks(text: &str) -> Vec<&str> {
    RE_DOC_BLOCK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Name of the first declared entity, or [`UNKNOWN_ENTITY`].
pub fn entity_name(text: &str, dialect: &Dialect) -> String {
    dialect
        .declaration
        .captures(text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| UNKNOWN_ENTITY.to_string())
}
