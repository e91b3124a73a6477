//! Heuristic location of a named definition block.
//!
//! Nothing here parses the target language. A header is the keyword, the
//! name and an opening parenthesis; a block runs until the next line that
//! starts with the keyword at column 0. Headers inside comments or string
//! literals match like any other text.

use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::trace;

use crate::error::PatchError;
use crate::position::{Position, Span, span_to_positions};

/// Keyword that introduces a definition when none is configured
pub const DEFAULT_KEYWORD: &str = "def";

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

/// Where a definition block stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SpanEnd {
    /// Only a following top-level definition ends the block; a definition
    /// with nothing after it does not match at all
    NextDefinition,
    /// The next top-level definition, or end of text
    #[default]
    NextDefinitionOrEof,
}

/// A located definition, the span that would be replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DefinitionBlock {
    pub span: Span,
    pub start: Position,
    pub end: Position,
}

/// Compiled matcher for one target definition
#[derive(Debug, Clone)]
pub struct DefinitionPattern {
    name: String,
    header: Regex,
    boundary: Regex,
    span_end: SpanEnd,
}

impl DefinitionPattern {
    /// Build a matcher for `def <name>(` with the default span-end policy
    pub fn new(name: &str) -> Result<Self, PatchError> {
        Self::with_keyword(DEFAULT_KEYWORD, name, SpanEnd::default())
    }

    /// Build a matcher for `<keyword> <name>(`
    pub fn with_keyword(keyword: &str, name: &str, span_end: SpanEnd) -> Result<Self, PatchError> {
        if !IDENTIFIER.is_match(keyword) {
            return Err(PatchError::InvalidKeyword(keyword.to_string()));
        }
        if !IDENTIFIER.is_match(name) {
            return Err(PatchError::InvalidName(name.to_string()));
        }

        let keyword = regex::escape(keyword);
        let header = Regex::new(&format!(r"\b{}[ \t]+{}[ \t]*\(", keyword, regex::escape(name)))?;
        let boundary = Regex::new(&format!(r"(?m)^{}[ \t]", keyword))?;

        Ok(Self {
            name: name.to_string(),
            header,
            boundary,
            span_end,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn span_end(&self) -> SpanEnd {
        self.span_end
    }

    /// Locate the first definition block for the target name
    ///
    /// Returns `None` when no header matches, or when the policy is
    /// [`SpanEnd::NextDefinition`] and no definition follows the header.
    pub fn find(&self, text: &str) -> Option<DefinitionBlock> {
        let header = self.header.find(text)?;

        // `^` only matches at real line starts, so a boundary match is
        // always preceded by a newline; the block stops before it.
        let end = match self.boundary.find_at(text, header.end()) {
            Some(next) => next.start() - 1,
            None if self.span_end == SpanEnd::NextDefinitionOrEof => text.len(),
            None => {
                trace!(name = %self.name, "header found but no definition follows it");
                return None;
            }
        };

        let span = Span::new(header.start(), end);
        let (start, end) = span_to_positions(text, span);
        trace!(name = %self.name, start = span.start, end = span.end, "located definition block");

        Some(DefinitionBlock { span, start, end })
    }
}
