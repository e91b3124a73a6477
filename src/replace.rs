use tracing::{debug, warn};

use crate::pattern::{DefinitionBlock, DefinitionPattern};
use crate::position::Span;

/// Result of replacing a definition in a text buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The block was found and replaced
    Applied {
        /// Location of the replaced block in the original text
        block: DefinitionBlock,
        /// Byte offset shift (positive = content grew, negative = shrank)
        byte_shift: i64,
        /// Full text after the replacement
        text: String,
    },
    /// No definition matched; `text` is the input as-is
    Unchanged { text: String },
}

impl PatchOutcome {
    pub fn text(&self) -> &str {
        match self {
            PatchOutcome::Applied { text, .. } | PatchOutcome::Unchanged { text } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            PatchOutcome::Applied { text, .. } | PatchOutcome::Unchanged { text } => text,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, PatchOutcome::Applied { .. })
    }
}

/// Splice `replacement` into `text` over `span`
///
/// Everything outside the span is kept byte for byte.
pub fn splice(text: &str, span: Span, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() - span.len() + replacement.len());
    out.push_str(&text[..span.start]);
    out.push_str(replacement);
    out.push_str(&text[span.end..]);
    out
}

impl DefinitionPattern {
    /// Replace the first matching definition block with `replacement`
    pub fn apply(&self, text: &str, replacement: &str) -> PatchOutcome {
        let Some(block) = self.find(text) else {
            debug!(name = %self.name(), "no definition found, leaving text unchanged");
            return PatchOutcome::Unchanged {
                text: text.to_string(),
            };
        };

        let byte_shift = replacement.len() as i64 - block.span.len() as i64;
        debug!(
            name = %self.name(),
            line = block.start.line,
            replaced_bytes = block.span.len(),
            byte_shift,
            "replacing definition"
        );

        PatchOutcome::Applied {
            block,
            byte_shift,
            text: splice(text, block.span, replacement),
        }
    }
}

/// Replace the first `def <target_name>(` block in `source` with `replacement`
///
/// Never fails: a missing definition, or a name that cannot form a header,
/// returns `source` unchanged.
///
/// # Example
/// ```
/// let source = "def foo(a, b):\n    return a+b\n\ndef bar():\n    pass\n";
/// let out = def_rewrite::replace(source, "foo", "def foo():\n    return 0\n");
/// assert_eq!(out, "def foo():\n    return 0\n\ndef bar():\n    pass\n");
/// ```
pub fn replace(source: &str, target_name: &str, replacement: &str) -> String {
    match DefinitionPattern::new(target_name) {
        Ok(pattern) => pattern.apply(source, replacement).into_text(),
        Err(e) => {
            warn!("{}; leaving text unchanged", e);
            source.to_string()
        }
    }
}
