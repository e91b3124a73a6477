//! Rewrite a named function definition in a build file by pattern.
//!
//! Matching is textual: a header is `def <name>(` and the block runs to the
//! next top-level `def` or end of text. See [`replace`].

// Error types
pub mod error;

// Position tracking module
pub mod position;

// File operations module
pub mod file;

// Definition matching
pub mod pattern;

// Replacement engine
pub mod replace;

// Built-in rewrites
pub mod preset;

// Run report
pub mod report;

pub mod logging;

// Re-exports
pub use error::{FileError, PatchError};
pub use file::{FileContent, checksum, read_file, write_file};
pub use pattern::{DEFAULT_KEYWORD, DefinitionBlock, DefinitionPattern, SpanEnd};
pub use position::{Position, Span, byte_to_position, span_lines, span_to_positions};
pub use preset::{PROVISIONING_PROFILE_VALIDATOR, Preset};
pub use replace::{PatchOutcome, replace, splice};
pub use report::{PatchReport, generate_execution_id};
