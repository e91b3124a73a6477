use serde::{Deserialize, Serialize};

use crate::position::{Span, span_lines};
use crate::replace::PatchOutcome;

/// Outcome of one run, as printed by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchReport {
    pub execution_id: String,
    pub success: bool,
    /// Function the run looked for
    pub target: String,
    /// "replaced", "unchanged" or "error"
    pub status: String,
    /// Byte range of the replaced block in the original text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,
    pub byte_shift: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_checksum: Option<String>,
    pub dry_run: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PatchReport {
    /// Build a report from a replacement outcome over `original`
    pub fn from_outcome(
        execution_id: String,
        target: &str,
        original: &str,
        original_checksum: String,
        final_checksum: String,
        outcome: &PatchOutcome,
        dry_run: bool,
    ) -> Self {
        let mut report = Self {
            execution_id,
            success: true,
            target: target.to_string(),
            status: "unchanged".to_string(),
            span: None,
            start_line: None,
            end_line: None,
            byte_shift: 0,
            original_checksum: Some(original_checksum),
            final_checksum: Some(final_checksum),
            dry_run,
            error: None,
        };

        if let PatchOutcome::Applied { block, byte_shift, .. } = outcome {
            let (start_line, end_line) = span_lines(original, block.span);
            report.status = "replaced".to_string();
            report.span = Some(block.span);
            report.start_line = Some(start_line);
            report.end_line = Some(end_line);
            report.byte_shift = *byte_shift;
        }

        report
    }

    pub fn failure(execution_id: String, target: &str, error: String) -> Self {
        Self {
            execution_id,
            success: false,
            target: target.to_string(),
            status: "error".to_string(),
            span: None,
            start_line: None,
            end_line: None,
            byte_shift: 0,
            original_checksum: None,
            final_checksum: None,
            dry_run: false,
            error: Some(error),
        }
    }

    /// Human-readable rendering
    pub fn to_human(&self) -> String {
        if !self.success {
            return format!("Error: {}", self.error.as_deref().unwrap_or("Unknown error"));
        }

        let checksum = self.final_checksum.as_deref().unwrap_or("-");
        match (self.start_line, self.end_line) {
            (Some(start), Some(end)) => {
                let verb = if self.dry_run { "Would replace" } else { "Replaced" };
                format!(
                    "{} {} (lines {}-{})\nFinal checksum: {}",
                    verb, self.target, start, end, checksum
                )
            }
            _ => format!(
                "No definition of {} found; file unchanged\nFinal checksum: {}",
                self.target, checksum
            ),
        }
    }
}

/// Fresh identifier for one run
pub fn generate_execution_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
