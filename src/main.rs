use clap::Parser;
use def_rewrite::{
    DEFAULT_KEYWORD, DefinitionPattern, PatchError, PatchReport, Preset, SpanEnd, checksum,
    generate_execution_id, logging, read_file, write_file,
};
use std::fs;
use tracing::{info, warn};

/// Rewrite a function definition in a build file by pattern
#[derive(Parser, Debug)]
#[command(name = "def-rewrite")]
#[command(version = "0.1.0")]
#[command(about = "Replace a named def block in a build file", long_about = None)]
struct Args {
    /// File to rewrite in place
    #[arg(short, long)]
    file: String,

    /// Built-in target and replacement
    #[arg(short, long, value_enum, default_value_t = Preset::default())]
    preset: Preset,

    /// Function to replace (overrides the preset's target)
    #[arg(short, long)]
    name: Option<String>,

    /// Replacement definition text (overrides the preset's body)
    #[arg(short, long, conflicts_with = "replacement_file")]
    replacement: Option<String>,

    /// File holding the replacement definition
    #[arg(long)]
    replacement_file: Option<String>,

    /// Keyword that introduces a definition
    #[arg(short, long, default_value = DEFAULT_KEYWORD)]
    keyword: String,

    /// Where the replaced block stops (overrides the preset's policy)
    #[arg(long, value_enum)]
    span_end: Option<SpanEnd>,

    /// Refuse to touch the file unless its BLAKE3 checksum matches
    #[arg(long)]
    expected_checksum: Option<String>,

    /// Report what would change without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Output structured JSON instead of human-readable
    #[arg(short, long)]
    json: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn target(&self) -> &str {
        self.name.as_deref().unwrap_or(self.preset.target())
    }

    /// Replacement text from the flags, falling back to the preset
    fn replacement_text(&self) -> Result<String, Box<dyn std::error::Error>> {
        if let Some(text) = &self.replacement {
            return Ok(text.clone());
        }
        if let Some(path) = &self.replacement_file {
            return Ok(read_file(path)?.content);
        }
        Ok(self.preset.replacement().to_string())
    }
}

fn run(args: &Args, execution_id: String) -> Result<PatchReport, Box<dyn std::error::Error>> {
    let target = args.target();
    let replacement = args.replacement_text()?;
    let span_end = args.span_end.unwrap_or(args.preset.span_end());
    let pattern = DefinitionPattern::with_keyword(&args.keyword, target, span_end)?;

    let file_content = read_file(&args.file)?;

    if let Some(expected) = &args.expected_checksum {
        if *expected != file_content.checksum {
            return Err(PatchError::ChecksumMismatch {
                expected: expected.clone(),
                actual: file_content.checksum,
            }
            .into());
        }
    }

    let outcome = pattern.apply(&file_content.content, &replacement);
    let final_checksum = checksum(outcome.text());

    if outcome.is_applied() {
        if args.dry_run {
            info!(file = %file_content.path, "dry run, file not written");
        } else {
            write_file(&args.file, outcome.text())?;
            info!(file = %file_content.path, name = %target, "definition replaced");
        }
    } else {
        warn!(file = %file_content.path, name = %target, "no definition found, file unchanged");
    }

    Ok(PatchReport::from_outcome(
        execution_id,
        target,
        &file_content.content,
        file_content.checksum.clone(),
        final_checksum,
        &outcome,
        args.dry_run,
    ))
}

fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let execution_id = generate_execution_id();
    let report = match run(&args, execution_id.clone()) {
        Ok(report) => report,
        Err(e) => PatchReport::failure(execution_id, args.target(), e.to_string()),
    };

    output_report(&report, args.json, args.output.as_ref());

    if !report.success {
        std::process::exit(1);
    }
}

/// Format and output the report
fn output_report(report: &PatchReport, json_mode: bool, output_path: Option<&String>) {
    let output = if json_mode {
        serde_json::to_string_pretty(report)
            .unwrap_or_else(|_| r#"{"error": "Failed to serialize report"}"#.to_string())
    } else {
        report.to_human()
    };

    if let Some(path) = output_path {
        if let Err(e) = fs::write(path, &output) {
            eprintln!("Failed to write output to '{}': {}", path, e);
            std::process::exit(1);
        }
    } else {
        println!("{}", output);
    }
}
