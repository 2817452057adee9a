//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::StageStats;
use crate::builder::BuildReport;
use crate::cli::args::{OutputFormat, WordbankArgs};
use crate::error::Result;
use crate::export::WrittenArtifact;

/// Result structure for a dictionary build.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildSummary {
    pub report: BuildReport,
    /// None on a dry run
    pub artifact: Option<WrittenArtifact>,
}

/// Result structure for artifact verification.
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifySummary {
    pub path: String,
    pub export_name: String,
    pub word_count: usize,
    pub valid: bool,
    pub violations: Vec<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordbankArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordbankArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("BuildSummary") => {
            output_build_summary_human(&value, args)
        }
        _ if std::any::type_name::<T>().contains("VerifySummary") => {
            output_verify_summary_human(&value, args)
        }
        _ => output_generic_human(&value, args),
    }
}

/// Output a build summary in human format.
fn output_build_summary_human(value: &serde_json::Value, args: &WordbankArgs) -> Result<()> {
    let summary: BuildSummary = serde_json::from_value(value.clone())?;
    let report = &summary.report;

    println!("Build Summary:");
    println!("══════════════");
    println!("Source: {}", report.source);
    println!("Pipeline: {}", report.pipeline);
    println!("Candidates read: {}", report.corpus_size);

    for skipped in &report.skipped {
        println!("Skipped input: {} ({})", skipped.name, skipped.reason);
    }

    if args.verbosity() > 1 && !report.stages.is_empty() {
        println!();
        println!("Stages:");
        println!("───────");
        for stage in &report.stages {
            println!("  {}", format_stage(stage));
        }
        println!();
    }

    println!("Distinct words: {}", report.unique_words);
    println!("Denylisted: {}", report.denylisted);
    println!("Words written: {}", report.word_count);

    match &summary.artifact {
        Some(artifact) => {
            println!("Output: {}", artifact.path);
            println!("Size: {}", format_bytes(artifact.bytes as u64));
            println!("Checksum: {}", artifact.checksum);
        }
        None => println!("Output: (dry run, nothing written)"),
    }
    Ok(())
}

/// Output a verification summary in human format.
fn output_verify_summary_human(value: &serde_json::Value, _args: &WordbankArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        if let Some(path) = obj.get("path").and_then(|p| p.as_str()) {
            println!("Artifact: {path}");
        }
        if let Some(name) = obj.get("export_name").and_then(|n| n.as_str()) {
            println!("Export: {name}");
        }
        if let Some(count) = obj.get("word_count").and_then(|c| c.as_u64()) {
            println!("Words: {count}");
        }

        let violations = obj
            .get("violations")
            .and_then(|v| v.as_array())
            .cloned()
            .unwrap_or_default();
        if violations.is_empty() {
            println!("All invariants hold");
        } else {
            println!("Violations ({}):", violations.len());
            for violation in &violations {
                println!("  - {}", format_value(violation));
            }
        }
    }
    Ok(())
}

/// Output generic data in human format.
fn output_generic_human(value: &serde_json::Value, _args: &WordbankArgs) -> Result<()> {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordbankArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_stage(stage: &StageStats) -> String {
    format!(
        "{:<14} {:>8} -> {:>8} (-{})",
        stage.name,
        stage.input,
        stage.output,
        stage.removed()
    )
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Format bytes into human-readable format.
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let unit = UNITS[unit_index];
    if unit_index == 0 {
        format!("{bytes} {unit}")
    } else {
        format!("{size:.1} {unit}")
    }
}
