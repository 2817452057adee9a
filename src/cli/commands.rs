//! Command implementations for the wordbank CLI.

use log::debug;

use crate::analysis::filter::denylist::Denylist;
use crate::builder::DictionaryBuilder;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, WordbankError};
use crate::export::{parse_export, write_export};
use crate::source::read_lossy;
use crate::verify::verify;

/// Execute a CLI command.
pub fn execute_command(args: WordbankArgs) -> Result<()> {
    match &args.command {
        Command::Build(build_args) => build_dictionary(build_args.clone(), &args),
        Command::Verify(verify_args) => verify_artifact(verify_args.clone(), &args),
        Command::ShowConfig(show_args) => show_config(show_args.clone(), &args),
    }
}

/// Build a dictionary and write the artifact.
fn build_dictionary(args: BuildArgs, cli_args: &WordbankArgs) -> Result<()> {
    let config = args.config.resolve()?;
    if cli_args.verbosity() > 1 {
        println!("Using configuration '{}'", config.name);
    }

    let builder = DictionaryBuilder::from_config(&config)?;
    debug!("{:?}", builder.pipeline());
    let dictionary = builder.build()?;

    let artifact = if args.dry_run {
        None
    } else {
        Some(write_export(
            &args.output,
            &config.export_name,
            dictionary.words(),
        )?)
    };

    let empty = dictionary.is_empty();
    output_result(
        "Dictionary built",
        &BuildSummary {
            report: dictionary.report().clone(),
            artifact,
        },
        cli_args,
    )?;

    if empty {
        eprintln!();
        eprintln!("WARNING: the dictionary is EMPTY.");
        eprintln!(
            "No candidate survived filtering; check the length bounds ({}-{}), the frequency threshold ({}) and the corpus location.",
            config.min_len, config.max_len, config.freq_threshold
        );
    }

    Ok(())
}

/// Check an existing artifact.
fn verify_artifact(args: VerifyArgs, cli_args: &WordbankArgs) -> Result<()> {
    let path = args.artifact.display().to_string();
    if !args.artifact.exists() {
        return Err(WordbankError::verification(format!(
            "artifact not found: {path}"
        )));
    }

    let text = read_lossy(&args.artifact)?;
    let parsed = parse_export(&text)?;
    let report = verify(&parsed.words, args.min_len, args.max_len, &Denylist::new());

    let mut violations: Vec<String> = report.violations.iter().map(|v| v.to_string()).collect();
    if let Some(expected) = &args.export_name
        && expected != &parsed.export_name
    {
        violations.push(format!(
            "export name is {:?}, expected {expected:?}",
            parsed.export_name
        ));
    }

    let summary = VerifySummary {
        path: path.clone(),
        export_name: parsed.export_name,
        word_count: report.word_count,
        valid: violations.is_empty(),
        violations,
    };
    output_result("Artifact verified", &summary, cli_args)?;

    if summary.valid {
        Ok(())
    } else {
        Err(WordbankError::verification(format!(
            "{} violations in {path}",
            summary.violations.len()
        )))
    }
}

/// Print the resolved configuration.
fn show_config(args: ShowConfigArgs, _cli_args: &WordbankArgs) -> Result<()> {
    let config = args.config.resolve()?;
    config.validate()?;
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn run(argv: &[&str]) -> Result<()> {
        let args = WordbankArgs::try_parse_from(argv).unwrap();
        execute_command(args)
    }

    #[test]
    fn test_build_then_verify() {
        let temp_dir = TempDir::new().unwrap();
        let lists = temp_dir.path().join("english");
        fs::create_dir_all(&lists).unwrap();
        fs::write(lists.join("english-words.10"), "Apple\nbingo\nit\n").unwrap();
        fs::write(lists.join("english-words.20"), "sphinx\nJackson\nab\n").unwrap();

        let output = temp_dir.path().join("words.js");
        let lists_arg = lists.to_string_lossy().to_string();
        let output_arg = output.to_string_lossy().to_string();

        run(&[
            "wordbank",
            "-q",
            "build",
            "--wordlist-dir",
            &lists_arg,
            "--tiers",
            "10,20",
            "-o",
            &output_arg,
        ])
        .unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(
            text,
            "export const VALID_WORDS = [\n  \"apple\",\n  \"bingo\",\n  \"sphinx\",\n];\n"
        );

        run(&["wordbank", "-q", "verify", &output_arg]).unwrap();
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("english-words.10"), "apple\n").unwrap();

        let output = temp_dir.path().join("words.js");
        let dir_arg = temp_dir.path().to_string_lossy().to_string();
        let output_arg = output.to_string_lossy().to_string();

        run(&[
            "wordbank",
            "-q",
            "build",
            "--wordlist-dir",
            &dir_arg,
            "--tiers",
            "10",
            "-o",
            &output_arg,
            "--dry-run",
        ])
        .unwrap();

        assert!(!output.exists());
    }

    #[test]
    fn test_verify_rejects_bad_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let artifact = temp_dir.path().join("words.js");
        fs::write(
            &artifact,
            "export const VALID_WORDS = [\n  \"bingo\",\n  \"apple\",\n];\n",
        )
        .unwrap();
        let artifact_arg = artifact.to_string_lossy().to_string();

        let result = run(&["wordbank", "-q", "verify", &artifact_arg]);
        assert!(matches!(result, Err(WordbankError::Verification(_))));

        let result = run(&[
            "wordbank",
            "-q",
            "verify",
            &artifact_arg,
            "--export-name",
            "WORDS",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_missing_artifact() {
        let result = run(&["wordbank", "-q", "verify", "/nonexistent/words.js"]);
        assert!(matches!(result, Err(WordbankError::Verification(_))));
    }

    #[test]
    fn test_missing_corpus_is_an_error() {
        let result = run(&[
            "wordbank",
            "-q",
            "build",
            "--wordlist-dir",
            "/nonexistent/scowl",
            "--dry-run",
        ]);
        assert!(matches!(result, Err(WordbankError::SourceUnavailable(_))));
    }

    #[test]
    fn test_build_rejects_missing_required_stage() {
        let result = run(&[
            "wordbank",
            "-q",
            "build",
            "--filters",
            "lowercase,length",
            "--dry-run",
        ]);
        assert!(matches!(result, Err(WordbankError::InvalidConfig(_))));
    }

    #[test]
    fn test_show_config_rejects_invalid_bounds() {
        let result = run(&[
            "wordbank",
            "show-config",
            "--min-len",
            "7",
            "--max-len",
            "3",
        ]);
        assert!(matches!(result, Err(WordbankError::InvalidConfig(_))));
    }
}
