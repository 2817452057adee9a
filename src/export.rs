//! List-literal artifact.
//!
//! The generated file is an ES module exporting one array of strings:
//!
//! ```text
//! export const VALID_WORDS = [
//!   "apple",
//!   "bingo",
//! ];
//! ```
//!
//! An empty dictionary is written on one line: `export const VALID_WORDS = [];`.
//! Output depends only on the export name and the word sequence, so rebuilding
//! from the same corpus gives a byte-identical file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordbankError};

/// Render words as an exported list literal.
///
/// # Examples
///
/// ```
/// use wordbank::export::serialize;
///
/// let text = serialize("VALID_WORDS", &["apple", "bingo"]);
/// assert_eq!(text, "export const VALID_WORDS = [\n  \"apple\",\n  \"bingo\",\n];\n");
/// ```
pub fn serialize<S: AsRef<str>>(export_name: &str, words: &[S]) -> String {
    if words.is_empty() {
        return format!("export const {export_name} = [];\n");
    }

    let body_len: usize = words.iter().map(|w| w.as_ref().len() + 5).sum();
    let mut out = String::with_capacity(export_name.len() + body_len + 24);
    out.push_str("export const ");
    out.push_str(export_name);
    out.push_str(" = [\n");
    for word in words {
        out.push_str("  ");
        out.push_str(&quote(word.as_ref()));
        out.push_str(",\n");
    }
    out.push_str("];\n");
    out
}

/// Quote a word as a string literal valid in both JSON and JavaScript.
fn quote(word: &str) -> String {
    serde_json::Value::String(word.to_string()).to_string()
}

/// A parsed artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExport {
    pub export_name: String,
    pub words: Vec<String>,
}

/// Parse an artifact written by [`serialize`].
///
/// Surrounding blank lines are tolerated; anything else that does not match
/// the generated shape is an error naming the offending line.
pub fn parse_export(text: &str) -> Result<ParsedExport> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| WordbankError::export("artifact is empty"))?;
    let declaration = header
        .trim()
        .strip_prefix("export const ")
        .ok_or_else(|| WordbankError::export(format!("line 1: expected 'export const': {header}")))?;
    let (export_name, rest) = declaration
        .split_once(" = ")
        .ok_or_else(|| WordbankError::export(format!("line 1: expected ' = ': {header}")))?;
    let export_name = export_name.to_string();

    match rest {
        "[];" => {
            return match lines.next() {
                None => Ok(ParsedExport {
                    export_name,
                    words: Vec::new(),
                }),
                Some((n, line)) => Err(WordbankError::export(format!(
                    "line {}: content after closing bracket: {line}",
                    n + 1
                ))),
            };
        }
        "[" => {}
        _ => {
            return Err(WordbankError::export(format!(
                "line 1: expected '[' or '[];': {header}"
            )));
        }
    }

    let mut words = Vec::new();
    let mut closed = false;
    for (n, line) in lines {
        if closed {
            return Err(WordbankError::export(format!(
                "line {}: content after closing bracket: {line}",
                n + 1
            )));
        }

        let entry = line.trim();
        if entry == "];" {
            closed = true;
            continue;
        }

        let word = entry
            .strip_suffix(',')
            .filter(|e| e.starts_with('"'))
            .and_then(|e| serde_json::from_str::<String>(e).ok())
            .ok_or_else(|| {
                WordbankError::export(format!("line {}: malformed entry: {line}", n + 1))
            })?;
        words.push(word);
    }

    if !closed {
        return Err(WordbankError::export("missing closing '];'"));
    }

    Ok(ParsedExport { export_name, words })
}

/// CRC32 of an artifact's bytes.
pub fn checksum(text: &str) -> u32 {
    crc32fast::hash(text.as_bytes())
}

/// What was written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenArtifact {
    pub path: String,
    pub bytes: usize,
    pub checksum: String,
}

/// Serialize words and write them to `path`, replacing any existing file.
pub fn write_export<P: AsRef<Path>, S: AsRef<str>>(
    path: P,
    export_name: &str,
    words: &[S],
) -> Result<WrittenArtifact> {
    let path = path.as_ref();
    let text = serialize(export_name, words);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &text)?;

    Ok(WrittenArtifact {
        path: path.display().to_string(),
        bytes: text.len(),
        checksum: format!("{:08x}", checksum(&text)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_shape() {
        let text = serialize("VALID_WORDS", &["apple", "bingo", "sphinx"]);
        let expected = "export const VALID_WORDS = [\n  \"apple\",\n  \"bingo\",\n  \"sphinx\",\n];\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_serialize_empty() {
        let words: Vec<String> = Vec::new();
        assert_eq!(serialize("VALID_WORDS", &words), "export const VALID_WORDS = [];\n");
    }

    #[test]
    fn test_parse_generated_artifact() {
        let text = serialize("WORDS", &["crane", "slate"]);
        let parsed = parse_export(&text).unwrap();

        assert_eq!(parsed.export_name, "WORDS");
        assert_eq!(parsed.words, vec!["crane", "slate"]);
    }

    #[test]
    fn test_parse_empty_artifact() {
        let parsed = parse_export("export const VALID_WORDS = [];\n").unwrap();
        assert!(parsed.words.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_export("").is_err());
        assert!(parse_export("const X = [\n];\n").is_err());
        assert!(parse_export("export const X = [\n  \"apple\",\n").is_err());
        assert!(parse_export("export const X = [\n  apple,\n];\n").is_err());
        assert!(parse_export("export const X = [\n];\n  \"late\",\n").is_err());
    }

    #[test]
    fn test_quotes_are_escaped() {
        let text = serialize("WORDS", &["ab\"cd", "back\\slash"]);
        assert!(text.contains("  \"ab\\\"cd\",\n"));

        let parsed = parse_export(&text).unwrap();
        assert_eq!(parsed.words, vec!["ab\"cd", "back\\slash"]);
    }

    #[test]
    fn test_checksum_is_stable() {
        let a = serialize("VALID_WORDS", &["apple", "bingo"]);
        let b = serialize("VALID_WORDS", &["apple", "bingo"]);
        let c = serialize("VALID_WORDS", &["apple"]);

        assert_eq!(checksum(&a), checksum(&b));
        assert_ne!(checksum(&a), checksum(&c));
    }

    #[test]
    fn test_write_export() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out").join("words.js");

        let written = write_export(&path, "VALID_WORDS", &["apple"]).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert_eq!(written.bytes, text.len());
        assert_eq!(written.checksum, format!("{:08x}", checksum(&text)));
        assert_eq!(parse_export(&text).unwrap().words, vec!["apple"]);
    }
}
