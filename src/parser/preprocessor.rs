// CDL preprocessing: comment stripping and @name definition expansion.
//
// Runs before the lexer ever sees the text. Doc comments (`#!`) are
// harvested, block and line comments removed, and `@name = body`
// definition lines captured in insertion order. Each definition body is
// expanded against earlier definitions only; the remaining text then
// gets a single substitution pass, after which any surviving `$name`
// is an error.

use log::debug;
use regex::Regex;

use crate::config::MAX_INPUT_LEN;
use crate::error::{CdlError, Result};

/// Output of the preprocessing stage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preprocessed {
    /// Cleaned CDL text, ready for the lexer.
    pub text: String,
    /// `@name = body` definitions in insertion order, bodies resolved.
    pub definitions: Vec<(String, String)>,
    /// Trimmed contents of `#!` lines, in order.
    pub doc_comments: Vec<String>,
}

/// Preprocess a raw CDL expression.
pub fn preprocess(input: &str) -> Result<Preprocessed> {
    let length = input.chars().count();
    if length > MAX_INPUT_LEN {
        return Err(CdlError::InputTooLong {
            got: length,
            limit: MAX_INPUT_LEN,
        });
    }
    if input.trim().is_empty() {
        return Err(CdlError::EmptyInput);
    }

    // Doc-comment lines come out first so `#` stripping cannot eat them.
    let mut doc_comments = Vec::new();
    let mut kept_lines = Vec::new();
    for line in input.lines() {
        match line.trim_start().strip_prefix("#!") {
            Some(rest) => doc_comments.push(rest.trim().to_string()),
            None => kept_lines.push(line),
        }
    }
    let text = kept_lines.join("\n");

    // Block comments are non-greedy and may span lines.
    let text = Regex::new(r"(?s)/\*.*?\*/")
        .unwrap()
        .replace_all(&text, "")
        .into_owned();
    let text = Regex::new(r"#[^\n]*")
        .unwrap()
        .replace_all(&text, "")
        .into_owned();

    // Definition lines are removed from the body as they are captured.
    let definition_line = Regex::new(r"^@(\w+)\s*=\s*(.*)$").unwrap();
    let mut definitions: Vec<(String, String)> = Vec::new();
    let mut body_lines = Vec::new();
    for line in text.lines() {
        match definition_line.captures(line.trim()) {
            Some(caps) => {
                let name = caps[1].to_string();
                // Bodies see earlier definitions only.
                let body = substitute(caps[2].trim(), &definitions);
                debug!("CDL definition @{} = {}", name, body);
                definitions.push((name, body));
            }
            None => body_lines.push(line),
        }
    }

    let body = substitute(&body_lines.join("\n"), &definitions);
    if let Some(name) = first_unresolved_reference(&body) {
        return Err(CdlError::UnresolvedReference { name });
    }

    let body = body.trim().to_string();
    if body.is_empty() {
        return Err(CdlError::EmptyInput);
    }

    Ok(Preprocessed {
        text: body,
        definitions,
        doc_comments,
    })
}

// Replace every `$name` whose name is defined; unknown references are
// left in place for the caller to diagnose. `\w+` is maximal, so a
// reference followed by a word character is a different (longer) name.
fn substitute(text: &str, definitions: &[(String, String)]) -> String {
    let reference = Regex::new(r"\$(\w+)").unwrap();
    reference
        .replace_all(text, |caps: &regex::Captures| {
            match definitions.iter().find(|(name, _)| name == &caps[1]) {
                Some((_, body)) => body.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn first_unresolved_reference(text: &str) -> Option<String> {
    Regex::new(r"\$(\w+)")
        .unwrap()
        .captures(text)
        .map(|caps| caps[1].to_string())
}
