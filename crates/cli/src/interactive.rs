//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Prompt for the API key without echoing it.
//! - Ask whether a failed request should be retried.
//! - Report operation outcomes on stderr ([`TerminalFeedback`]).
//!
//! Invariants:
//! - Prompts are only shown when stdin is a terminal; otherwise callers read
//!   plain lines or fail fast.
//! - The API key is never printed.

use std::io::{BufRead, IsTerminal};

use anyhow::{Context, Result};
use dialoguer::{Confirm, Password};
use evaldash_client::Feedback;
use secrecy::SecretString;

/// Whether prompts can be shown.
pub fn stdin_is_terminal() -> bool {
    std::io::stdin().is_terminal()
}

/// Ask for an API key.
///
/// On a terminal the key is read without echo; otherwise the next line of
/// `lines` is used. Returns `None` when input is exhausted.
pub fn prompt_api_key(lines: &mut dyn BufRead) -> Result<Option<SecretString>> {
    if stdin_is_terminal() {
        let key = Password::new()
            .with_prompt("API key")
            .allow_empty_password(true)
            .interact()
            .context("Failed to read API key")?;
        return Ok(Some(SecretString::new(key.into())));
    }

    let mut line = String::new();
    if lines.read_line(&mut line).context("Failed to read API key")? == 0 {
        return Ok(None);
    }
    Ok(Some(SecretString::new(line.trim().to_string().into())))
}

/// Ask whether `label` should be run again. Defaults to no.
pub fn confirm_retry(label: &str) -> bool {
    Confirm::new()
        .with_prompt(format!("Retry {label}?"))
        .default(false)
        .interact()
        .unwrap_or(false)
}

/// Feedback sink writing operator-facing messages to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalFeedback;

impl Feedback for TerminalFeedback {
    fn success(&self, label: &str) {
        tracing::debug!(operation = label, "Operation succeeded");
    }

    fn failure(&self, label: &str, message: &str, context: Option<&str>) {
        tracing::warn!(operation = label, "Operation failed: {message}");
        match context {
            Some(context) => eprintln!("{context}: {message}"),
            None => eprintln!("Error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Cursor;

    #[test]
    fn test_prompt_api_key_reads_line_when_not_terminal() {
        if stdin_is_terminal() {
            return;
        }
        let mut input = Cursor::new("  valid_key \nnext\n");
        let key = prompt_api_key(&mut input).unwrap().unwrap();
        assert_eq!(key.expose_secret(), "valid_key");
    }

    #[test]
    fn test_prompt_api_key_exhausted_input() {
        if stdin_is_terminal() {
            return;
        }
        let mut input = Cursor::new("");
        assert!(prompt_api_key(&mut input).unwrap().is_none());
    }
}
