//! JSON output.

use evaldash_client::Envelope;

/// Pretty-print the envelope as received, with a trailing newline.
pub fn format_envelope(envelope: &Envelope) -> String {
    let mut output =
        serde_json::to_string_pretty(envelope).unwrap_or_else(|_| envelope.to_string());
    output.push('\n');
    output
}
