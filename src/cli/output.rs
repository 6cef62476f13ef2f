//! JSON result boundary
//!
//! Exactly one JSON object per invocation goes to stdout: the typed success
//! payload, or `{"message": ...}` on failure. Anything else (logs, verbose
//! chatter) belongs on stderr.

use serde::Serialize;

use crate::cli::error::CliResult;

/// Error envelope mirrored to callers as `{"message": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub message: String,
}

/// Print `value` as a single JSON line on stdout.
pub fn emit<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Render the error envelope for `message`.
pub fn error_envelope(message: &str) -> String {
    serde_json::to_string(&ErrorEnvelope {
        message: message.to_string(),
    })
    .unwrap_or_else(|_| r#"{"message":"failed to render error"}"#.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn envelope_is_a_single_json_object_with_a_message() {
        let rendered = error_envelope("AWS profile is not set");
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["message"], "AWS profile is not set");
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn envelope_escapes_embedded_quotes() {
        let rendered = error_envelope(r#"push of "app:v1" was refused"#);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["message"], r#"push of "app:v1" was refused"#);
    }
}
