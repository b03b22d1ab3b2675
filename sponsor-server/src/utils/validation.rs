//! Input validation helpers
//!
//! Presence checks for create payloads plus length limits. Email format
//! and uniqueness are deliberately not checked.

use shared::error::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Names: sponsors, templates, tiers, deliverable titles
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Notes and descriptions
pub const MAX_NOTE_LEN: usize = 2000;

/// Email subjects
pub const MAX_SUBJECT_LEN: usize = 500;

/// Template bodies
pub const MAX_HTML_LEN: usize = 100_000;

// ── Presence ────────────────────────────────────────────────────────

/// A blank string counts as missing
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Require every `(field, value)` pair to be present.
///
/// All missing fields are reported together with one static message,
/// e.g. "name and email are required".
pub fn require_fields(fields: &[(&str, &Option<String>)]) -> AppResult<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::required(&missing))
    }
}

// ── Length ──────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Caller-supplied id, or a fresh UUID v4
pub fn id_or_new(id: &Option<String>) -> String {
    present(id)
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_blank_is_missing() {
        assert_eq!(present(&Some("  ".into())), None);
        assert_eq!(present(&Some(" Acme ".into())), Some("Acme"));
        assert_eq!(present(&None), None);
    }

    #[test]
    fn test_require_fields_reports_all_missing() {
        let name = None;
        let email = Some(String::new());
        let err = require_fields(&[("name", &name), ("email", &email)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "name and email are required");

        let name = Some("Acme".to_string());
        assert_eq!(
            require_fields(&[("name", &name), ("email", &email)])
                .unwrap_err()
                .message,
            "email is required"
        );
    }

    #[test]
    fn test_length_limits() {
        assert!(validate_required_text("Acme", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(2001)), "notes", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn test_id_or_new() {
        assert_eq!(id_or_new(&Some("s1".into())), "s1");
        let generated = id_or_new(&None);
        assert!(uuid::Uuid::parse_str(&generated).is_ok());
        assert_ne!(generated, id_or_new(&None));
    }
}
