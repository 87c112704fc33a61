//! Custom field validators used by create requests.

use validator::ValidationError;

/// Validate that a string does not contain control characters or NULL bytes.
pub fn no_control_chars(value: &str) -> Result<(), ValidationError> {
    if value
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\r' && c != '\t')
    {
        return Err(ValidationError::new("no_control_chars")
            .with_message("Must not contain control characters".into()));
    }
    Ok(())
}

/// Validate that a string is not empty after trimming whitespace.
pub fn not_empty_trimmed(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_empty_trimmed")
            .with_message("Must not be empty".into()));
    }
    Ok(())
}

/// Validate a display name: non-blank, one line, no control characters.
pub fn display_name(value: &str) -> Result<(), ValidationError> {
    not_empty_trimmed(value)?;
    if value.chars().any(|c| c.is_control()) {
        return Err(ValidationError::new("display_name")
            .with_message("Must be a single line without control characters".into()));
    }
    Ok(())
}

/// Validate that a string is a UUID in hyphenated text form.
pub fn uuid_text(value: &str) -> Result<(), ValidationError> {
    if uuid::Uuid::try_parse(value).is_err() {
        return Err(ValidationError::new("uuid").with_message("Must be a valid UUID".into()));
    }
    Ok(())
}
