//! Markup stripping and field validation rules for user input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::ValidationError;

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)</?[A-Za-z!/?][^>]*>").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Maximum length of a user name, in characters.
pub const NAME_MAX_LEN: usize = 50;

/// Maximum length of an email address, in characters.
pub const EMAIL_MAX_LEN: usize = 254;

/// Removes HTML tags and comments, then the characters `<`, `>`, `"`
/// and `'` that could re-assemble markup. Text between tags is kept,
/// so `<b>Ann</b>` becomes `Ann`. Surrounding whitespace is trimmed.
pub fn sanitize_input(value: &str) -> String {
    let without_comments = COMMENT.replace_all(value, "");
    let without_tags = TAG.replace_all(&without_comments, "");
    without_tags
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '"' | '\''))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Sanitizes and validates a user name.
pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = sanitize_input(raw);
    if name.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    let len = name.chars().count();
    if len > NAME_MAX_LEN {
        return Err(ValidationError::too_long("name", NAME_MAX_LEN, len));
    }
    Ok(name)
}

/// Sanitizes and validates an email address against a `local@domain.tld`
/// shape.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = sanitize_input(raw);
    if email.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    let len = email.chars().count();
    if len > EMAIL_MAX_LEN {
        return Err(ValidationError::too_long("email", EMAIL_MAX_LEN, len));
    }
    if !EMAIL.is_match(&email) {
        return Err(ValidationError::invalid_format(
            "email",
            format!("invalid email address: {}", email),
        ));
    }
    Ok(email)
}

/// Validates that `age` lies strictly between 0 and `exclusive_max`.
pub fn validate_age(age: i32, exclusive_max: i32) -> Result<i32, ValidationError> {
    if age <= 0 || age >= exclusive_max {
        return Err(ValidationError::out_of_range(
            "age",
            1,
            i64::from(exclusive_max) - 1,
            i64::from(age),
        ));
    }
    Ok(age)
}
