pub mod patterns;

use crate::types::connection::ConnectionInput;
use serde::Serialize;

pub const MAX_NICKNAME_CHARS: usize = 50;
pub const MAX_PLATFORM_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Every rule runs; all applicable errors are collected.
pub fn validate(input: &ConnectionInput) -> ValidationResult {
    let mut errors = Vec::new();
    check_required(
        &mut errors,
        "nickname",
        input.nickname.as_deref(),
        MAX_NICKNAME_CHARS,
    );
    check_required(
        &mut errors,
        "platform",
        input.platform.as_deref(),
        MAX_PLATFORM_CHARS,
    );

    let has_markup = [input.nickname.as_deref(), input.platform.as_deref()]
        .into_iter()
        .flatten()
        .any(patterns::contains_dangerous_markup);
    if has_markup {
        errors.push("input contains invalid characters".to_string());
    }

    ValidationResult::from_errors(errors)
}

fn check_required(errors: &mut Vec<String>, field: &str, value: Option<&str>, max_chars: usize) {
    match value {
        None => errors.push(format!("{field} is required")),
        Some(text) if text.trim().is_empty() => errors.push(format!("{field} is required")),
        Some(text) if text.chars().count() > max_chars => {
            errors.push(format!("{field} must be {max_chars} characters or fewer"))
        }
        Some(_) => {}
    }
}

/// Cleans nickname and platform; other fields pass through unchanged.
pub fn sanitize(input: ConnectionInput) -> ConnectionInput {
    ConnectionInput {
        nickname: input.nickname.as_deref().map(patterns::sanitize_text),
        platform: input.platform.as_deref().map(patterns::sanitize_text),
        rest: input.rest,
    }
}
