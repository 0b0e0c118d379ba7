//! Клиентская валидация полей форм.
//!
//! Правила повторяют серверные: формы проверяют ввод до запроса, чтобы
//! не гонять заведомо некорректные данные по сети.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidateEmail, ValidationError};

// "2h 30m", "2h30m", "2h", "30m"; часы всегда перед минутами.
static RUNTIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+h(?: ?\d+m)?|\d+m)$").expect("runtime regex must compile"));

/// Проверяет формат email.
pub fn email_format(email: &str) -> Result<(), ValidationError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

/// Проверяет стойкость пароля: не короче 6 символов, есть строчная и
/// заглавная буквы и цифра.
pub fn password_strength(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= 6;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if long_enough && has_upper && has_lower && has_digit {
        Ok(())
    } else {
        Err(ValidationError::new("password_strength"))
    }
}

/// Проверяет строку длительности фильма: `"2h 30m"`, `"2h"`, `"30m"`.
pub fn runtime_format(runtime: &str) -> Result<(), ValidationError> {
    if RUNTIME_RE.is_match(runtime.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new("runtime_format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_accepts_mixed_case_with_digit() {
        assert!(password_strength("Abc123").is_ok());
        assert!(password_strength("SuperPassword123").is_ok());
    }

    #[test]
    fn password_rejects_missing_character_classes() {
        assert!(password_strength("abc123").is_err(), "нет заглавной");
        assert!(password_strength("ABC123").is_err(), "нет строчной");
        assert!(password_strength("Abcdef").is_err(), "нет цифры");
        assert!(password_strength("Ab1").is_err(), "слишком короткий");
    }

    #[test]
    fn runtime_accepts_hour_minute_forms() {
        assert!(runtime_format("2h 30m").is_ok());
        assert!(runtime_format("2h30m").is_ok());
        assert!(runtime_format("2h").is_ok());
        assert!(runtime_format("30m").is_ok());
    }

    #[test]
    fn runtime_rejects_free_form_text() {
        assert!(runtime_format("2 hours").is_err());
        assert!(runtime_format("h30m").is_err());
        assert!(runtime_format("").is_err());
        assert!(runtime_format("30m 2h").is_err());
    }

    #[test]
    fn email_check_is_sane() {
        assert!(email_format("user@example.com").is_ok());
        assert!(email_format("user@").is_err());
        assert!(email_format("пример").is_err());
    }
}
