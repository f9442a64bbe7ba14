//! Checks for the length and pattern constraints documented on wire fields.
//!
//! Nothing in this crate calls these from a setter. They back the
//! `validate()` methods on the top-level shapes and are public so callers can
//! check individual values before building a request.

use crate::error::ConstraintError;

/// Check that `value` is between `min` and `max` characters long, inclusive.
pub fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ConstraintError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ConstraintError::new(
            field,
            value,
            format!("length {len} outside {min}..={max}"),
        ));
    }
    Ok(())
}

/// Check that every character of `value` satisfies `allowed`.
pub fn check_chars(
    field: &'static str,
    value: &str,
    allowed: impl Fn(char) -> bool,
) -> Result<(), ConstraintError> {
    match value.chars().find(|&c| !allowed(c)) {
        Some(c) => Err(ConstraintError::new(
            field,
            value,
            format!("invalid character {c:?}"),
        )),
        None => Ok(()),
    }
}

/// `\w`: ASCII letters, digits and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// User name characters: `[\w+=,.@-]`.
pub fn is_user_name_char(c: char) -> bool {
    is_word_char(c) || matches!(c, '+' | '=' | ',' | '.' | '@' | '-')
}

/// Characters allowed in pagination tokens: tab, LF, CR and the XML
/// character ranges.
pub fn is_token_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Check a user path: either `/`, or `/` followed by one or more printable
/// ASCII characters (`\x21`-`\x7F`) and a trailing `/`.
pub fn check_path(field: &'static str, value: &str) -> Result<(), ConstraintError> {
    check_length(field, value, 1, 512)?;
    if value == "/" {
        return Ok(());
    }
    if value.len() < 3 || !value.starts_with('/') || !value.ends_with('/') {
        return Err(ConstraintError::new(
            field,
            value,
            "must be '/' or begin and end with '/'",
        ));
    }
    check_chars(field, value, |c| ('\u{21}'..='\u{7F}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(check_length("UserName", "a", 1, 64).is_ok());
        assert!(check_length("UserName", &"a".repeat(64), 1, 64).is_ok());
        assert!(check_length("UserName", "", 1, 64).is_err());
        assert!(check_length("UserName", &"a".repeat(65), 1, 64).is_err());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        assert!(check_length("Arn", "ééé", 3, 3).is_ok());
    }

    #[test]
    fn chars_reports_first_bad_char() {
        let err = check_chars("UserId", "abc$def!", is_word_char).unwrap_err();
        assert_eq!(err.field, "UserId");
        assert_eq!(err.reason, "invalid character '$'");
    }

    #[test]
    fn user_name_punctuation() {
        for c in "+=,.@-_".chars() {
            assert!(is_user_name_char(c), "{c} should be allowed");
        }
        assert!(!is_user_name_char(' '));
        assert!(!is_user_name_char('/'));
        assert!(!is_user_name_char('é'));
    }

    #[test]
    fn token_chars() {
        assert!(is_token_char('\t'));
        assert!(is_token_char('a'));
        assert!(is_token_char('\u{1F600}'));
        assert!(!is_token_char('\u{0}'));
        assert!(!is_token_char('\u{1F}'));
        assert!(!is_token_char('\u{FFFE}'));
    }

    #[test]
    fn valid_paths() {
        assert!(check_path("Path", "/").is_ok());
        assert!(check_path("Path", "/division_abc/subdivision_xyz/").is_ok());
        assert!(check_path("Path", "/a/").is_ok());
    }

    #[test]
    fn invalid_paths() {
        assert!(check_path("Path", "").is_err());
        assert!(check_path("Path", "//").is_err());
        assert!(check_path("Path", "engineering/").is_err());
        assert!(check_path("Path", "/engineering").is_err());
        assert!(check_path("Path", "/has space/").is_err());
        assert!(check_path("Path", &format!("/{}/", "a".repeat(511))).is_err());
    }
}
