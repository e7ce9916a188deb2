//! Per-kind field checks.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use super::rules::{FieldKind, FieldViolation};
use crate::types::DbId;

/// Maximum length of a username.
pub const MAX_USERNAME_LEN: usize = 40;
/// Maximum length of an admin position.
pub const MAX_POSITION_LEN: usize = 20;
/// Maximum length of a director or actor name.
pub const MAX_PERSON_NAME_LEN: usize = 40;
/// Maximum length of a movie title.
pub const MAX_TITLE_LEN: usize = 40;
/// Maximum length of an acted-in character role.
pub const MAX_CHARACTER_ROLE_LEN: usize = 20;
/// Inclusive rating bounds.
pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 5;

/// Literal accepted in optional identifier fields to mean "no reference".
pub const NULL_LITERAL: &str = "NULL";

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("valid regex"));
static POSITION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]+$").expect("valid regex"));
static DIRECTOR_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid regex"));
static ACTOR_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]*$").expect("valid regex"));
static REVIEW_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[0-9A-Za-z _.,"'()!@$*=\-+&:]*$"#).expect("valid regex"));
static CHARACTER_ROLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z' \-]+$").expect("valid regex"));

/// Check `value` for `field` against the rules of `kind`.
pub fn check(kind: FieldKind, field: &str, value: &str) -> Result<(), FieldViolation> {
    let len = value.chars().count();
    let ok = match kind {
        FieldKind::Identifier => {
            IDENTIFIER_RE.is_match(value) && value.parse::<DbId>().is_ok()
        }
        FieldKind::Username => USERNAME_RE.is_match(value) && len <= MAX_USERNAME_LEN,
        FieldKind::Email => value.validate_email(),
        FieldKind::Password => !value.is_empty(),
        FieldKind::AdminPosition => POSITION_RE.is_match(value) && len <= MAX_POSITION_LEN,
        FieldKind::DirectorName => {
            DIRECTOR_NAME_RE.is_match(value) && len <= MAX_PERSON_NAME_LEN
        }
        FieldKind::ActorName => ACTOR_NAME_RE.is_match(value) && len <= MAX_PERSON_NAME_LEN,
        FieldKind::MovieTitle => (1..=MAX_TITLE_LEN).contains(&len),
        FieldKind::ReviewText => REVIEW_TEXT_RE.is_match(value),
        FieldKind::Rating => value
            .trim()
            .parse::<i64>()
            .is_ok_and(|r| (MIN_RATING..=MAX_RATING).contains(&r)),
        FieldKind::CharacterRole => {
            CHARACTER_ROLE_RE.is_match(value) && len <= MAX_CHARACTER_ROLE_LEN
        }
    };

    if ok {
        Ok(())
    } else {
        Err(violation(kind, field))
    }
}

/// Validate and parse a required identifier.
pub fn parse_identifier(field: &str, value: &str) -> Result<DbId, FieldViolation> {
    check(FieldKind::Identifier, field, value)?;
    value
        .parse()
        .map_err(|_| violation(FieldKind::Identifier, field))
}

/// Validate and parse an identifier that may be absent.
///
/// Empty values and the literal `NULL` mean "no reference". Anything else
/// follows the same whole-string rule as [`parse_identifier`], padding included.
pub fn parse_optional_identifier(
    field: &str,
    value: Option<&str>,
) -> Result<Option<DbId>, FieldViolation> {
    match value {
        None | Some("") | Some(NULL_LITERAL) => Ok(None),
        Some(v) => parse_identifier(field, v).map(Some),
    }
}

/// Validate and parse a rating.
pub fn parse_rating(field: &str, value: &str) -> Result<i64, FieldViolation> {
    check(FieldKind::Rating, field, value)?;
    value
        .trim()
        .parse()
        .map_err(|_| violation(FieldKind::Rating, field))
}

fn violation(kind: FieldKind, field: &str) -> FieldViolation {
    FieldViolation::new(field, kind, message(kind, field))
}

fn message(kind: FieldKind, field: &str) -> String {
    match kind {
        FieldKind::Identifier => format!("{field} must be numeric"),
        FieldKind::Username => format!(
            "{field} must be lowercase alphanumeric or underscore and at most {MAX_USERNAME_LEN} characters"
        ),
        FieldKind::Email => "invalid email format".to_string(),
        FieldKind::Password => "must provide password".to_string(),
        FieldKind::AdminPosition => format!(
            "{field} must be alpha characters and underscores and at most {MAX_POSITION_LEN} characters"
        ),
        FieldKind::DirectorName => format!(
            "{field} must be alpha characters and spaces and at most {MAX_PERSON_NAME_LEN} characters"
        ),
        FieldKind::ActorName => format!(
            "{field} must be alpha characters and spaces (or empty) and at most {MAX_PERSON_NAME_LEN} characters"
        ),
        FieldKind::MovieTitle => format!(
            "{field} must be between 1 and {MAX_TITLE_LEN} characters long (inclusive)"
        ),
        FieldKind::ReviewText => format!(
            "{field} must be alphanumeric with punctuation (no carets, braces, or octothorpes)"
        ),
        FieldKind::Rating => {
            format!("{field} must be an integer from {MIN_RATING} to {MAX_RATING}")
        }
        FieldKind::CharacterRole => format!(
            "{field} must be alphanumeric with spaces, apostrophes, or hyphens and at most {MAX_CHARACTER_ROLE_LEN} characters"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(kind: FieldKind, value: &str) -> bool {
        check(kind, "f", value).is_ok()
    }

    #[test]
    fn identifier_requires_whole_string_numeric() {
        assert!(passes(FieldKind::Identifier, "42"));
        assert!(passes(FieldKind::Identifier, "007"));
        assert!(!passes(FieldKind::Identifier, "42abc"));
        assert!(!passes(FieldKind::Identifier, "abc"));
        assert!(!passes(FieldKind::Identifier, "-1"));
        assert!(!passes(FieldKind::Identifier, ""));
        assert!(!passes(FieldKind::Identifier, " 4"));
    }

    #[test]
    fn identifier_rejects_overflow() {
        assert!(!passes(FieldKind::Identifier, "99999999999999999999999"));
    }

    #[test]
    fn identifier_violation_names_field() {
        let err = check(FieldKind::Identifier, "director_uid", "1x").unwrap_err();
        assert_eq!(err.field, "director_uid");
        assert_eq!(err.rule, "identifier");
        assert_eq!(err.message, "director_uid must be numeric");
    }

    #[test]
    fn username_rules() {
        assert!(passes(FieldKind::Username, "film_fan_99"));
        assert!(!passes(FieldKind::Username, "FilmFan"));
        assert!(!passes(FieldKind::Username, "film fan"));
        assert!(!passes(FieldKind::Username, "ok_then!"));
        assert!(passes(FieldKind::Username, &"a".repeat(40)));
        assert!(!passes(FieldKind::Username, &"a".repeat(41)));
        assert!(!passes(FieldKind::Username, ""));
    }

    #[test]
    fn position_rules() {
        assert!(passes(FieldKind::AdminPosition, "head_curator"));
        assert!(!passes(FieldKind::AdminPosition, "curator2"));
        assert!(!passes(FieldKind::AdminPosition, "a^b"));
        assert!(!passes(FieldKind::AdminPosition, &"x".repeat(21)));
    }

    #[test]
    fn person_names() {
        assert!(passes(FieldKind::DirectorName, "Agnes Varda"));
        assert!(!passes(FieldKind::DirectorName, ""));
        assert!(!passes(FieldKind::DirectorName, "R2 D2"));
        assert!(passes(FieldKind::ActorName, ""));
        assert!(passes(FieldKind::ActorName, "Toshiro Mifune"));
        assert!(!passes(FieldKind::ActorName, &"a".repeat(41)));
    }

    #[test]
    fn title_length_bounds() {
        assert!(!passes(FieldKind::MovieTitle, ""));
        assert!(passes(FieldKind::MovieTitle, "M"));
        assert!(passes(FieldKind::MovieTitle, &"t".repeat(40)));
        assert!(!passes(FieldKind::MovieTitle, &"t".repeat(41)));
    }

    #[test]
    fn review_text_charset() {
        assert!(passes(FieldKind::ReviewText, ""));
        assert!(passes(FieldKind::ReviewText, "Great film: \"9\" & (ok), it's a must-see!"));
        assert!(!passes(FieldKind::ReviewText, "ten/ten"));
        assert!(!passes(FieldKind::ReviewText, "no #hashtags"));
        assert!(!passes(FieldKind::ReviewText, "no {braces}"));
        assert!(!passes(FieldKind::ReviewText, "no ^carets"));
    }

    #[test]
    fn rating_bounds() {
        assert!(passes(FieldKind::Rating, "0"));
        assert!(passes(FieldKind::Rating, "5"));
        assert!(!passes(FieldKind::Rating, "6"));
        assert!(!passes(FieldKind::Rating, "-1"));
        assert!(!passes(FieldKind::Rating, "three"));
        assert_eq!(parse_rating("rating", "4").unwrap(), 4);
    }

    #[test]
    fn character_role_rules() {
        assert!(passes(FieldKind::CharacterRole, "Jean-Luc O'Neil"));
        assert!(!passes(FieldKind::CharacterRole, ""));
        assert!(!passes(FieldKind::CharacterRole, "Agent_Smith"));
        assert!(!passes(FieldKind::CharacterRole, &"r".repeat(21)));
    }

    #[test]
    fn email_and_password() {
        assert!(passes(FieldKind::Email, "critic@example.com"));
        assert!(!passes(FieldKind::Email, "not-an-email"));
        assert!(passes(FieldKind::Password, "hunter2"));
        assert!(!passes(FieldKind::Password, ""));
    }

    #[test]
    fn optional_identifier_accepts_absent_values() {
        assert_eq!(parse_optional_identifier("mid", None).unwrap(), None);
        assert_eq!(parse_optional_identifier("mid", Some("")).unwrap(), None);
        assert_eq!(parse_optional_identifier("mid", Some("NULL")).unwrap(), None);
        assert_eq!(parse_optional_identifier("mid", Some("12")).unwrap(), Some(12));
        assert!(parse_optional_identifier("mid", Some("12a")).is_err());
        assert!(parse_optional_identifier("mid", Some(" 4")).is_err());
        assert!(parse_optional_identifier("mid", Some(" ")).is_err());
    }
}
