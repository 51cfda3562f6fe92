//! Declarative request validation.
//!
//! Requests expose their fields as `(name, value)` pairs through [`Validate`].
//! Each field name is looked up in [`RULES`], and the checks of the matching
//! [`FieldRule`] run in order. Fields without a rule only get the required
//! check. Violations are collected per field, in field declaration order, into
//! a [`ValidationReport`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::user::phone::normalize_phone_number;

pub const FULL_NAME: &str = "full_name";
pub const PASSWORD: &str = "password";
pub const PHONE_NUMBER: &str = "phone_number";

/// Characters that satisfy the password special character requirement.
const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+[]{};':"|,.<>?"#;

/// Optional `+`, country code 62, two groups of 3-4 digits each optionally
/// followed by a hyphen, then a final group of 3-4 digits.
const INDONESIAN_PHONE_PATTERN: &str = r"^(\+62|62)([0-9]{3,4}-?){2}[0-9]{3,4}$";

/// Rule table consulted for every validated field.
pub static RULES: &[FieldRule] = &[
    FieldRule {
        field: FULL_NAME,
        checks: &[Check::Length { min: 3, max: 60 }],
    },
    FieldRule {
        field: PASSWORD,
        checks: &[
            Check::Contains(CharacterClass::Special),
            Check::Contains(CharacterClass::Capital),
            Check::Contains(CharacterClass::Number),
            Check::Length { min: 6, max: 64 },
        ],
    },
    FieldRule {
        field: PHONE_NUMBER,
        checks: &[
            Check::IndonesianPhoneFormat,
            Check::NormalizedLength { min: 0, max: 13 },
        ],
    },
];

static INDONESIAN_PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn indonesian_phone_regex() -> &'static Regex {
    INDONESIAN_PHONE_RE.get_or_init(|| {
        Regex::new(INDONESIAN_PHONE_PATTERN)
            .unwrap_or_else(|error| panic!("phone number regex failed to compile: {error}"))
    })
}

/// Validation rules attached to one field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub checks: &'static [Check],
}

/// A single check applied to a non-empty field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Character count within `[min, max]`.
    Length { min: usize, max: usize },
    /// At least one character of the class.
    Contains(CharacterClass),
    /// Indonesian mobile number format.
    IndonesianPhoneFormat,
    /// Length after phone normalization within `[min, max]`.
    NormalizedLength { min: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Special,
    Capital,
    Number,
}

impl CharacterClass {
    fn matches(self, c: char) -> bool {
        match self {
            CharacterClass::Special => SPECIAL_CHARACTERS.contains(c),
            CharacterClass::Capital => c.is_ascii_uppercase(),
            CharacterClass::Number => c.is_ascii_digit(),
        }
    }

    fn message(self) -> &'static str {
        match self {
            CharacterClass::Special => "at least 1 special character",
            CharacterClass::Capital => "at least 1 capital character",
            CharacterClass::Number => "at least 1 number",
        }
    }
}

impl Check {
    fn violation(self, value: &str) -> Option<String> {
        match self {
            Check::Length { min, max } => {
                let length = value.chars().count();
                (length < min || length > max).then(|| length_message(min, max))
            }
            Check::Contains(class) => (!value.chars().any(|c| class.matches(c)))
                .then(|| class.message().to_string()),
            Check::IndonesianPhoneFormat => (!indonesian_phone_regex().is_match(value))
                .then(|| "must be indonesian(+62) format".to_string()),
            Check::NormalizedLength { min, max } => {
                let length = normalize_phone_number(value).len();
                (length < min || length > max).then(|| length_message(min, max))
            }
        }
    }
}

fn length_message(min: usize, max: usize) -> String {
    format!("must be more than {min} and less than {max} characters long")
}

/// Find the rule for a field name.
pub fn rule_for(field: &str) -> Option<&'static FieldRule> {
    RULES.iter().find(|rule| rule.field == field)
}

/// A named field value exposed for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: &'a str,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a str) -> Self {
        Self { name, value }
    }
}

/// Requests that can be checked against the rule table.
pub trait Validate {
    /// Fields in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Violations of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolations {
    pub field: &'static str,
    pub messages: Vec<String>,
}

/// Per-field violations in discovery order. Empty means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<FieldViolations>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolations] {
        &self.violations
    }

    /// Messages recorded for a field, if any.
    pub fn messages_for(&self, field: &str) -> Option<&[String]> {
        self.violations
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.messages.as_slice())
    }

    /// One line per field, formatted as `<field> : <message>, <message>`.
    pub fn messages(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|v| format!("{} : {}", v.field, v.messages.join(", ")))
            .collect()
    }

    /// `Ok` when no violation was recorded.
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn record(&mut self, field: &'static str, messages: Vec<String>) {
        if !messages.is_empty() {
            self.violations.push(FieldViolations { field, messages });
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationReport {}

/// Validate every field; empty fields are reported as required.
pub fn validate(request: &impl Validate) -> ValidationReport {
    run(request, true)
}

/// Validate only the fields that carry a value; empty fields are skipped.
pub fn validate_supplied(request: &impl Validate) -> ValidationReport {
    run(request, false)
}

fn run(request: &impl Validate, empty_is_violation: bool) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in request.fields() {
        if field.value.is_empty() {
            if empty_is_violation {
                report.record(field.name, vec![format!("{} is required", field.name)]);
            }
            continue;
        }

        let messages = rule_for(field.name)
            .map(|rule| {
                rule.checks
                    .iter()
                    .filter_map(|check| check.violation(field.value))
                    .collect()
            })
            .unwrap_or_default();

        report.record(field.name, messages);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Request {
        full_name: &'static str,
        password: &'static str,
        phone_number: &'static str,
    }

    impl Validate for Request {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::new(FULL_NAME, self.full_name),
                Field::new(PASSWORD, self.password),
                Field::new(PHONE_NUMBER, self.phone_number),
            ]
        }
    }

    struct Untagged {
        nickname: &'static str,
    }

    impl Validate for Untagged {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::new("nickname", self.nickname)]
        }
    }

    fn valid() -> Request {
        Request {
            full_name: "John Doe",
            password: "Password123!",
            phone_number: "+6281234567890",
        }
    }

    fn password_messages(password: &'static str) -> Vec<String> {
        let report = validate(&Request { password, ..valid() });
        report
            .messages_for(PASSWORD)
            .map(|m| m.to_vec())
            .unwrap_or_default()
    }

    fn phone_messages(phone_number: &'static str) -> Vec<String> {
        let report = validate(&Request {
            phone_number,
            ..valid()
        });
        report
            .messages_for(PHONE_NUMBER)
            .map(|m| m.to_vec())
            .unwrap_or_default()
    }

    #[test]
    fn test_valid_request_has_empty_report() {
        let report = validate(&valid());
        assert!(report.is_empty());
        assert_eq!(report.into_result(), Ok(()));
    }

    #[test]
    fn test_missing_fields_are_required() {
        let report = validate(&Request {
            full_name: "",
            password: "",
            phone_number: "",
        });

        assert_eq!(
            report.messages(),
            vec![
                "full_name : full_name is required",
                "password : password is required",
                "phone_number : phone_number is required",
            ]
        );
    }

    #[test]
    fn test_full_name_length_bounds() {
        for (name, valid_length) in [
            ("Jo", false),
            ("Joe", true),
            ("a".repeat(60).leak() as &str, true),
            ("a".repeat(61).leak() as &str, false),
        ] {
            let report = validate(&Request {
                full_name: name,
                ..valid()
            });
            assert_eq!(
                report.messages_for(FULL_NAME).is_none(),
                valid_length,
                "{name}"
            );
        }

        let report = validate(&Request {
            full_name: "Jo",
            ..valid()
        });
        assert_eq!(
            report.messages_for(FULL_NAME),
            Some(&["must be more than 3 and less than 60 characters long".to_string()][..])
        );
    }

    #[test]
    fn test_full_name_counts_characters() {
        let report = validate(&Request {
            full_name: "Éva",
            ..valid()
        });
        assert!(report.is_empty());
    }

    #[test]
    fn test_password_missing_classes() {
        assert_eq!(password_messages("password123!"), vec!["at least 1 capital character"]);
        assert_eq!(password_messages("Password123"), vec!["at least 1 special character"]);
        assert_eq!(password_messages("Password!!"), vec!["at least 1 number"]);
        assert_eq!(
            password_messages("password"),
            vec![
                "at least 1 special character",
                "at least 1 capital character",
                "at least 1 number",
            ]
        );
    }

    #[test]
    fn test_password_special_character_set() {
        for c in SPECIAL_CHARACTERS.chars() {
            let password: &'static str = format!("Passw0rd{c}").leak();
            assert!(password_messages(password).is_empty(), "{c} should count");
        }
        for c in ['-', '=', '/', '~', '`', '\\', ' '] {
            let password: &'static str = format!("Passw0rd{c}").leak();
            assert_eq!(password_messages(password), vec!["at least 1 special character"]);
        }
    }

    #[test]
    fn test_password_length_bounds() {
        assert_eq!(
            password_messages("Pw1!"),
            vec!["must be more than 6 and less than 64 characters long"]
        );
        assert!(password_messages("Pwd12!").is_empty());

        let long: &'static str = format!("P1!{}", "a".repeat(61)).leak();
        assert!(password_messages(long).is_empty());

        let too_long: &'static str = format!("P1!{}", "a".repeat(62)).leak();
        assert_eq!(
            password_messages(too_long),
            vec!["must be more than 6 and less than 64 characters long"]
        );
    }

    #[test]
    fn test_phone_number_formats() {
        for phone in [
            "+6281234567890",
            "6281234567890",
            "+62812-3456-789",
            "+628123456789",
            "62812345678",
        ] {
            assert!(phone_messages(phone).is_empty(), "{phone} should be valid");
        }
    }

    #[test]
    fn test_phone_number_not_indonesian() {
        for phone in [
            "5281200000000",
            "081234567890",
            "+62812_3456_789",
            "+62abc4567890",
            "+6281",
        ] {
            assert_eq!(
                phone_messages(phone),
                vec!["must be indonesian(+62) format"],
                "{phone}"
            );
        }
    }

    #[test]
    fn test_phone_number_too_long() {
        assert_eq!(
            phone_messages("+62812000000000"),
            vec!["must be more than 0 and less than 13 characters long"]
        );
        assert_eq!(
            phone_messages("+628123-4567-8901"),
            vec!["must be more than 0 and less than 13 characters long"]
        );
    }

    #[test]
    fn test_phone_number_wrong_format_and_too_long() {
        assert_eq!(
            phone_messages("+6281234567890123"),
            vec![
                "must be indonesian(+62) format",
                "must be more than 0 and less than 13 characters long",
            ]
        );
    }

    #[test]
    fn test_report_follows_field_order() {
        let report = validate(&Request {
            full_name: "Jo",
            password: "Pwd!",
            phone_number: "52",
        });

        let fields: Vec<&str> = report.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec![FULL_NAME, PASSWORD, PHONE_NUMBER]);
        assert_eq!(
            report.messages()[1],
            "password : at least 1 number, \
             must be more than 6 and less than 64 characters long"
        );
    }

    #[test]
    fn test_untagged_field_only_required() {
        assert!(validate(&Untagged { nickname: "x" }).is_empty());
        assert_eq!(
            validate(&Untagged { nickname: "" }).messages(),
            vec!["nickname : nickname is required"]
        );
    }

    #[test]
    fn test_validate_supplied_skips_empty_fields() {
        let report = validate_supplied(&Request {
            full_name: "",
            password: "",
            phone_number: "+6281234567890",
        });
        assert!(report.is_empty());

        let report = validate_supplied(&Request {
            full_name: "Jo",
            password: "",
            phone_number: "",
        });
        assert_eq!(
            report.messages(),
            vec!["full_name : must be more than 3 and less than 60 characters long"]
        );
    }

    #[test]
    fn test_rule_table_lookup() {
        assert_eq!(rule_for(PHONE_NUMBER).map(|r| r.field), Some(PHONE_NUMBER));
        assert!(rule_for("nickname").is_none());
    }
}
