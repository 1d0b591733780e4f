// File: src/rules.rs
// Purpose: Single-field constraints and their evaluation

use crate::record::FieldValue;
use crate::result::{ErrorKind, FieldError};
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Predicate for [`Rule::Custom`]. Receives the text value (if any) and today's date.
pub type Predicate = Arc<dyn Fn(Option<&str>, NaiveDate) -> bool + Send + Sync>;

/// One constraint attached to a field
///
/// Each rule carries the message shown when it fails.
#[derive(Clone)]
pub enum Rule {
    /// Fails on an absent value or empty text. `false` satisfies it.
    Required { message: String },

    /// Character-count bounds, both inclusive. Absent values pass.
    Length {
        min: Option<usize>,
        max: Option<usize>,
        too_short: String,
        too_long: String,
    },

    /// Text must match the regex. Absent values pass.
    Pattern { regex: Regex, message: String },

    /// Text must equal one of the listed values
    OneOf { values: Vec<String>, message: String },

    /// Arbitrary predicate reported under the given kind
    Custom {
        name: &'static str,
        kind: ErrorKind,
        predicate: Predicate,
        message: String,
    },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required {
            message: message.into(),
        }
    }

    pub fn length(
        min: Option<usize>,
        max: Option<usize>,
        too_short: impl Into<String>,
        too_long: impl Into<String>,
    ) -> Self {
        Rule::Length {
            min,
            max,
            too_short: too_short.into(),
            too_long: too_long.into(),
        }
    }

    pub fn pattern(regex: Regex, message: impl Into<String>) -> Self {
        Rule::Pattern {
            regex,
            message: message.into(),
        }
    }

    pub fn one_of<I, S>(values: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rule::OneOf {
            values: values.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    pub fn custom<F>(name: &'static str, kind: ErrorKind, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(Option<&str>, NaiveDate) -> bool + Send + Sync + 'static,
    {
        Rule::Custom {
            name,
            kind,
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Check a value against this rule
    pub fn check(&self, value: FieldValue<'_>, today: NaiveDate) -> Result<(), FieldError> {
        match self {
            Rule::Required { message } => {
                if value.is_absent() || value.as_text() == Some("") {
                    Err(FieldError::new(ErrorKind::Required, message.as_str()))
                } else {
                    Ok(())
                }
            }

            Rule::Length {
                min,
                max,
                too_short,
                too_long,
            } => {
                let Some(text) = value.as_text() else {
                    return Ok(());
                };
                let len = text.chars().count();
                if min.is_some_and(|min| len < min) {
                    return Err(FieldError::new(ErrorKind::TooShort, too_short.as_str()));
                }
                if max.is_some_and(|max| len > max) {
                    return Err(FieldError::new(ErrorKind::TooLong, too_long.as_str()));
                }
                Ok(())
            }

            Rule::Pattern { regex, message } => match value.as_text() {
                Some(text) if !regex.is_match(text) => {
                    Err(FieldError::new(ErrorKind::FormatMismatch, message.as_str()))
                }
                _ => Ok(()),
            },

            Rule::OneOf { values, message } => match value.as_text() {
                Some(text) if values.iter().any(|v| v == text) => Ok(()),
                _ => Err(FieldError::new(ErrorKind::InvalidEnum, message.as_str())),
            },

            Rule::Custom {
                kind,
                predicate,
                message,
                ..
            } => {
                if predicate(value.as_text(), today) {
                    Ok(())
                } else {
                    Err(FieldError::new(*kind, message.as_str()))
                }
            }
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required { .. } => f.write_str("Required"),
            Rule::Length { min, max, .. } => f
                .debug_struct("Length")
                .field("min", min)
                .field("max", max)
                .finish(),
            Rule::Pattern { regex, .. } => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Rule::OneOf { values, .. } => f.debug_tuple("OneOf").field(values).finish(),
            Rule::Custom { name, kind, .. } => f
                .debug_struct("Custom")
                .field("name", name)
                .field("kind", kind)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn kind(rule: &Rule, value: FieldValue<'_>) -> Option<ErrorKind> {
        rule.check(value, today()).err().map(|e| e.kind)
    }

    #[test]
    fn test_required() {
        let rule = Rule::required("missing");
        assert_eq!(kind(&rule, FieldValue::Absent), Some(ErrorKind::Required));
        assert_eq!(kind(&rule, FieldValue::Text("")), Some(ErrorKind::Required));
        assert_eq!(kind(&rule, FieldValue::Text(" ")), None);
        assert_eq!(kind(&rule, FieldValue::Bool(false)), None);
        assert_eq!(kind(&rule, FieldValue::Bool(true)), None);
    }

    #[rstest]
    #[case("abc", Some(ErrorKind::TooShort))]
    #[case("abcd", None)]
    #[case("abcdef", None)]
    #[case("abcdefg", Some(ErrorKind::TooLong))]
    #[case("éééé", None)]
    fn test_length_bounds(#[case] input: &str, #[case] expected: Option<ErrorKind>) {
        let rule = Rule::length(Some(4), Some(6), "short", "long");
        assert_eq!(kind(&rule, FieldValue::Text(input)), expected);
    }

    #[test]
    fn test_length_counts_scalar_values() {
        // Astral characters count once each
        let rule = Rule::length(Some(4), Some(4), "short", "long");
        assert_eq!(kind(&rule, FieldValue::Text("😀😀😀😀")), None);
        assert_eq!(kind(&rule, FieldValue::Text("😀😀😀")), Some(ErrorKind::TooShort));
        assert_eq!(kind(&rule, FieldValue::Text("😀😀😀😀😀")), Some(ErrorKind::TooLong));
    }

    #[test]
    fn test_length_skips_absent() {
        let rule = Rule::length(Some(4), None, "short", "long");
        assert_eq!(kind(&rule, FieldValue::Absent), None);
    }

    #[test]
    fn test_pattern() {
        let rule = Rule::pattern(Regex::new(r"^\d+$").unwrap(), "digits only");
        assert_eq!(kind(&rule, FieldValue::Text("123")), None);
        assert_eq!(kind(&rule, FieldValue::Text("12a")), Some(ErrorKind::FormatMismatch));
        assert_eq!(kind(&rule, FieldValue::Absent), None);
    }

    #[test]
    fn test_one_of() {
        let rule = Rule::one_of(["a", "b"], "not allowed");
        assert_eq!(kind(&rule, FieldValue::Text("a")), None);
        assert_eq!(kind(&rule, FieldValue::Text("A")), Some(ErrorKind::InvalidEnum));
        assert_eq!(kind(&rule, FieldValue::Text("")), Some(ErrorKind::InvalidEnum));
        assert_eq!(kind(&rule, FieldValue::Absent), Some(ErrorKind::InvalidEnum));
    }

    #[test]
    fn test_custom_sees_today() {
        let rule = Rule::custom("isToday", ErrorKind::PastDate, "not today", |_, today| {
            today == NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
        });
        assert_eq!(kind(&rule, FieldValue::Text("x")), None);

        let err = Rule::custom("never", ErrorKind::PastDate, "nope", |_, _| false)
            .check(FieldValue::Absent, today())
            .unwrap_err();
        assert_eq!(err.message, "nope");
    }

    #[test]
    fn test_debug_omits_messages() {
        let rule = Rule::length(Some(8), Some(15), "short", "long");
        assert_eq!(format!("{:?}", rule), "Length { min: Some(8), max: Some(15) }");
    }
}
