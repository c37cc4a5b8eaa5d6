//! Declarative form validation.
//!
//! Each entity module exposes an ordered rule table; `evaluate` runs the
//! whole table against a draft and collects every violated field at once,
//! so forms can surface all errors in a single pass. Cross-field rules run
//! after per-field rules, against the fully assembled draft.

use std::collections::BTreeMap;

/// Field name -> first violated rule's message.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// A single validation rule. `check` returns `true` when the draft is
/// acceptable with respect to this rule.
pub struct Rule<T> {
    pub field: &'static str,
    pub check: fn(&T) -> bool,
    pub message: &'static str,
}

/// Evaluate a rule table against a draft.
///
/// Rules are ordered: once a field has failed, later rules for the same
/// field are skipped (the first message wins), but evaluation continues
/// for all other fields. `cross` rules are evaluated afterwards and only
/// attach to fields that are still clean.
pub fn evaluate<T>(draft: &T, rules: &[Rule<T>], cross: &[Rule<T>]) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    for rule in rules.iter().chain(cross.iter()) {
        if errors.contains_key(rule.field) {
            continue;
        }
        if !(rule.check)(draft) {
            errors.insert(rule.field, rule.message);
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A required text field: non-empty after trimming.
pub fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Minimum length in characters, applied to the trimmed value. Empty
/// values pass; pair with [`present`] for required fields.
pub fn min_len(value: &str, min: usize) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.chars().count() >= min
}

/// Maximum length in characters, applied to the trimmed value.
pub fn max_len(value: &str, max: usize) -> bool {
    value.trim().chars().count() <= max
}

/// Exact length in characters. Empty values pass.
pub fn exact_len(value: &str, len: usize) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.chars().count() == len
}

/// Strictly positive number. Empty values pass; pair with [`present`].
pub fn positive_number(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    trimmed.parse::<f64>().map(|n| n > 0.0).unwrap_or(false)
}

/// Minimal email shape check: one `@` with a dot somewhere after it.
pub fn email_format(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    match trimmed.split_once('@') {
        Some((local, host)) => {
            !local.is_empty()
                && host.contains('.')
                && !host.starts_with('.')
                && !host.ends_with('.')
        }
        None => false,
    }
}

pub fn has_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

pub fn has_uppercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
}

/// Empty-to-none normalization for optional fields: a blank input means
/// "absent", not a zero-length string.
pub fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample {
        name: String,
        note: String,
    }

    const RULES: &[Rule<Sample>] = &[
        Rule {
            field: "name",
            check: |s| present(&s.name),
            message: "Name is required",
        },
        Rule {
            field: "name",
            check: |s| min_len(&s.name, 3),
            message: "Minimum of 3 characters.",
        },
        Rule {
            field: "note",
            check: |s| max_len(&s.note, 5),
            message: "Maximum of 5 characters.",
        },
    ];

    #[test]
    fn collects_errors_for_every_field() {
        let draft = Sample {
            name: "".into(),
            note: "toolong".into(),
        };
        let errors = evaluate(&draft, RULES, &[]).unwrap_err();
        assert_eq!(errors.get("name"), Some(&"Name is required"));
        assert_eq!(errors.get("note"), Some(&"Maximum of 5 characters."));
    }

    #[test]
    fn first_violated_rule_per_field_wins() {
        let draft = Sample {
            name: "  ".into(),
            note: "ok".into(),
        };
        let errors = evaluate(&draft, RULES, &[]).unwrap_err();
        // "required" fires before "min length" for the same field
        assert_eq!(errors.get("name"), Some(&"Name is required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn cross_field_rules_run_after_field_rules() {
        let cross: &[Rule<Sample>] = &[Rule {
            field: "note",
            check: |s| s.name != s.note,
            message: "Must differ from name",
        }];
        let draft = Sample {
            name: "abc".into(),
            note: "abc".into(),
        };
        let errors = evaluate(&draft, RULES, cross).unwrap_err();
        assert_eq!(errors.get("note"), Some(&"Must differ from name"));
    }

    #[test]
    fn valid_draft_passes() {
        let draft = Sample {
            name: "abc".into(),
            note: "ok".into(),
        };
        assert!(evaluate(&draft, RULES, &[]).is_ok());
    }

    #[test]
    fn optional_helpers_treat_blank_as_absent() {
        assert!(min_len("", 3));
        assert!(exact_len("   ", 36));
        assert!(positive_number(""));
        assert_eq!(normalize_optional("  "), None);
        assert_eq!(normalize_optional(" x "), Some("x".to_string()));
    }

    #[test]
    fn positive_number_rejects_zero_and_garbage() {
        assert!(positive_number("10.5"));
        assert!(!positive_number("0"));
        assert!(!positive_number("-3"));
        assert!(!positive_number("abc"));
    }

    #[test]
    fn email_shape() {
        assert!(email_format("a@b.com"));
        assert!(!email_format("a.b.com"));
        assert!(!email_format("@b.com"));
        assert!(!email_format("a@bcom"));
    }
}
