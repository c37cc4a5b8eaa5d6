//! Category entity, form draft and validation rules.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::validation::{
    evaluate, max_len, min_len, normalize_optional, present, FieldErrors, Rule,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub added_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    pub fn from_entity(category: &Category) -> Self {
        Self {
            id: Some(category.id.clone()),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: Option<String>,
}

impl From<&CategoryDraft> for CategoryPayload {
    fn from(draft: &CategoryDraft) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            description: normalize_optional(&draft.description),
        }
    }
}

const RULES: &[Rule<CategoryDraft>] = &[
    Rule {
        field: "name",
        check: |d| present(&d.name),
        message: "Category name is required.",
    },
    Rule {
        field: "name",
        check: |d| min_len(&d.name, 3),
        message: "Minimum of 3 characters.",
    },
    Rule {
        field: "name",
        check: |d| max_len(&d.name, 200),
        message: "Maximum of 200 characters.",
    },
    Rule {
        field: "description",
        check: |d| max_len(&d.description, 2000),
        message: "Maximum of 2000 characters.",
    },
];

pub fn validate(draft: &CategoryDraft) -> Result<(), FieldErrors> {
    evaluate(draft, RULES, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_char_name_reports_minimum() {
        let draft = CategoryDraft {
            name: "ab".into(),
            ..Default::default()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get("name"), Some(&"Minimum of 3 characters."));
    }

    #[test]
    fn description_is_optional() {
        let draft = CategoryDraft {
            name: "Analgesics".into(),
            ..Default::default()
        };
        assert!(validate(&draft).is_ok());
        assert_eq!(CategoryPayload::from(&draft).description, None);
    }

    #[test]
    fn overlong_description_is_rejected() {
        let draft = CategoryDraft {
            name: "Analgesics".into(),
            description: "x".repeat(2001),
            ..Default::default()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get("description"),
            Some(&"Maximum of 2000 characters.")
        );
    }
}
