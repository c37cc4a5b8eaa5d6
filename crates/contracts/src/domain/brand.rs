//! Brand entity, form draft and validation rules.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::validation::{evaluate, max_len, min_len, present, FieldErrors, Rule};

/// A product brand as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Username of the creator, denormalized by the backend.
    #[serde(default)]
    pub added_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

/// What the brand form holds while the user is typing.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandDraft {
    pub id: Option<String>,
    pub name: String,
    pub is_active: bool,
}

impl Default for BrandDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            // new brands start active, matching the backend default
            is_active: true,
        }
    }
}

impl BrandDraft {
    pub fn from_entity(brand: &Brand) -> Self {
        Self {
            id: Some(brand.id.clone()),
            name: brand.name.clone(),
            is_active: brand.is_active,
        }
    }
}

/// Request body for brand create/update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandPayload {
    pub name: String,
    pub is_active: bool,
}

impl From<&BrandDraft> for BrandPayload {
    fn from(draft: &BrandDraft) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            is_active: draft.is_active,
        }
    }
}

const RULES: &[Rule<BrandDraft>] = &[
    Rule {
        field: "name",
        check: |d| present(&d.name),
        message: "Brand name is required",
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
];

pub fn validate(draft: &BrandDraft) -> Result<(), FieldErrors> {
    evaluate(draft, RULES, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_required() {
        let draft = BrandDraft::default();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get("name"), Some(&"Brand name is required"));
    }

    #[test]
    fn short_name_reports_minimum() {
        let draft = BrandDraft {
            name: "ab".into(),
            ..Default::default()
        };
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get("name"), Some(&"Minimum of 3 characters."));
    }

    #[test]
    fn valid_draft_passes_and_payload_trims() {
        let draft = BrandDraft {
            name: "  Acme  ".into(),
            ..Default::default()
        };
        assert!(validate(&draft).is_ok());
        let payload = BrandPayload::from(&draft);
        assert_eq!(payload.name, "Acme");
        assert!(payload.is_active);
    }

    #[test]
    fn deserializes_backend_dict() {
        let json = r#"{
            "id": "3f1e9d1c-0000-0000-0000-000000000001",
            "name": "Acme",
            "is_active": true,
            "employee_id": "3f1e9d1c-0000-0000-0000-000000000002",
            "added_by": "jdoe",
            "created_at": "2024-05-01T09:30:00",
            "last_updated": "2024-05-02T10:00:00.123456"
        }"#;
        let brand: Brand = serde_json::from_str(json).unwrap();
        assert_eq!(brand.name, "Acme");
        assert_eq!(brand.added_by.as_deref(), Some("jdoe"));
        assert!(brand.created_at.is_some());
    }
}
