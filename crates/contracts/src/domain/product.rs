//! Product entity, form draft and validation rules.
//!
//! A product must resolve to exactly one brand identity: either an
//! existing `brand_id` or a `brand_name` for a brand created inline by
//! the backend. The cross-field rule below enforces that at least one is
//! present; the form clears `brand_name` when an existing brand is picked.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::validation::{
    evaluate, exact_len, max_len, min_len, normalize_optional, positive_number, present,
    FieldErrors, Rule,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub barcode: Option<String>,
    pub name: String,
    #[serde(default)]
    pub unit_cost_price: Option<f64>,
    #[serde(default)]
    pub unit_selling_price: Option<f64>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub brand_id: Option<String>,
    #[serde(default)]
    pub quantity_in_stock: Option<i64>,
    #[serde(default)]
    pub reordering_point: Option<i64>,
    #[serde(default)]
    pub economic_ordering_quantity: Option<i64>,
    /// Denormalized by the list endpoints.
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub added_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

/// Form state; numeric fields stay strings until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub id: Option<String>,
    pub barcode: String,
    pub name: String,
    pub unit_cost_price: String,
    pub unit_selling_price: String,
    pub category_id: String,
    pub brand_id: String,
    pub brand_name: String,
}

impl ProductDraft {
    pub fn from_entity(product: &Product) -> Self {
        Self {
            id: Some(product.id.clone()),
            barcode: product.barcode.clone().unwrap_or_default(),
            name: product.name.clone(),
            unit_cost_price: product
                .unit_cost_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            unit_selling_price: product
                .unit_selling_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            category_id: product.category_id.clone().unwrap_or_default(),
            brand_id: product.brand_id.clone().unwrap_or_default(),
            brand_name: String::new(),
        }
    }

    /// An existing brand selection wins over an inline brand name.
    pub fn select_brand(&mut self, brand_id: String) {
        if !brand_id.is_empty() {
            self.brand_name.clear();
        }
        self.brand_id = brand_id;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub barcode: Option<String>,
    pub name: String,
    pub unit_cost_price: f64,
    pub unit_selling_price: f64,
    pub category_id: String,
    pub brand_id: Option<String>,
    pub brand_name: Option<String>,
}

impl From<&ProductDraft> for ProductPayload {
    fn from(draft: &ProductDraft) -> Self {
        Self {
            barcode: normalize_optional(&draft.barcode),
            name: draft.name.trim().to_string(),
            // validation guarantees both prices parse as positive numbers
            unit_cost_price: draft.unit_cost_price.trim().parse().unwrap_or(0.0),
            unit_selling_price: draft.unit_selling_price.trim().parse().unwrap_or(0.0),
            category_id: draft.category_id.trim().to_string(),
            brand_id: normalize_optional(&draft.brand_id),
            brand_name: normalize_optional(&draft.brand_name),
        }
    }
}

const RULES: &[Rule<ProductDraft>] = &[
    Rule {
        field: "barcode",
        check: |d| max_len(&d.barcode, 20),
        message: "Maximum of 20 characters.",
    },
    Rule {
        field: "name",
        check: |d| present(&d.name),
        message: "Product name is required.",
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
        field: "unit_cost_price",
        check: |d| present(&d.unit_cost_price),
        message: "Unit cost price is required.",
    },
    Rule {
        field: "unit_cost_price",
        check: |d| positive_number(&d.unit_cost_price),
        message: "Unit cost price must be greater than zero.",
    },
    Rule {
        field: "unit_selling_price",
        check: |d| present(&d.unit_selling_price),
        message: "Unit selling price is required.",
    },
    Rule {
        field: "unit_selling_price",
        check: |d| positive_number(&d.unit_selling_price),
        message: "Unit selling price must be greater than zero.",
    },
    Rule {
        field: "category_id",
        check: |d| present(&d.category_id),
        message: "Category is required.",
    },
    Rule {
        field: "category_id",
        check: |d| exact_len(&d.category_id, 36),
        message: "Must be exactly 36 characters long.",
    },
    Rule {
        field: "brand_name",
        check: |d| max_len(&d.brand_name, 200),
        message: "Maximum of 200 characters.",
    },
];

const CROSS_RULES: &[Rule<ProductDraft>] = &[Rule {
    field: "brand_id",
    check: |d| present(&d.brand_id) || present(&d.brand_name),
    message: "Brand name is required.",
}];

pub fn validate(draft: &ProductDraft) -> Result<(), FieldErrors> {
    evaluate(draft, RULES, CROSS_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            id: None,
            barcode: "4601234567890".into(),
            name: "Paracetamol 500mg".into(),
            unit_cost_price: "1.25".into(),
            unit_selling_price: "2.50".into(),
            category_id: "3f1e9d1c-0000-0000-0000-000000000001".into(),
            brand_id: "3f1e9d1c-0000-0000-0000-000000000002".into(),
            brand_name: String::new(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate(&valid_draft()).is_ok());
    }

    #[test]
    fn missing_brand_identity_fails_even_when_rest_is_valid() {
        let mut draft = valid_draft();
        draft.brand_id = String::new();
        draft.brand_name = "   ".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.get("brand_id"), Some(&"Brand name is required."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn inline_brand_name_satisfies_the_brand_rule() {
        let mut draft = valid_draft();
        draft.brand_id = String::new();
        draft.brand_name = "New Brand".into();
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut draft = valid_draft();
        draft.unit_cost_price = "0".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get("unit_cost_price"),
            Some(&"Unit cost price must be greater than zero.")
        );
    }

    #[test]
    fn empty_price_reports_required_not_numeric() {
        let mut draft = valid_draft();
        draft.unit_selling_price = String::new();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get("unit_selling_price"),
            Some(&"Unit selling price is required.")
        );
    }

    #[test]
    fn category_id_must_be_a_uuid_length_string() {
        let mut draft = valid_draft();
        draft.category_id = "short".into();
        let errors = validate(&draft).unwrap_err();
        assert_eq!(
            errors.get("category_id"),
            Some(&"Must be exactly 36 characters long.")
        );
    }

    #[test]
    fn all_errors_are_collected_in_one_pass() {
        let draft = ProductDraft::default();
        let errors = validate(&draft).unwrap_err();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("unit_cost_price"));
        assert!(errors.contains_key("unit_selling_price"));
        assert!(errors.contains_key("category_id"));
        assert!(errors.contains_key("brand_id"));
        // optional barcode does not fail when empty
        assert!(!errors.contains_key("barcode"));
    }

    #[test]
    fn payload_round_trips_client_settable_fields() {
        let draft = valid_draft();
        let payload = ProductPayload::from(&draft);
        assert_eq!(payload.name, draft.name);
        assert_eq!(payload.barcode.as_deref(), Some("4601234567890"));
        assert_eq!(payload.unit_cost_price, 1.25);
        assert_eq!(payload.unit_selling_price, 2.5);
        assert_eq!(payload.category_id, draft.category_id);
        assert_eq!(payload.brand_id.as_deref(), Some(draft.brand_id.as_str()));
        assert_eq!(payload.brand_name, None);
    }

    #[test]
    fn selecting_a_brand_clears_the_inline_name() {
        let mut draft = valid_draft();
        draft.brand_id = String::new();
        draft.brand_name = "New Brand".into();
        draft.select_brand("3f1e9d1c-0000-0000-0000-000000000002".into());
        assert!(draft.brand_name.is_empty());
        // clearing the selection keeps whatever name is typed afterwards
        draft.select_brand(String::new());
        assert!(draft.brand_id.is_empty());
    }
}
