//! Employee entity plus the three employee-facing form schemas:
//! registration, login and profile update.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::validation::{
    evaluate, email_format, has_digit, has_lowercase, has_uppercase, max_len, min_len,
    normalize_optional, present, FieldErrors, Rule,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Salesperson,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Manager, Role::Salesperson];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Salesperson => "salesperson",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        match value.trim() {
            "manager" => Some(Role::Manager),
            "salesperson" => Some(Role::Salesperson),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub home_address: String,
    pub role: Role,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_updated: Option<NaiveDateTime>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref() {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub home_address: String,
    pub role: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub home_address: String,
    pub role: String,
    pub is_admin: bool,
}

impl From<&RegisterDraft> for RegisterPayload {
    fn from(draft: &RegisterDraft) -> Self {
        Self {
            username: draft.username.trim().to_string(),
            email: draft.email.trim().to_string(),
            password: draft.password.clone(),
            first_name: draft.first_name.trim().to_string(),
            middle_name: normalize_optional(&draft.middle_name),
            last_name: draft.last_name.trim().to_string(),
            home_address: draft.home_address.trim().to_string(),
            role: draft.role.trim().to_string(),
            is_admin: draft.is_admin,
        }
    }
}

const REGISTER_RULES: &[Rule<RegisterDraft>] = &[
    Rule {
        field: "username",
        check: |d| present(&d.username),
        message: "Username is required",
    },
    Rule {
        field: "username",
        check: |d| min_len(&d.username, 3),
        message: "Minimum of 3 characters",
    },
    Rule {
        field: "username",
        check: |d| max_len(&d.username, 200),
        message: "Maximum of 200 characters",
    },
    Rule {
        field: "email",
        check: |d| present(&d.email),
        message: "Email is required",
    },
    Rule {
        field: "email",
        check: |d| email_format(&d.email),
        message: "Invalid email format",
    },
    Rule {
        field: "password",
        check: |d| present(&d.password),
        message: "Password is required",
    },
    Rule {
        field: "password",
        check: |d| d.password.chars().count() >= 8,
        message: "Password must be at least 8 characters",
    },
    Rule {
        field: "password",
        check: |d| max_len(&d.password, 200),
        message: "Maximum of 200 characters",
    },
    Rule {
        field: "password",
        check: |d| has_digit(&d.password),
        message: "Password must contain at least one number",
    },
    Rule {
        field: "password",
        check: |d| has_uppercase(&d.password),
        message: "Password must contain at least one uppercase",
    },
    Rule {
        field: "password",
        check: |d| has_lowercase(&d.password),
        message: "Password must contain at least one lowercase",
    },
    Rule {
        field: "confirm_password",
        check: |d| present(&d.confirm_password),
        message: "Confirm password is required",
    },
    Rule {
        field: "first_name",
        check: |d| present(&d.first_name),
        message: "First name is required",
    },
    Rule {
        field: "first_name",
        check: |d| min_len(&d.first_name, 3),
        message: "Minimum of 3 characters",
    },
    Rule {
        field: "first_name",
        check: |d| max_len(&d.first_name, 200),
        message: "Maximum of 200 characters",
    },
    Rule {
        field: "last_name",
        check: |d| present(&d.last_name),
        message: "Last name is required",
    },
    Rule {
        field: "last_name",
        check: |d| min_len(&d.last_name, 3),
        message: "Minimum of 3 characters",
    },
    Rule {
        field: "last_name",
        check: |d| max_len(&d.last_name, 200),
        message: "Maximum of 200 characters",
    },
    Rule {
        field: "home_address",
        check: |d| present(&d.home_address),
        message: "Home address is required",
    },
    Rule {
        field: "home_address",
        check: |d| min_len(&d.home_address, 10),
        message: "Minimum of 10 characters",
    },
    Rule {
        field: "home_address",
        check: |d| max_len(&d.home_address, 500),
        message: "Maximum of 500 characters",
    },
    Rule {
        field: "role",
        check: |d| present(&d.role),
        message: "Employee role is required",
    },
    Rule {
        field: "role",
        check: |d| !present(&d.role) || Role::parse(&d.role).is_some(),
        message: "Role must be either manager or salesperson",
    },
];

const REGISTER_CROSS_RULES: &[Rule<RegisterDraft>] = &[Rule {
    field: "confirm_password",
    check: |d| d.confirm_password == d.password,
    message: "Password must match",
}];

pub fn validate_registration(draft: &RegisterDraft) -> Result<(), FieldErrors> {
    evaluate(draft, REGISTER_RULES, REGISTER_CROSS_RULES)
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDraft {
    pub email_or_username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginPayload {
    pub email_or_username: String,
    pub password: String,
}

impl From<&LoginDraft> for LoginPayload {
    fn from(draft: &LoginDraft) -> Self {
        Self {
            email_or_username: draft.email_or_username.trim().to_string(),
            password: draft.password.clone(),
        }
    }
}

const LOGIN_RULES: &[Rule<LoginDraft>] = &[
    Rule {
        field: "email_or_username",
        check: |d| present(&d.email_or_username),
        message: "Email or username is required",
    },
    Rule {
        field: "email_or_username",
        check: |d| min_len(&d.email_or_username, 3),
        message: "Minimum of 3 characters",
    },
    Rule {
        field: "email_or_username",
        check: |d| max_len(&d.email_or_username, 200),
        message: "Maximum of 200 characters",
    },
    Rule {
        field: "password",
        check: |d| present(&d.password),
        message: "Password is required",
    },
];

pub fn validate_login(draft: &LoginDraft) -> Result<(), FieldErrors> {
    evaluate(draft, LOGIN_RULES, &[])
}

// ---------------------------------------------------------------------------
// Profile update
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub id: Option<String>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub home_address: String,
}

impl ProfileDraft {
    pub fn from_entity(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id.clone()),
            first_name: employee.first_name.clone(),
            middle_name: employee.middle_name.clone().unwrap_or_default(),
            last_name: employee.last_name.clone(),
            home_address: employee.home_address.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePayload {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub home_address: String,
}

impl From<&ProfileDraft> for ProfilePayload {
    fn from(draft: &ProfileDraft) -> Self {
        Self {
            first_name: draft.first_name.trim().to_string(),
            middle_name: normalize_optional(&draft.middle_name),
            last_name: draft.last_name.trim().to_string(),
            home_address: draft.home_address.trim().to_string(),
        }
    }
}

const PROFILE_RULES: &[Rule<ProfileDraft>] = &[
    Rule {
        field: "first_name",
        check: |d| present(&d.first_name),
        message: "First name is required",
    },
    Rule {
        field: "first_name",
        check: |d| min_len(&d.first_name, 3),
        message: "Minimum of 3 characters",
    },
    Rule {
        field: "first_name",
        check: |d| max_len(&d.first_name, 200),
        message: "Maximum of 200 characters",
    },
    Rule {
        field: "last_name",
        check: |d| present(&d.last_name),
        message: "Last name is required",
    },
    Rule {
        field: "last_name",
        check: |d| min_len(&d.last_name, 3),
        message: "Minimum of 3 characters",
    },
    Rule {
        field: "last_name",
        check: |d| max_len(&d.last_name, 200),
        message: "Maximum of 200 characters",
    },
    Rule {
        field: "home_address",
        check: |d| present(&d.home_address),
        message: "Home address is required",
    },
    Rule {
        field: "home_address",
        check: |d| min_len(&d.home_address, 10),
        message: "Minimum of 10 characters",
    },
    Rule {
        field: "home_address",
        check: |d| max_len(&d.home_address, 500),
        message: "Maximum of 500 characters",
    },
];

pub fn validate_profile(draft: &ProfileDraft) -> Result<(), FieldErrors> {
    evaluate(draft, PROFILE_RULES, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegisterDraft {
        RegisterDraft {
            username: "jdoe".into(),
            email: "jdoe@example.com".into(),
            password: "Sup3rSecret".into(),
            confirm_password: "Sup3rSecret".into(),
            first_name: "Jane".into(),
            middle_name: String::new(),
            last_name: "Doe".into(),
            home_address: "12 Long Street, Springfield".into(),
            role: "manager".into(),
            is_admin: false,
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(validate_registration(&valid_registration()).is_ok());
    }

    #[test]
    fn weak_passwords_report_the_missing_class() {
        let mut draft = valid_registration();
        draft.password = "alllowercase1".into();
        draft.confirm_password = draft.password.clone();
        let errors = validate_registration(&draft).unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some(&"Password must contain at least one uppercase")
        );

        draft.password = "NoDigitsHere".into();
        draft.confirm_password = draft.password.clone();
        let errors = validate_registration(&draft).unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some(&"Password must contain at least one number")
        );
    }

    #[test]
    fn mismatched_confirmation_is_a_cross_field_error() {
        let mut draft = valid_registration();
        draft.confirm_password = "Different1".into();
        let errors = validate_registration(&draft).unwrap_err();
        assert_eq!(errors.get("confirm_password"), Some(&"Password must match"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        let mut draft = valid_registration();
        draft.role = "wizard".into();
        let errors = validate_registration(&draft).unwrap_err();
        assert_eq!(
            errors.get("role"),
            Some(&"Role must be either manager or salesperson")
        );
    }

    #[test]
    fn every_missing_required_field_is_reported_at_once() {
        let errors = validate_registration(&RegisterDraft::default()).unwrap_err();
        for field in [
            "username",
            "email",
            "password",
            "confirm_password",
            "first_name",
            "last_name",
            "home_address",
            "role",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
        // middle name is optional
        assert!(!errors.contains_key("middle_name"));
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = validate_login(&LoginDraft::default()).unwrap_err();
        assert_eq!(
            errors.get("email_or_username"),
            Some(&"Email or username is required")
        );
        assert_eq!(errors.get("password"), Some(&"Password is required"));
    }

    #[test]
    fn profile_address_has_a_floor() {
        let mut draft = ProfileDraft {
            id: None,
            first_name: "Jane".into(),
            middle_name: String::new(),
            last_name: "Doe".into(),
            home_address: "too short".into(),
        };
        let errors = validate_profile(&draft).unwrap_err();
        assert_eq!(
            errors.get("home_address"),
            Some(&"Minimum of 10 characters")
        );
        draft.home_address = "12 Long Street, Springfield".into();
        assert!(validate_profile(&draft).is_ok());
    }

    #[test]
    fn role_round_trips_through_serde() {
        let employee: Employee = serde_json::from_str(
            r#"{
                "id": "3f1e9d1c-0000-0000-0000-000000000003",
                "username": "jdoe",
                "email": "jdoe@example.com",
                "first_name": "Jane",
                "last_name": "Doe",
                "home_address": "12 Long Street, Springfield",
                "role": "salesperson",
                "is_admin": true
            }"#,
        )
        .unwrap();
        assert_eq!(employee.role, Role::Salesperson);
        assert_eq!(employee.full_name(), "Jane Doe");
        assert!(employee.is_admin);
    }
}
