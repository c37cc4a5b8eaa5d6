//! Shared contracts between the inventory frontend and the REST backend:
//! entity types, form drafts, request payloads and validation rules.

pub mod domain;
pub mod pagination;
pub mod validation;
