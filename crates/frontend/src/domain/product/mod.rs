pub mod api;
pub mod details;
pub mod list;

use contracts::domain::product::{self, Product, ProductDraft, ProductPayload};
use contracts::validation::FieldErrors;

use crate::shared::resource::Resource;

pub struct ProductResource;

impl Resource for ProductResource {
    type Entity = Product;
    type Draft = ProductDraft;
    type Payload = ProductPayload;

    const BASE: &'static str = "/products";
    const LABEL: &'static str = "product";

    fn id(entity: &Product) -> &str {
        &entity.id
    }

    fn name_of(entity: &Product) -> String {
        entity.name.clone()
    }

    fn draft_of(entity: &Product) -> ProductDraft {
        ProductDraft::from_entity(entity)
    }

    fn draft_id(draft: &ProductDraft) -> Option<String> {
        draft.id.clone()
    }

    fn draft_name(draft: &ProductDraft) -> String {
        draft.name.trim().to_string()
    }

    fn validate(draft: &ProductDraft) -> Result<(), FieldErrors> {
        product::validate(draft)
    }

    fn payload(draft: &ProductDraft) -> ProductPayload {
        ProductPayload::from(draft)
    }
}
