pub mod details;
pub mod list;

use contracts::domain::category::{self, Category, CategoryDraft, CategoryPayload};
use contracts::validation::FieldErrors;

use crate::shared::resource::Resource;

pub struct CategoryResource;

impl Resource for CategoryResource {
    type Entity = Category;
    type Draft = CategoryDraft;
    type Payload = CategoryPayload;

    const BASE: &'static str = "/categories";
    const LABEL: &'static str = "category";

    fn id(entity: &Category) -> &str {
        &entity.id
    }

    fn name_of(entity: &Category) -> String {
        entity.name.clone()
    }

    fn draft_of(entity: &Category) -> CategoryDraft {
        CategoryDraft::from_entity(entity)
    }

    fn draft_id(draft: &CategoryDraft) -> Option<String> {
        draft.id.clone()
    }

    fn draft_name(draft: &CategoryDraft) -> String {
        draft.name.trim().to_string()
    }

    fn validate(draft: &CategoryDraft) -> Result<(), FieldErrors> {
        category::validate(draft)
    }

    fn payload(draft: &CategoryDraft) -> CategoryPayload {
        CategoryPayload::from(draft)
    }
}
