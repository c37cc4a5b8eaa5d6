pub mod details;
pub mod list;

use contracts::domain::brand::{self, Brand, BrandDraft, BrandPayload};
use contracts::validation::FieldErrors;

use crate::shared::resource::Resource;

pub struct BrandResource;

impl Resource for BrandResource {
    type Entity = Brand;
    type Draft = BrandDraft;
    type Payload = BrandPayload;

    const BASE: &'static str = "/brands";
    const LABEL: &'static str = "brand";
    // `/brands/{size}/{num}` takes no `?search=`; the list filters the
    // fetched page client-side instead
    const SEARCHABLE: bool = false;

    fn id(entity: &Brand) -> &str {
        &entity.id
    }

    fn name_of(entity: &Brand) -> String {
        entity.name.clone()
    }

    fn draft_of(entity: &Brand) -> BrandDraft {
        BrandDraft::from_entity(entity)
    }

    fn draft_id(draft: &BrandDraft) -> Option<String> {
        draft.id.clone()
    }

    fn draft_name(draft: &BrandDraft) -> String {
        draft.name.trim().to_string()
    }

    fn validate(draft: &BrandDraft) -> Result<(), FieldErrors> {
        brand::validate(draft)
    }

    fn payload(draft: &BrandDraft) -> BrandPayload {
        BrandPayload::from(draft)
    }
}
