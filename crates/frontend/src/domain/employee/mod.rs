pub mod details;
pub mod list;

use contracts::domain::employee::{
    validate_profile, Employee, ProfileDraft, ProfilePayload,
};
use contracts::validation::FieldErrors;

use crate::shared::resource::Resource;

pub struct EmployeeResource;

impl Resource for EmployeeResource {
    type Entity = Employee;
    type Draft = ProfileDraft;
    type Payload = ProfilePayload;

    const BASE: &'static str = "/employees";
    const LABEL: &'static str = "employee";
    // the employee list endpoint has no `?search=`
    const SEARCHABLE: bool = false;

    fn id(entity: &Employee) -> &str {
        &entity.id
    }

    fn name_of(entity: &Employee) -> String {
        entity.full_name()
    }

    fn draft_of(entity: &Employee) -> ProfileDraft {
        ProfileDraft::from_entity(entity)
    }

    fn draft_id(draft: &ProfileDraft) -> Option<String> {
        draft.id.clone()
    }

    fn draft_name(draft: &ProfileDraft) -> String {
        format!("{} {}", draft.first_name.trim(), draft.last_name.trim())
    }

    fn validate(draft: &ProfileDraft) -> Result<(), FieldErrors> {
        validate_profile(draft)
    }

    fn payload(draft: &ProfileDraft) -> ProfilePayload {
        ProfilePayload::from(draft)
    }
}
