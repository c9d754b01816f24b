//! Domain layer: form entities and rules.

pub mod contact_profile;
pub mod draft_message;
pub mod events;
pub mod field_input_state;
pub mod form_state;
pub mod submission;
pub mod validation;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
