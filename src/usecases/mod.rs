//! Use case layer: form workflows and orchestration.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod shell;
pub mod submit_message;
pub mod timers;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
