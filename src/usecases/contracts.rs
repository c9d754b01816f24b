use std::time::Instant;

use anyhow::Result;

use crate::domain::{events::AppEvent, form_state::ContactFormState};

pub trait AppEventSource {
    /// Waits for input, returning no later than `wake_at` (if given) so
    /// deferred transitions fire on time.
    fn next_event(&mut self, wake_at: Option<Instant>) -> Result<Option<AppEvent>>;
}

pub trait FormOrchestrator {
    fn state(&self) -> &ContactFormState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
    fn next_deadline(&self) -> Option<Instant>;
    /// Cancels anything still scheduled. Called once the shell loop exits.
    fn shutdown(&mut self);
}
