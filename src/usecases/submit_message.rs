//! Simulated submission of the contact form.
//!
//! Submitting → Succeeded and Succeeded → Idle are deferred transitions held
//! in a [`TimerQueue`]. At most one is pending at a time: the success expiry
//! is only scheduled once delivery fires.

use std::time::{Duration, Instant};

use crate::{
    domain::{
        draft_message::FormField,
        form_state::ContactFormState,
        submission::{SubmissionStatus, SubmissionTransition},
        validation::{validate, FormValidationError},
    },
    infra::config::SubmissionConfig,
};

use super::timers::{Clock, TimerId, TimerQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTiming {
    pub sending_delay: Duration,
    pub success_display: Duration,
}

impl Default for SubmissionTiming {
    fn default() -> Self {
        Self::from(&SubmissionConfig::default())
    }
}

impl From<&SubmissionConfig> for SubmissionTiming {
    fn from(config: &SubmissionConfig) -> Self {
        Self {
            sending_delay: config.sending_delay(),
            success_display: config.success_display(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started,
    /// The button is disabled; nothing changed.
    AlreadySubmitting,
    Invalid(FormValidationError),
    /// The simulator was shut down.
    Disposed,
}

pub struct SubmissionSimulator<C: Clock> {
    clock: C,
    timing: SubmissionTiming,
    timers: TimerQueue<SubmissionTransition>,
    pending: Option<TimerId>,
    disposed: bool,
}

impl<C: Clock> SubmissionSimulator<C> {
    pub fn new(clock: C, timing: SubmissionTiming) -> Self {
        Self {
            clock,
            timing,
            timers: TimerQueue::default(),
            pending: None,
            disposed: false,
        }
    }

    pub fn submit(&mut self, state: &mut ContactFormState) -> SubmitOutcome {
        if self.disposed {
            return SubmitOutcome::Disposed;
        }

        if state.status().is_submitting() {
            tracing::debug!("submit ignored while a submission is in flight");
            return SubmitOutcome::AlreadySubmitting;
        }

        if let Err(error) = validate(state.draft()) {
            tracing::debug!(field = error.field().as_label(), "submit blocked by validation");
            return SubmitOutcome::Invalid(error);
        }

        // A submit from Succeeded restarts the cycle; the old expiry must not
        // cut the next success message short.
        if let Some(id) = self.pending.take() {
            self.timers.cancel(id);
        }

        state.set_status(SubmissionStatus::Submitting);
        self.pending = Some(self.timers.schedule(
            self.clock.now(),
            self.timing.sending_delay,
            SubmissionTransition::Deliver,
        ));

        let draft = state.draft();
        tracing::info!(
            name_len = draft.value(FormField::Name).chars().count(),
            email_len = draft.value(FormField::Email).chars().count(),
            message_len = draft.value(FormField::Message).chars().count(),
            delay_ms = self.timing.sending_delay.as_millis() as u64,
            "submission started"
        );

        SubmitOutcome::Started
    }

    /// Applies every transition that is due. Returns how many fired.
    pub fn poll(&mut self, state: &mut ContactFormState) -> usize {
        if self.disposed {
            return 0;
        }

        let now = self.clock.now();
        let mut fired = 0;

        loop {
            let due = self.timers.drain_due(now);
            if due.is_empty() {
                break;
            }

            for (id, transition) in due {
                if self.pending == Some(id) {
                    self.pending = None;
                }
                fired += 1;
                self.apply(state, transition, now);
            }
        }

        fired
    }

    /// Cancels pending transitions; later polls and submits are no-ops.
    pub fn shutdown(&mut self) -> usize {
        if self.disposed {
            return 0;
        }

        self.disposed = true;
        self.pending = None;
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            tracing::debug!(cancelled, "pending submission transitions cancelled");
        }
        cancelled
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    fn apply(
        &mut self,
        state: &mut ContactFormState,
        transition: SubmissionTransition,
        now: Instant,
    ) {
        match transition {
            SubmissionTransition::Deliver => {
                if !state.status().is_submitting() {
                    tracing::warn!(
                        status = state.status().as_label(),
                        "delivery fired outside of submitting state"
                    );
                    return;
                }

                state.draft_mut().clear();
                state.set_status(SubmissionStatus::Succeeded);
                self.pending = Some(self.timers.schedule(
                    now,
                    self.timing.success_display,
                    SubmissionTransition::ExpireSuccess,
                ));
                tracing::info!("submission succeeded; draft cleared");
            }
            SubmissionTransition::ExpireSuccess => {
                if state.status().is_succeeded() {
                    state.set_status(SubmissionStatus::Idle);
                    tracing::debug!("success message expired");
                }
            }
        }
    }
}

impl<C: Clock> Drop for SubmissionSimulator<C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
