use std::time::Instant;

use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        field_input_state::FieldInputState,
        form_state::{ContactFormState, FocusTarget, StatusNotice},
    },
    infra::contracts::{ClipboardAdapter, ExternalOpener},
};

use super::{
    contracts::FormOrchestrator,
    submit_message::{SubmissionSimulator, SubmitOutcome},
    timers::Clock,
};

pub struct DefaultFormOrchestrator<C, O, B>
where
    C: Clock,
    O: ExternalOpener,
    B: ClipboardAdapter,
{
    state: ContactFormState,
    simulator: SubmissionSimulator<C>,
    opener: O,
    clipboard: B,
}

impl<C, O, B> DefaultFormOrchestrator<C, O, B>
where
    C: Clock,
    O: ExternalOpener,
    B: ClipboardAdapter,
{
    pub fn new(
        state: ContactFormState,
        simulator: SubmissionSimulator<C>,
        opener: O,
        clipboard: B,
    ) -> Self {
        Self {
            state,
            simulator,
            opener,
            clipboard,
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl {
            match key.key.as_str() {
                "s" => self.submit(),
                "y" if self.state.focus() == FocusTarget::Links => self.copy_selected_link(),
                _ => {}
            }
            return;
        }

        match (self.state.focus(), key.key.as_str()) {
            (_, "tab") => self.move_focus(true),
            (_, "backtab") => self.move_focus(false),
            (FocusTarget::Links, "down" | "j") => self.state.select_next_link(),
            (FocusTarget::Links, "up" | "k") => self.state.select_previous_link(),
            (FocusTarget::Links, "enter" | "o") => self.open_selected_link(),
            (FocusTarget::Links, "y") => self.copy_selected_link(),
            (_, "down") => self.move_focus(true),
            (_, "up") => self.move_focus(false),
            (FocusTarget::SendButton, "enter" | " ") => self.submit(),
            (FocusTarget::Field(field), "enter") => {
                if self.state.draft().field(field).is_multiline() {
                    self.edit(|input| {
                        input.insert_char('\n');
                    });
                } else {
                    self.move_focus(true);
                }
            }
            (FocusTarget::Field(_), "backspace") => self.edit(|input| input.delete_char_before()),
            (FocusTarget::Field(_), "delete") => self.edit(|input| input.delete_char_at()),
            (FocusTarget::Field(_), "left") => self.edit(|input| input.move_cursor_left()),
            (FocusTarget::Field(_), "right") => self.edit(|input| input.move_cursor_right()),
            (FocusTarget::Field(_), "home") => self.edit(|input| input.move_cursor_home()),
            (FocusTarget::Field(_), "end") => self.edit(|input| input.move_cursor_end()),
            (FocusTarget::Field(_), _) => {
                if let Some(ch) = key.printable_char() {
                    self.edit(|input| {
                        input.insert_char(ch);
                    });
                }
            }
            _ => {}
        }
    }

    fn edit<F>(&mut self, apply: F)
    where
        F: FnOnce(&mut FieldInputState),
    {
        let Some(field) = self.state.focused_field() else {
            return;
        };

        apply(self.state.draft_mut().field_mut(field));
        self.state.clear_notice();
    }

    fn move_focus(&mut self, forward: bool) {
        let focus = self.state.focus();
        self.state
            .set_focus(if forward { focus.next() } else { focus.previous() });
    }

    fn submit(&mut self) {
        match self.simulator.submit(&mut self.state) {
            SubmitOutcome::Started => self.state.clear_notice(),
            SubmitOutcome::Invalid(error) => {
                self.state.set_focus(FocusTarget::Field(error.field()));
                self.state.set_notice(StatusNotice::warning(error.to_string()));
            }
            SubmitOutcome::AlreadySubmitting | SubmitOutcome::Disposed => {}
        }
    }

    fn open_selected_link(&mut self) {
        let Some(link) = self.state.selected_link().cloned() else {
            return;
        };

        match self.opener.open(&link.target) {
            Ok(()) => {
                tracing::info!(label = %link.label, "contact link opened");
                self.state
                    .set_notice(StatusNotice::info(format!("Opened {}", link.label)));
            }
            Err(error) => {
                tracing::warn!(label = %link.label, error = ?error, "failed to open contact link");
                self.state.set_notice(StatusNotice::warning(format!(
                    "Could not open {}",
                    link.label
                )));
            }
        }
    }

    fn copy_selected_link(&mut self) {
        let Some(link) = self.state.selected_link().cloned() else {
            return;
        };

        match self.clipboard.copy_text(&link.display) {
            Ok(()) => {
                tracing::info!(label = %link.label, "contact link copied");
                self.state
                    .set_notice(StatusNotice::info(format!("Copied {}", link.display)));
            }
            Err(error) => {
                tracing::warn!(label = %link.label, error = ?error, "failed to copy contact link");
                self.state
                    .set_notice(StatusNotice::warning("Clipboard is not available"));
            }
        }
    }
}

impl<C, O, B> FormOrchestrator for DefaultFormOrchestrator<C, O, B>
where
    C: Clock,
    O: ExternalOpener,
    B: ClipboardAdapter,
{
    fn state(&self) -> &ContactFormState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        if !self.state.is_running() {
            return Ok(());
        }

        self.simulator.poll(&mut self.state);

        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => {
                self.state.stop();
                self.shutdown();
            }
            AppEvent::InputKey(key) => self.handle_key(key),
        }

        Ok(())
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.simulator.next_deadline()
    }

    fn shutdown(&mut self) {
        self.simulator.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        domain::{
            contact_profile::{ContactLink, ContactProfile},
            draft_message::FormField,
            submission::SubmissionStatus,
        },
        infra::stubs::{RecordingOpener, StubClipboard},
        usecases::{submit_message::SubmissionTiming, timers::ManualClock},
    };

    type TestOrchestrator = DefaultFormOrchestrator<ManualClock, RecordingOpener, StubClipboard>;

    fn orchestrator(clock: &ManualClock) -> TestOrchestrator {
        let profile = ContactProfile {
            heading: "Get In Touch".to_owned(),
            intro: "Say hello".to_owned(),
            email: "owner@example.com".to_owned(),
            availability: "Remote".to_owned(),
            socials: vec![ContactLink {
                label: "GitHub".to_owned(),
                target: "https://github.com/owner".to_owned(),
                display: "github.com/owner".to_owned(),
            }],
        };

        DefaultFormOrchestrator::new(
            ContactFormState::new(profile),
            SubmissionSimulator::new(clock.clone(), SubmissionTiming::default()),
            RecordingOpener::default(),
            StubClipboard::default(),
        )
    }

    fn key(name: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(name, false))
    }

    fn ctrl(name: &str) -> AppEvent {
        AppEvent::InputKey(KeyInput::new(name, true))
    }

    fn type_text(orchestrator: &mut TestOrchestrator, text: &str) {
        for ch in text.chars() {
            let name = if ch == '\n' { "enter".to_owned() } else { ch.to_string() };
            orchestrator
                .handle_event(key(&name))
                .expect("key must be handled");
        }
    }

    fn fill_form(orchestrator: &mut TestOrchestrator) {
        type_text(orchestrator, "Ada\nada@example.com\nHello\nthere");
    }

    fn tick(orchestrator: &mut TestOrchestrator) {
        orchestrator
            .handle_event(AppEvent::Tick)
            .expect("tick must be handled");
    }

    #[test]
    fn stops_on_quit_event() {
        let clock = ManualClock::new();
        let mut orchestrator = orchestrator(&clock);

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("event must be handled");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn typing_fills_focused_field_and_enter_advances() {
        let clock = ManualClock::new();
        let mut orchestrator = orchestrator(&clock);

        fill_form(&mut orchestrator);

        let draft = orchestrator.state().draft();
        assert_eq!(draft.value(FormField::Name), "Ada");
        assert_eq!(draft.value(FormField::Email), "ada@example.com");
        assert_eq!(draft.value(FormField::Message), "Hello\nthere");
        assert_eq!(
            orchestrator.state().focus(),
            FocusTarget::Field(FormField::Message)
        );
    }

    #[test]
    fn editing_one_field_leaves_others_unchanged() {
        let clock = ManualClock::new();
        let mut orchestrator = orchestrator(&clock);
        fill_form(&mut orchestrator);

        orchestrator.handle_event(key("backtab")).expect("handled");
        orchestrator.handle_event(key("backspace")).expect("handled");

        let draft = orchestrator.state().draft();
        assert_eq!(draft.value(FormField::Email), "ada@example.co");
        assert_eq!(draft.value(FormField::Name), "Ada");
        assert_eq!(draft.value(FormField::Message), "Hello\nthere");
    }

    #[test]
    fn full_submission_cycle_on_ticks() {
        let clock = ManualClock::new();
        let mut orchestrator = orchestrator(&clock);
        fill_form(&mut orchestrator);

        orchestrator.handle_event(ctrl("s")).expect("handled");
        assert_eq!(orchestrator.state().status(), SubmissionStatus::Submitting);

        clock.advance(Duration::from_millis(1_500));
        tick(&mut orchestrator);
        assert_eq!(orchestrator.state().status(), SubmissionStatus::Succeeded);
        assert!(orchestrator.state().draft().is_empty());

        clock.advance(Duration::from_millis(3_000));
        tick(&mut orchestrator);
        assert_eq!(orchestrator.state().status(), SubmissionStatus::Idle);
        assert_eq!(orchestrator.next_deadline(), None);
    }

    #[test]
    fn send_button_enter_submits_and_second_press_is_ignored() {
        let clock = ManualClock::new();
        let mut orchestrator = orchestrator(&clock);
        fill_form(&mut orchestrator);
        orchestrator.handle_event(key("tab")).expect("handled");
        assert_eq!(orchestrator.state().focus(), FocusTarget::SendButton);

        orchestrator.handle_event(key("enter")).expect("handled");
        let deadline = orchestrator.next_deadline();
        clock.advance(Duration::from_millis(200));
        orchestrator.handle_event(key("enter")).expect("handled");

        assert_eq!(orchestrator.state().status(), SubmissionStatus::Submitting);
        assert_eq!(orchestrator.next_deadline(), deadline);
    }

    #[test]
    fn invalid_submit_focuses_field_and_shows_hint_until_next_edit() {
        let clock = ManualClock::new();
        let mut orchestrator = orchestrator(&clock);
        type_text(&mut orchestrator, "Ada\nnot-an-email\nHi");

        orchestrator.handle_event(ctrl("s")).expect("handled");

        let state = orchestrator.state();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.focus(), FocusTarget::Field(FormField::Email));
        assert_eq!(
            state.notice().map(|n| n.text.as_str()),
            Some("Please enter a valid email address.")
        );

        orchestrator.handle_event(key("x")).expect("handled");
        assert_eq!(orchestrator.state().notice(), None);
    }

    #[test]
    fn quit_cancels_pending_submission() {
        let clock = ManualClock::new();
        let mut orchestrator = orchestrator(&clock);
        fill_form(&mut orchestrator);
        orchestrator.handle_event(ctrl("s")).expect("handled");

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("handled");
        clock.advance(Duration::from_secs(10));
        tick(&mut orchestrator);

        assert_eq!(orchestrator.next_deadline(), None);
        assert_eq!(orchestrator.state().status(), SubmissionStatus::Submitting);
        assert!(!orchestrator.state().draft().is_empty());
    }

    #[test]
    fn links_focus_opens_and_copies_selected_link() {
        let clock = ManualClock::new();
        let mut orchestrator = orchestrator(&clock);
        orchestrator.handle_event(key("backtab")).expect("handled");
        assert_eq!(orchestrator.state().focus(), FocusTarget::Links);

        orchestrator.handle_event(key("enter")).expect("handled");
        orchestrator.handle_event(key("j")).expect("handled");
        orchestrator.handle_event(key("o")).expect("handled");
        orchestrator.handle_event(ctrl("y")).expect("handled");

        assert_eq!(
            *orchestrator.opener.opened.borrow(),
            vec![
                "mailto:owner@example.com".to_owned(),
                "https://github.com/owner".to_owned()
            ]
        );
        assert_eq!(
            orchestrator.clipboard.last_copied.as_deref(),
            Some("github.com/owner")
        );
    }

    #[test]
    fn failed_open_is_reported_without_stopping() {
        let clock = ManualClock::new();
        let mut orchestrator = orchestrator(&clock);
        orchestrator.opener.fail = true;
        orchestrator.handle_event(key("backtab")).expect("handled");

        orchestrator.handle_event(key("enter")).expect("handled");

        assert!(orchestrator.state().is_running());
        assert_eq!(
            orchestrator.state().notice().map(|n| n.text.as_str()),
            Some("Could not open Email")
        );
    }
}
