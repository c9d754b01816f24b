use anyhow::Result;

use crate::{
    domain::form_state::ContactFormState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, FormOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn FormOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        sending_delay_ms = context.config.submission.sending_delay_ms,
        success_display_ms = context.config.submission.success_display_ms,
        "starting contact form shell"
    );

    let mut terminal = TerminalSession::new()?;
    let result = run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    });

    orchestrator.shutdown();
    tracing::info!("contact form shell stopped");
    result
}

/// Draw, wait for the next event, dispatch; until the orchestrator stops.
fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn FormOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&ContactFormState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state())?;

        if let Some(event) = event_source.next_event(orchestrator.next_deadline())? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
