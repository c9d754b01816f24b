use std::path::Path;

use crate::{
    domain::form_state::ContactFormState,
    infra::{
        self,
        config::{AppConfig, FileConfigAdapter},
        contracts::ConfigAdapter,
        error::AppError,
        system::{SystemClipboard, SystemOpener},
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, FormOrchestrator},
        shell::DefaultFormOrchestrator,
        submit_message::{SubmissionSimulator, SubmissionTiming},
        timers::SystemClock,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn FormOrchestrator>,
}

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = load_config(config_path)?;
    let log_guard = infra::logging::init(&config.logging)?;

    Ok(AppContext::new(config, Some(log_guard)))
}

pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, AppError> {
    FileConfigAdapter::new(config_path)
        .load()
        .map_err(AppError::Other)
}

pub fn compose_shell(context: &AppContext) -> ShellComposition {
    ShellComposition {
        event_source: Box::new(CrosstermEventSource),
        orchestrator: Box::new(compose_orchestrator(&context.config)),
    }
}

fn compose_orchestrator(
    config: &AppConfig,
) -> DefaultFormOrchestrator<SystemClock, SystemOpener, SystemClipboard> {
    let state = ContactFormState::new(config.contact.to_profile());
    let simulator = SubmissionSimulator::new(
        SystemClock,
        SubmissionTiming::from(&config.submission),
    );

    DefaultFormOrchestrator::new(state, simulator, SystemOpener, SystemClipboard::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config_when_file_is_missing() {
        let config = load_config(Some(Path::new("./missing-config.toml")))
            .expect("config should load from defaults");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn composed_orchestrator_starts_from_configured_profile() {
        let mut config = AppConfig::default();
        config.contact.email = "owner@example.com".to_owned();

        let orchestrator = compose_orchestrator(&config);

        assert_eq!(orchestrator.state().profile().email, "owner@example.com");
        assert!(orchestrator.state().draft().is_empty());
        assert_eq!(orchestrator.next_deadline(), None);
    }
}
