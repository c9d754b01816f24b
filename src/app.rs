use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain,
    infra::{self, config::AppConfig},
    ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::ShowConfig => {
            let config = bootstrap::load_config(cli.config.as_deref())?;
            print!("{}", render_config(&config)?);
        }
    }

    Ok(())
}

fn render_config(config: &AppConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}
