//! `restmenu serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use restmenu_config::{CliSettings, Config};
use restmenu_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover restmenu.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// YAML menu definitions file (overrides config).
    #[arg(short, long, env = "RESTMENU_MENUS")]
    menus: Option<PathBuf>,

    /// Enable verbose output (request and startup logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            menus_source: self.menus,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.highlight(&format!(
            "Serving menus on http://{}:{}{}/{{menu}}",
            config.server.host, config.server.port, config.api.prefix
        ));
        output.info(&format!(
            "Menu definitions: {}",
            config.menus_resolved.source.display()
        ));
        if let Some(path) = &config.config_path {
            output.info(&format!("Configuration: {}", path.display()));
        }

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
