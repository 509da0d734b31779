use std::sync::Arc;

use anyhow::Context;
use pointr_server::{MockServer, ServerConfig, ServerResult, PORT_ENV};
use pointr_store::{seed, InMemoryStore};
use tracing::info;

use crate::cli::Cli;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let port_var = std::env::var(PORT_ENV).ok();
    let config = resolve_config(&cli, port_var.as_deref()).context("invalid configuration")?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    info!(bind = %config.bind_addr, seed = config.seed, "starting pointr mock API");
    let store = Arc::new(InMemoryStore::new());
    if config.seed {
        seed::load(store.as_ref()).context("loading seed fixtures")?;
    }
    MockServer::new(config, store).serve().await?;
    Ok(())
}

/// Defaults, then the config file, then `$PORT`, then command-line flags.
fn resolve_config(cli: &Cli, port_var: Option<&str>) -> ServerResult<ServerConfig> {
    let mut config = match &cli.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    config = config.with_port_var(port_var)?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if cli.no_seed {
        config.seed = false;
    }
    Ok(config)
}
