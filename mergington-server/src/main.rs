//! # Mergington Activities Server
//!
//! Serves the Mergington High School extracurricular activities API:
//!
//! - `GET /activities` lists every activity with its roster
//! - `POST /activities/{activity_name}/signup?email=...` enrols a student
//! - `DELETE /activities/{activity_name}/unregister?email=...` removes one
//! - `/` redirects to the static frontend under `/static`
//!
//! All state lives in memory and is rebuilt from the seed roster on every
//! start.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use mergington_core::ActivityRegistry;
use mergington_server::{
    AppState, create_app,
    infra::config::{
        Config, ConfigLoad, ConfigLoader, ConfigOverrides, ConfigWarnings,
    },
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug, Clone)]
#[command(name = "mergington-server")]
#[command(about = "Extracurricular activity signup API for Mergington High School")]
struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "MERGINGTON_CONFIG")]
    config: Option<PathBuf>,

    /// Dotenv file to load instead of `./.env`
    #[arg(long, env = "MERGINGTON_ENV_FILE")]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Directory served under /static (overrides config)
    #[arg(long, env = "STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServeArgs::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(load_runtime_config(&args)?);
    run_server(config).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new().with_overrides(cli_overrides(args));
    if let Some(path) = args.config.clone() {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = args.env_file.clone() {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad { config, warnings } =
        loader.load().context("failed to load configuration")?;

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }
    log_warnings(&warnings);

    Ok(config)
}

fn cli_overrides(args: &ServeArgs) -> ConfigOverrides {
    ConfigOverrides {
        host: args.host.clone(),
        port: args.port,
        static_dir: args.static_dir.clone(),
    }
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
}

async fn run_server(config: Arc<Config>) -> anyhow::Result<()> {
    let registry = Arc::new(ActivityRegistry::seeded());
    info!(
        activities = registry.len(),
        participants = registry.total_participants(),
        "activity registry seeded"
    );

    let state = AppState::new(Arc::clone(&config), registry);
    let router = create_app(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    let local_addr: SocketAddr = listener
        .local_addr()
        .context("failed to read bound address")?;

    info!(
        addr = %local_addr,
        static_dir = %config.static_dir().display(),
        dev_mode = config.dev_mode,
        "Starting Mergington activities server"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::{ServeArgs, cli_overrides};
    use clap::Parser;
    use mergington_server::infra::config::ConfigOverrides;
    use std::path::PathBuf;

    #[test]
    fn cli_flags_become_overrides() {
        let args = ServeArgs::try_parse_from([
            "mergington-server",
            "--port",
            "9443",
            "--host",
            "127.0.0.1",
            "--static-dir",
            "/srv/frontend",
        ])
        .unwrap();

        assert_eq!(
            cli_overrides(&args),
            ConfigOverrides {
                host: Some("127.0.0.1".into()),
                port: Some(9443),
                static_dir: Some(PathBuf::from("/srv/frontend")),
            }
        );
    }

    #[test]
    fn config_flag_is_optional() {
        let args = ServeArgs::try_parse_from([
            "mergington-server",
            "-c",
            "config/mergington.toml",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("config/mergington.toml")));
        assert_eq!(args.env_file, None);
    }

    #[test]
    fn env_file_flag_is_parsed() {
        let args = ServeArgs::try_parse_from([
            "mergington-server",
            "--env-file",
            "deploy/school.env",
        ])
        .unwrap();

        assert_eq!(args.env_file, Some(PathBuf::from("deploy/school.env")));
    }
}
