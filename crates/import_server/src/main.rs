use anyhow::Context;
use import_server::{create_router, AppState, ServerConfig};
use panel_logging::panel_info;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = TermLogger::init(
        panel_logging::default_level(),
        log_config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let config = ServerConfig::from_env().context("loading server configuration")?;
    let app = create_router(AppState::from_config(&config));

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    panel_info!("listening on {}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
