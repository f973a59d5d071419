use clap::Parser;
use riskboard::read_risk_csv;
use riskboard_server::cli::Cli;
use riskboard_server::error::ServerError;
use riskboard_server::server::{
    AppState,
    run_server,
};
use tracing::{
    error,
    info,
};
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{
    BunyanFormattingLayer,
    JsonStorageLayer,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

#[cfg(target_os = "windows")]
use mimalloc::MiMalloc;

#[cfg(target_os = "windows")]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer =
        BunyanFormattingLayer::new("riskboard_server".into(), std::io::stdout);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber).expect("Setting default subscriber failed");

    let conf = Cli::parse();
    let table = match read_risk_csv(&conf.data) {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to load {}: {}", conf.data.display(), e);
            return Err(e.into());
        }
    };
    info!(
        "Loaded {} records across {} banking solutions from {}",
        table.len(),
        table.solutions().len(),
        conf.data.display()
    );

    let state = AppState::new(table);
    run_server(&conf.address, state).await
}
