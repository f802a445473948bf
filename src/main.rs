#![deny(warnings)]

use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vault_auth_suite::{Runner, config, report};

#[actix::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::get().context("Failed to load configuration")?;

    tracing::info!(
        "vault-auth-suite v{} targeting {}",
        env!("CARGO_PKG_VERSION"),
        config.base_url
    );

    let summary = Runner::new(config.clone()).run_all().await;

    if let Some(path) = &config.report {
        report::write(path, &summary, &config.base_url).await?;
    }

    Ok(if summary.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
