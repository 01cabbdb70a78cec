use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ronim::config::AppConfig;
use ronim::{console, Session};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    let mut session = Session::from_config(&config)?;
    tracing::info!(
        viewer = %config.viewer_handle,
        seeded = config.seed_data,
        "session ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(&mut session, stdin.lock(), stdout.lock())?;

    tracing::info!("session closed");
    Ok(())
}
