use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::{cmd::refresh, data::Config, scheduler::timers::Scheduler, util::notice::Log};

pub async fn execute(config: &Config) -> Result<()> {
    let cycle = Arc::new(refresh::build(config, Arc::new(Log))?);

    info!(
        "Writing giveaway notes to {}",
        config.vault.path.join(config.settings.folder()).display()
    );

    let scheduler = Scheduler::start(cycle, &config.settings).await?;

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    scheduler.stop().await
}
