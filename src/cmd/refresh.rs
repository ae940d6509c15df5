use std::sync::Arc;

use anyhow::{Result, anyhow};

use crate::{
    data::Config,
    scheduler::tasks::Cycle,
    util::{
        fetcher::GamerPower,
        notice::{Console, Notifier},
        vault::FsVault,
    },
};

pub async fn execute(config: &Config) -> Result<()> {
    let cycle = build(config, Arc::new(Console))?;
    let report = cycle
        .run()
        .await
        .ok_or_else(|| anyhow!("refresh failed, see log for details"))?;

    for (category, outcome) in &report.written {
        println!(
            "{:?} {}/{}.md",
            outcome,
            config.settings.folder(),
            category.name()
        );
    }

    Ok(())
}

pub fn build(config: &Config, notifier: Arc<dyn Notifier>) -> Result<Cycle> {
    let source = GamerPower::new(&config.fetch)?;
    let vault = FsVault::new(&config.vault.path);

    Ok(Cycle::new(
        Arc::new(source),
        Arc::new(vault),
        notifier,
        config.settings.folder(),
    ))
}
