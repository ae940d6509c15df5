use std::sync::Arc;

use tracing::{debug, error, info};

use crate::{
    data::models::Category,
    error::CycleError,
    util::{
        classify::classify,
        fetcher::Source,
        markdown,
        notice::{self, Notifier},
        vault::{Upsert, Vault},
    },
};

#[derive(Debug, Default)]
pub struct Report {
    pub fetched: usize,
    pub written: Vec<(Category, Upsert)>,
}

pub struct Cycle {
    source: Arc<dyn Source>,
    vault: Arc<dyn Vault>,
    notifier: Arc<dyn Notifier>,
    folder: String,
}

impl Cycle {
    pub fn new(
        source: Arc<dyn Source>,
        vault: Arc<dyn Vault>,
        notifier: Arc<dyn Notifier>,
        folder: impl Into<String>,
    ) -> Self {
        Self {
            source,
            vault,
            notifier,
            folder: folder.into(),
        }
    }

    pub async fn run(&self) -> Option<Report> {
        match self.refresh().await {
            Ok(report) => {
                info!(
                    "Giveaway refresh complete: {} fetched, {} notes written",
                    report.fetched,
                    report.written.len()
                );
                self.notifier.success(notice::SUCCESS);
                Some(report)
            }
            Err(e) => {
                error!("Giveaway refresh failed: {}", e);
                self.notifier.failure(notice::FAILURE);
                None
            }
        }
    }

    pub async fn refresh(&self) -> Result<Report, CycleError> {
        let giveaways = self.source.fetch().await?;
        info!("Fetched {} giveaways", giveaways.len());

        let buckets = classify(&giveaways);
        for category in Category::ALL {
            debug!("{}: {} giveaways", category, buckets.get(category).len());
        }

        self.vault.ensure_folder(&self.folder).await?;

        let mut report = Report {
            fetched: giveaways.len(),
            written: Vec::new(),
        };

        for (category, entries) in buckets.non_empty() {
            let path = format!("{}/{}.md", self.folder, category.name());
            let content = markdown::render(entries, category.name());

            let outcome = self.vault.upsert_file(&path, &content).await?;
            info!("{:?} {} ({} giveaways)", outcome, path, entries.len());
            report.written.push((category, outcome));
        }

        Ok(report)
    }
}
