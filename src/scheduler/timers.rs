use std::{sync::Arc, time::Duration};

use anyhow::Result;
use chrono::{DateTime, Datelike, Days, Local, NaiveTime, TimeZone, Weekday};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};
use uuid::Uuid;

use crate::{data::models::Settings, scheduler::tasks::Cycle};

pub const ANCHOR_WEEKDAY: Weekday = Weekday::Thu;
pub const ANCHOR_HOUR: u32 = 18;
pub const ANCHOR_MINUTE: u32 = 4;

const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

pub fn hours(n: u32) -> Duration {
    Duration::from_secs(u64::from(n) * 60 * 60)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primary {
    Off,
    Every(Duration),
    Weekly,
}

/// Which timers a set of settings asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub primary: Primary,
    pub daily: Option<Duration>,
}

impl Plan {
    pub fn from_settings(settings: &Settings) -> Self {
        let primary = match (settings.auto_update, settings.epic_scheduled) {
            (false, _) => Primary::Off,
            (true, true) => Primary::Weekly,
            (true, false) => Primary::Every(hours(settings.update_interval_hours)),
        };

        let daily = settings
            .daily_update_enabled
            .then(|| hours(settings.daily_update_interval));

        Self { primary, daily }
    }
}

/// The first Thursday 18:04 strictly after `now`, in `now`'s time zone.
pub fn next_anchor<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let today = now.date_naive();
    let ahead = (7 + ANCHOR_WEEKDAY.num_days_from_sunday()
        - today.weekday().num_days_from_sunday())
        % 7;

    let at = |date: chrono::NaiveDate| {
        let time = NaiveTime::from_hms_opt(ANCHOR_HOUR, ANCHOR_MINUTE, 0).unwrap_or_default();
        let naive = date.and_time(time);
        tz.from_local_datetime(&naive)
            .earliest()
            .or_else(|| {
                tz.from_local_datetime(&(naive + chrono::Duration::hours(1)))
                    .earliest()
            })
    };

    let this_week = today
        .checked_add_days(Days::new(u64::from(ahead)))
        .and_then(at);

    match this_week {
        Some(anchor) if anchor > *now => anchor,
        _ => today
            .checked_add_days(Days::new(u64::from(ahead) + 7))
            .and_then(at)
            .unwrap_or_else(|| now.clone() + chrono::Duration::days(7)),
    }
}

#[derive(Debug, Default)]
struct Handles {
    anchor: Option<Uuid>,
    primary: Option<Uuid>,
    daily: Option<Uuid>,
    stopped: bool,
}

pub struct Scheduler {
    jobs: JobScheduler,
    handles: Arc<Mutex<Handles>>,
}

impl Scheduler {
    pub async fn start(cycle: Arc<Cycle>, settings: &Settings) -> Result<Self> {
        let jobs = JobScheduler::new().await?;
        let handles = Arc::new(Mutex::new(Handles::default()));
        let plan = Plan::from_settings(settings);

        match plan.primary {
            Primary::Off => info!("Auto update disabled"),
            Primary::Every(period) => {
                let id = jobs.add(repeating(cycle.clone(), period)?).await?;
                handles.lock().await.primary = Some(id);
                info!("Auto update every {}h", period.as_secs() / 3600);
            }
            Primary::Weekly => {
                let now = Local::now();
                let next = next_anchor(&now);
                let delay = (next - now).to_std()?;
                let id = jobs
                    .add(anchored(cycle.clone(), handles.clone(), delay)?)
                    .await?;
                handles.lock().await.anchor = Some(id);
                info!("Weekly update anchored at {}", next.to_rfc2822());
            }
        }

        if let Some(period) = plan.daily {
            let id = jobs.add(repeating(cycle.clone(), period)?).await?;
            handles.lock().await.daily = Some(id);
            info!("Daily update every {}h", period.as_secs() / 3600);
        }

        jobs.start().await?;
        cycle.run().await;

        Ok(Self { jobs, handles })
    }

    pub async fn stop(mut self) -> Result<()> {
        let ids = {
            let mut handles = self.handles.lock().await;
            handles.stopped = true;
            [
                handles.anchor.take(),
                handles.primary.take(),
                handles.daily.take(),
            ]
        };

        for id in ids.into_iter().flatten() {
            if let Err(e) = self.jobs.remove(&id).await {
                error!("Failed to cancel timer {}: {}", id, e);
            }
        }

        self.jobs.shutdown().await?;
        info!("Scheduler stopped");
        Ok(())
    }
}

fn repeating(cycle: Arc<Cycle>, period: Duration) -> Result<Job> {
    let job = Job::new_repeated_async(period, move |_uuid, _l| {
        let cycle = cycle.clone();
        Box::pin(async move {
            cycle.run().await;
        })
    })?;
    Ok(job)
}

fn anchored(cycle: Arc<Cycle>, handles: Arc<Mutex<Handles>>, delay: Duration) -> Result<Job> {
    let job = Job::new_one_shot_async(delay, move |_uuid, jobs| {
        let cycle = cycle.clone();
        let handles = handles.clone();
        Box::pin(async move {
            cycle.run().await;

            let mut handles = handles.lock().await;
            handles.anchor = None;
            if handles.stopped {
                return;
            }

            let weekly = match repeating(cycle, WEEK) {
                Ok(job) => job,
                Err(e) => {
                    error!("Failed to build weekly job: {}", e);
                    return;
                }
            };

            match jobs.add(weekly).await {
                Ok(id) => {
                    handles.primary = Some(id);
                    info!("Weekly update armed");
                }
                Err(e) => error!("Failed to arm weekly job: {}", e),
            }
        })
    })?;
    Ok(job)
}
