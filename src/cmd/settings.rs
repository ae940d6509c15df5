use anyhow::Result;
use clap::{ArgAction, Subcommand, builder::BoolishValueParser};

use crate::data::{Store, models::Settings};

#[derive(Debug, Clone, Subcommand)]
pub enum SettingsCommand {
    /// Show the current settings.
    Show,

    /// Change one setting. The change is saved immediately.
    #[command(subcommand)]
    Set(Change),
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Change {
    /// The folder where giveaway notes will be saved.
    Folder { name: String },

    /// Update giveaways automatically.
    AutoUpdate {
        #[arg(required = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },

    /// Sync automatic updates to Thursdays 18:04 local time.
    Weekly {
        #[arg(required = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },

    /// Hours between automatic updates (1 to 168).
    Interval {
        #[arg(value_parser = clap::value_parser!(u32).range(1..=168))]
        hours: u32,
    },

    /// Update giveaways every few hours, independent of auto update.
    Daily {
        #[arg(required = true, action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        enabled: bool,
    },

    /// Hours between daily updates (1 to 24).
    DailyInterval {
        #[arg(value_parser = clap::value_parser!(u32).range(1..=24))]
        hours: u32,
    },
}

pub fn execute(store: &Store, command: SettingsCommand) -> Result<()> {
    let mut config = store.load()?;

    if let SettingsCommand::Set(change) = command {
        apply(&mut config.settings, change);
        store.save(&config)?;
        println!("Saved {}", store.path().display());
    }

    for (name, value) in rows(&config.settings) {
        println!("{:<30} {}", name, value);
    }

    Ok(())
}

pub fn apply(settings: &mut Settings, change: Change) {
    match change {
        Change::Folder { name } => settings.folder_name = name,
        Change::AutoUpdate { enabled } => settings.auto_update = enabled,
        Change::Weekly { enabled } => settings.epic_scheduled = enabled,
        Change::Interval { hours } => settings.set_update_interval(hours),
        Change::Daily { enabled } => settings.daily_update_enabled = enabled,
        Change::DailyInterval { hours } => settings.set_daily_interval(hours),
    }
}

pub fn rows(settings: &Settings) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Folder name", settings.folder_name.clone()),
        ("Enable auto update", on_off(settings.auto_update)),
    ];

    if settings.auto_update {
        rows.push(("Weekly schedule (Thu 18:04)", on_off(settings.epic_scheduled)));

        if !settings.epic_scheduled {
            rows.push((
                "Update interval (hours)",
                settings.update_interval_hours.to_string(),
            ));
        }
    }

    rows.push(("Enable daily updates", on_off(settings.daily_update_enabled)));

    if settings.daily_update_enabled {
        rows.push((
            "Daily update interval (hours)",
            settings.daily_update_interval.to_string(),
        ));
    }

    rows
}

fn on_off(value: bool) -> String {
    let label = if value { "on" } else { "off" };
    label.to_string()
}
