use std::{fmt, ops::RangeInclusive};

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_FOLDER: &str = "Game Giveaways";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Giveaway {
    pub id: Option<i64>,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub worth: String,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructions: String,
    pub open_giveaway_url: String,
    pub published_date: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub platforms: String,
    pub end_date: Option<String>,
    pub users: Option<u64>,
    pub status: Option<String>,
    pub gamerpower_url: Option<String>,
    pub open_giveaway: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Giveaway {
    pub fn is_dlc(&self) -> bool {
        self.kind
            .as_deref()
            .is_some_and(|kind| kind.eq_ignore_ascii_case("dlc"))
    }

    pub fn platform_list(&self) -> impl Iterator<Item = &str> {
        self.platforms.split(',').map(str::trim)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    EpicGames,
    Steam,
    PlayStation5,
    Xbox,
    Pc,
    Mobile,
    Dlcs,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::EpicGames,
        Category::Steam,
        Category::PlayStation5,
        Category::Xbox,
        Category::Pc,
        Category::Mobile,
        Category::Dlcs,
        Category::Other,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::EpicGames => "Epic Games",
            Category::Steam => "Steam",
            Category::PlayStation5 => "PlayStation 5",
            Category::Xbox => "Xbox",
            Category::Pc => "PC",
            Category::Mobile => "Mobile",
            Category::Dlcs => "DLCs",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub folder_name: String,
    pub auto_update: bool,
    pub update_interval_hours: u32,
    pub epic_scheduled: bool,
    pub daily_update_enabled: bool,
    pub daily_update_interval: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSettings {
    pub folder_name: Option<String>,
    pub auto_update: Option<bool>,
    pub update_interval_hours: Option<u32>,
    pub epic_scheduled: Option<bool>,
    pub daily_update_enabled: Option<bool>,
    pub daily_update_interval: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folder_name: DEFAULT_FOLDER.to_string(),
            auto_update: false,
            update_interval_hours: 24,
            epic_scheduled: false,
            daily_update_enabled: false,
            daily_update_interval: 6,
        }
    }
}

impl Settings {
    pub const INTERVAL_HOURS: RangeInclusive<u32> = 1..=168;
    pub const DAILY_INTERVAL_HOURS: RangeInclusive<u32> = 1..=24;

    pub fn merge(persisted: PersistedSettings) -> Self {
        let defaults = Self::default();

        Self {
            folder_name: persisted.folder_name.unwrap_or(defaults.folder_name),
            auto_update: persisted.auto_update.unwrap_or(defaults.auto_update),
            update_interval_hours: clamp(
                persisted
                    .update_interval_hours
                    .unwrap_or(defaults.update_interval_hours),
                &Self::INTERVAL_HOURS,
            ),
            epic_scheduled: persisted.epic_scheduled.unwrap_or(defaults.epic_scheduled),
            daily_update_enabled: persisted
                .daily_update_enabled
                .unwrap_or(defaults.daily_update_enabled),
            daily_update_interval: clamp(
                persisted
                    .daily_update_interval
                    .unwrap_or(defaults.daily_update_interval),
                &Self::DAILY_INTERVAL_HOURS,
            ),
        }
    }

    pub fn folder(&self) -> &str {
        match self.folder_name.trim() {
            "" => DEFAULT_FOLDER,
            name => name,
        }
    }

    pub fn set_update_interval(&mut self, hours: u32) {
        self.update_interval_hours = clamp(hours, &Self::INTERVAL_HOURS);
    }

    pub fn set_daily_interval(&mut self, hours: u32) {
        self.daily_update_interval = clamp(hours, &Self::DAILY_INTERVAL_HOURS);
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
