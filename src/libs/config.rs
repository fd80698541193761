//! Configuration management for shiftdesk.
//!
//! Settings live in `config.json` inside the data directory. Every section is
//! optional and falls back to defaults, so the application runs without any
//! setup; `shiftdesk init` walks through the sections interactively.
//!
//! ## Sections
//!
//! - **shift**: standard shift length and the fallback worker for each team
//! - **facility**: building levels for the location picker and the category menu
//! - **photos**: where attached photos are stored
//!
//! ```rust,no_run
//! use shiftdesk::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("standard shift: {} min", config.shift().standard_shift_minutes);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::attendance::STANDARD_SHIFT_MINUTES;
use crate::libs::messages::Message;
use crate::libs::schedule::TeamRoster;
use crate::libs::worklog::DEFAULT_CATEGORIES;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShiftConfig {
    /// Minutes in a standard shift; anything beyond counts as overtime
    pub standard_shift_minutes: u64,
    pub team_a_worker: String,
    pub team_b_worker: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FacilityConfig {
    pub basement_levels: u32,
    pub above_ground_levels: u32,
    pub categories: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct PhotoConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<ShiftConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<FacilityConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<PhotoConfig>,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        let roster = TeamRoster::default();
        ShiftConfig {
            standard_shift_minutes: STANDARD_SHIFT_MINUTES,
            team_a_worker: roster.team_a,
            team_b_worker: roster.team_b,
        }
    }
}

impl Default for FacilityConfig {
    fn default() -> Self {
        FacilityConfig {
            basement_levels: 6,
            above_ground_levels: 20,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ShiftConfig {
    pub fn roster(&self) -> TeamRoster {
        TeamRoster {
            team_a: self.team_a_worker.clone(),
            team_b: self.team_b_worker.clone(),
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads a config file, returning defaults when it does not exist.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn shift(&self) -> ShiftConfig {
        self.shift.clone().unwrap_or_default()
    }

    pub fn facility(&self) -> FacilityConfig {
        self.facility.clone().unwrap_or_default()
    }

    pub fn photo_directory(&self) -> Option<PathBuf> {
        self.photos.as_ref().and_then(|p| p.directory.clone())
    }

    /// Interactive setup wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "shift".to_string(),
                name: "Shift".to_string(),
            },
            ConfigModule {
                key: "facility".to_string(),
                name: "Facility".to_string(),
            },
            ConfigModule {
                key: "photos".to_string(),
                name: "Photos".to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "shift" => {
                    let default = config.shift();
                    msg_print!(Message::ConfigModuleShift);
                    config.shift = Some(ShiftConfig {
                        standard_shift_minutes: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStandardShiftMinutes.to_string())
                            .default(default.standard_shift_minutes)
                            .interact_text()?,
                        team_a_worker: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTeamWorker("A".to_string()).to_string())
                            .default(default.team_a_worker)
                            .interact_text()?,
                        team_b_worker: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTeamWorker("B".to_string()).to_string())
                            .default(default.team_b_worker)
                            .interact_text()?,
                    });
                }
                "facility" => {
                    let default = config.facility();
                    msg_print!(Message::ConfigModuleFacility);
                    let categories: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptCategories.to_string())
                        .default(default.categories.join(", "))
                        .interact_text()?;
                    config.facility = Some(FacilityConfig {
                        basement_levels: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptBasementLevels.to_string())
                            .default(default.basement_levels)
                            .interact_text()?,
                        above_ground_levels: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAboveGroundLevels.to_string())
                            .default(default.above_ground_levels)
                            .interact_text()?,
                        categories: categories
                            .split(',')
                            .map(|c| c.trim().to_string())
                            .filter(|c| !c.is_empty())
                            .collect(),
                    });
                }
                "photos" => {
                    msg_print!(Message::ConfigModulePhotos);
                    let current = config
                        .photo_directory()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    let directory: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptPhotoDirectory.to_string())
                        .default(current)
                        .allow_empty(true)
                        .interact_text()?;
                    config.photos = Some(PhotoConfig {
                        directory: (!directory.is_empty()).then(|| PathBuf::from(directory)),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
