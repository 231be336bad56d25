use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use chrono::TimeDelta;

use crate::errors::{AppError, AppResult};
use crate::store::SwipeStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the swipe store JSON document.
    pub store: String,
    /// Daily office-hours goal, in hours. Read on every summary computation;
    /// changing it recolors all past days because summaries are always
    /// recomputed from raw swipes.
    #[serde(default = "default_goal")]
    pub office_hours_goal: f64,
    /// Render clock times as 24-hour instead of AM/PM. Display only.
    #[serde(default)]
    pub clock_24h: bool,
}

fn default_goal() -> f64 {
    5.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            office_hours_goal: default_goal(),
            clock_24h: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("swipetrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".swipetrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("swipetrack.conf")
    }

    /// Return the default path of the swipe store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("swipes.json")
    }

    /// Load configuration from file, or return defaults if missing or
    /// unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist the configuration file.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// The goal as a duration, for comparison against day totals.
    pub fn goal(&self) -> TimeDelta {
        TimeDelta::milliseconds((self.office_hours_goal * 3_600_000.0) as i64)
    }

    /// Update the goal. Non-finite or non-positive values are rejected and
    /// the prior goal is retained.
    pub fn set_goal(&mut self, hours: f64) -> AppResult<()> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(AppError::InvalidGoal(hours.to_string()));
        }
        self.office_hours_goal = hours;
        Ok(())
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = PathBuf::from(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            office_hours_goal: default_goal(),
            clock_24h: false,
        };

        // Write config file
        if !is_test {
            config.save()?;
            println!("Config file: {:?}", Self::config_file());
        }

        // Create an empty swipe log if the store does not exist yet
        let store = SwipeStore::new(&store_path);
        if !store_path.exists() {
            store.save(&[])?;
        }

        println!("Store:       {:?}", store_path);

        Ok(())
    }
}
