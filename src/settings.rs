use crate::config::Density;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub life: LifeSettings,
}

/// `[life]` table; any key left out falls back to the built-in default
#[derive(Debug, Default, Deserialize)]
pub struct LifeSettings {
    pub wrap: Option<bool>,
    pub density: Option<Density>,
    pub time: Option<f32>,
    pub glyph: Option<char>,
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|err| {
                warn!("ignoring malformed settings file {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                warn!("cannot read settings file {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termlife")
            .join("config.toml")
    }
}
