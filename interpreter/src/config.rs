// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "rover.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub grid: ConfigSectionGrid,
    pub run: ConfigSectionRun,
}

impl ConfigRoot {
    /// Reads the explicitly given file, or `rover.toml` inside `directory`
    /// when it exists. Without either, the defaults are used.
    pub fn load(explicit: Option<&Path>, directory: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        if let Some(path) = directory.map(|x| x.join(CONFIG_FILE_NAME)) {
            if path.is_file() {
                return Self::load_file(&path);
            }
        }

        Ok(Self::default())
    }

    fn load_file(path: &Path) -> anyhow::Result<Self> {
        debug!("Loading configuration from {}", path.display());

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read configuration file {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionGrid {
    pub width: usize,
    pub height: usize,
    pub start_x: usize,
    pub start_y: usize,
}

impl Default for ConfigSectionGrid {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            start_x: 4,
            start_y: 4,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionRun {
    pub show_grid: bool,

    /// Upper bound on executed steps, guards against `goto` loops.
    pub max_steps: Option<usize>,
}
