// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use hrs_app::{FAQ_DISPLAY_LIMIT, TabKind};
use hrs_data::DatasetSources;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_VERSION: i64 = 1;
const DEFAULT_LOG_LEVEL: &str = "info";
const MAX_FAQ_LIMIT: i64 = 200;
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: Data::default(),
            ui: Ui::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Data {
    pub inventory_path: Option<String>,
    pub faq_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub start_tab: Option<String>,
    pub show_prices: Option<bool>,
    pub faq_limit: Option<i64>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            start_tab: Some(TabKind::Home.as_str().to_owned()),
            show_prices: Some(false),
            faq_limit: Some(FAQ_DISPLAY_LIMIT as i64),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            file: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("HRS_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set HRS_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(hrs_data::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and put values under [data], [ui], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        for (key, value) in [
            ("data.inventory_path", &self.data.inventory_path),
            ("data.faq_path", &self.data.faq_path),
        ] {
            if let Some(dataset) = value {
                hrs_data::validate_dataset_path(dataset)
                    .with_context(|| format!("invalid {key} in {}", path.display()))?;
            }
        }

        if let Some(tab) = &self.ui.start_tab
            && TabKind::parse(tab).is_none()
        {
            let known = TabKind::ALL.map(TabKind::as_str).join(", ");
            bail!(
                "ui.start_tab in {} must be one of {known}, got {tab:?}",
                path.display()
            );
        }

        if let Some(limit) = self.ui.faq_limit
            && !(1..=MAX_FAQ_LIMIT).contains(&limit)
        {
            bail!(
                "ui.faq_limit in {} must be between 1 and {MAX_FAQ_LIMIT}, got {limit}",
                path.display()
            );
        }

        if let Some(level) = &self.log.level
            && !LOG_LEVELS.contains(&level.trim().to_ascii_lowercase().as_str())
        {
            bail!(
                "log.level in {} must be one of {}, got {level:?}; use HRS_LOG for per-module filters",
                path.display(),
                LOG_LEVELS.join(", ")
            );
        }

        if let Some(file) = &self.log.file
            && file.trim().is_empty()
        {
            bail!(
                "log.file in {} must not be empty; remove it to use the default log path",
                path.display()
            );
        }

        Ok(())
    }

    pub fn sources(&self) -> DatasetSources {
        DatasetSources {
            inventory_path: self.data.inventory_path.as_ref().map(PathBuf::from),
            faq_path: self.data.faq_path.as_ref().map(PathBuf::from),
        }
    }

    pub fn start_tab(&self) -> TabKind {
        self.ui
            .start_tab
            .as_deref()
            .and_then(TabKind::parse)
            .unwrap_or(TabKind::Home)
    }

    pub fn show_prices(&self) -> bool {
        self.ui.show_prices.unwrap_or(false)
    }

    pub fn faq_limit(&self) -> usize {
        self.ui
            .faq_limit
            .and_then(|limit| usize::try_from(limit).ok())
            .unwrap_or(FAQ_DISPLAY_LIMIT)
    }

    pub fn log_level(&self) -> String {
        self.log
            .level
            .as_deref()
            .unwrap_or(DEFAULT_LOG_LEVEL)
            .trim()
            .to_ascii_lowercase()
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log.file {
            Some(path) => Ok(PathBuf::from(path)),
            None => hrs_data::default_log_path(),
        }
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# hrs config\n# Place this file at: {}\n\nversion = 1\n\n[data]\n# Optional. Defaults to the inventory and FAQ lists bundled with hrs.\n# inventory_path = \"/absolute/path/to/inventory.json\"\n# faq_path = \"/absolute/path/to/faqs.json\"\n\n[ui]\n# One of: {}\nstart_tab = \"home\"\nshow_prices = false\nfaq_limit = {}\n\n[log]\n# HRS_LOG overrides this with tracing filter directives.\nlevel = \"{}\"\n# Optional. Default is the platform data dir (for example ~/.local/share/hrs/hrs.log)\n# file = \"/absolute/path/to/hrs.log\"\n",
            path.display(),
            TabKind::ALL.map(TabKind::as_str).join(", "),
            FAQ_DISPLAY_LIMIT,
            DEFAULT_LOG_LEVEL,
        )
    }
}
