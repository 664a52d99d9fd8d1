// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use fleetview_app::{DEFAULT_PAGE_SIZE, TableKind};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "fleetview";
const CONFIG_VERSION: i64 = 1;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub table: Table,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: Data::default(),
            table: Table::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Data {
    pub records_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    pub default_table: Option<String>,
    pub page_size: Option<i64>,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            default_table: Some(TableKind::Fleet.as_str().to_owned()),
            page_size: Some(DEFAULT_PAGE_SIZE as i64),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("FLEETVIEW_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set FLEETVIEW_CONFIG_PATH to the config file")
        })?;

        Ok(config_root.join(APP_NAME).join("config.toml"))
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
                    "config file {} is not versioned. Add `version = 1` and put values under [data] and [table]",
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
        if let Some(page_size) = self.table.page_size
            && page_size <= 0
        {
            bail!(
                "table.page_size in {} must be positive, got {}",
                path.display(),
                page_size
            );
        }

        if let Some(table) = &self.table.default_table
            && TableKind::parse(table).is_none()
        {
            bail!(
                "table.default_table in {} must be one of fleet, tickets, alerts; got {:?}",
                path.display(),
                table
            );
        }

        if let Some(records_path) = &self.data.records_path
            && records_path.trim().is_empty()
        {
            bail!(
                "data.records_path in {} is empty; remove it or point it at a JSON file",
                path.display()
            );
        }

        Ok(())
    }

    /// Explicit config value first, then `FLEETVIEW_RECORDS_PATH`.
    pub fn records_path(&self) -> Option<PathBuf> {
        match &self.data.records_path {
            Some(path) => Some(PathBuf::from(path)),
            None => env::var_os("FLEETVIEW_RECORDS_PATH").map(PathBuf::from),
        }
    }

    pub fn default_table(&self) -> TableKind {
        self.table
            .default_table
            .as_deref()
            .and_then(TableKind::parse)
            .unwrap_or(TableKind::Fleet)
    }

    pub fn page_size(&self) -> usize {
        self.table
            .page_size
            .and_then(|size| usize::try_from(size).ok())
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# fleetview config\n# Place this file at: {}\n\nversion = 1\n\n[data]\n# Optional. JSON array of records; FLEETVIEW_RECORDS_PATH is used when unset\n# records_path = \"/absolute/path/to/machines.json\"\n\n[table]\ndefault_table = \"fleet\"\npage_size = {}\n",
            path.display(),
            DEFAULT_PAGE_SIZE,
        )
    }
}
