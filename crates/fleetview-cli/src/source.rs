// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use fleetview_app::decode::{
    aliases_for, decode_alerts, decode_machines, decode_raw, decode_tickets,
};
use fleetview_app::demo::{demo_alerts, demo_machines, demo_tickets};
use fleetview_app::{Alert, Machine, RawRecord, TableKind, Ticket};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Records for one table, typed by table kind.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedTable {
    Fleet(Vec<Machine>),
    Tickets(Vec<Ticket>),
    Alerts(Vec<Alert>),
    /// Values kept as given, keyed by canonical field names.
    Raw(TableKind, Vec<RawRecord>),
}

impl LoadedTable {
    pub const fn kind(&self) -> TableKind {
        match self {
            Self::Fleet(_) => TableKind::Fleet,
            Self::Tickets(_) => TableKind::Tickets,
            Self::Alerts(_) => TableKind::Alerts,
            Self::Raw(kind, _) => *kind,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fleet(records) => records.len(),
            Self::Tickets(records) => records.len(),
            Self::Alerts(records) => records.len(),
            Self::Raw(_, records) => records.len(),
        }
    }
}

pub trait RecordSource {
    fn describe(&self) -> String;
    fn load(&self, kind: TableKind) -> Result<LoadedTable>;
}

/// Built-in dashboard data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource;

impl RecordSource for DemoSource {
    fn describe(&self) -> String {
        "demo data".to_owned()
    }

    fn load(&self, kind: TableKind) -> Result<LoadedTable> {
        Ok(match kind {
            TableKind::Fleet => LoadedTable::Fleet(demo_machines()),
            TableKind::Tickets => LoadedTable::Tickets(demo_tickets()),
            TableKind::Alerts => LoadedTable::Alerts(demo_alerts()),
        })
    }
}

/// JSON array of records on disk, decoded as the requested table.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    raw: bool,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            raw: false,
        }
    }

    /// Skips typed validation so malformed values still reach the table.
    pub fn raw(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            raw: true,
        }
    }
}

impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self, kind: TableKind) -> Result<LoadedTable> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read records file {}", self.path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("parse JSON records {}", self.path.display()))?;

        let table = match kind {
            _ if self.raw => LoadedTable::Raw(kind, decode_raw(&value, aliases_for(kind))?),
            TableKind::Fleet => LoadedTable::Fleet(decode_machines(&value)?),
            TableKind::Tickets => LoadedTable::Tickets(decode_tickets(&value)?),
            TableKind::Alerts => LoadedTable::Alerts(decode_alerts(&value)?),
        };
        debug!(
            path = %self.path.display(),
            table = kind.as_str(),
            raw = self.raw,
            count = table.len(),
            "loaded records file"
        );
        Ok(table)
    }
}
