// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Turns loosely shaped JSON from the backend into typed records.
//!
//! Key spellings vary between endpoints (`riskScore`, `risk_score`, `risk`),
//! so every record kind declares an alias table that is resolved once here.

use anyhow::{Context, Result, anyhow, bail};
use serde_json::{Map, Value};
use tracing::debug;

use crate::ids::{AlertId, MachineId, TicketId};
use crate::model::{Alert, Machine, MachineStatus, TableKind, Ticket, TicketPriority, TicketStatus};
use crate::record::{Cell, RawRecord, TableRecord};

/// Canonical field key followed by the source keys accepted for it, in
/// lookup order.
pub type AliasTable = &'static [(&'static str, &'static [&'static str])];

pub const MACHINE_ALIASES: AliasTable = &[
    ("id", &["id", "machine_id", "machineId"]),
    ("name", &["name", "machine_name", "machineName"]),
    ("status", &["status"]),
    ("riskScore", &["riskScore", "risk_score", "risk"]),
    ("location", &["location"]),
    ("lastMaintenance", &["lastMaintenance", "last_maintenance"]),
];

pub const TICKET_ALIASES: AliasTable = &[
    ("id", &["id", "ticket_id", "ticketId"]),
    ("machine", &["machine", "machine_name", "machineName"]),
    ("issue", &["issue"]),
    ("suggestedFix", &["suggestedFix", "suggested_fix"]),
    ("priority", &["priority"]),
    ("eta", &["eta"]),
    ("status", &["status"]),
    ("createdDate", &["createdDate", "created_date", "created_at"]),
];

pub const ALERT_ALIASES: AliasTable = &[
    ("id", &["id", "alert_id", "alertId"]),
    ("name", &["name", "alert_name"]),
    ("machine", &["machine", "machine_name"]),
    ("metric", &["metric"]),
    ("threshold", &["threshold"]),
    ("enabled", &["enabled"]),
    ("createdDate", &["createdDate", "created_date", "created_at"]),
];

pub const fn aliases_for(kind: TableKind) -> AliasTable {
    match kind {
        TableKind::Fleet => MACHINE_ALIASES,
        TableKind::Tickets => TICKET_ALIASES,
        TableKind::Alerts => ALERT_ALIASES,
    }
}

/// One JSON object viewed through an alias table.
struct Fields<'a> {
    index: usize,
    object: &'a Map<String, Value>,
    aliases: AliasTable,
}

impl<'a> Fields<'a> {
    fn new(index: usize, value: &'a Value, aliases: AliasTable) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| anyhow!("record {index} is not a JSON object"))?;
        Ok(Self {
            index,
            object,
            aliases,
        })
    }

    fn lookup(&self, key: &str) -> Option<&'a Value> {
        let sources = self
            .aliases
            .iter()
            .find(|(canonical, _)| *canonical == key)
            .map(|(_, sources)| *sources)
            .unwrap_or(&[]);
        sources
            .iter()
            .filter_map(|source| self.object.get(*source))
            .find(|value| !value.is_null())
    }

    fn required_text(&self, key: &str) -> Result<String> {
        match self.lookup(key) {
            Some(value) => value_text(value)
                .ok_or_else(|| anyhow!("record {}: field {key:?} must be a string", self.index)),
            None => bail!(
                "record {}: missing required field {key:?}; accepted keys: {}",
                self.index,
                self.accepted(key)
            ),
        }
    }

    fn text(&self, key: &str) -> String {
        self.lookup(key).and_then(value_text).unwrap_or_default()
    }

    /// Numbers and numeric strings; anything else is `NaN`.
    fn number(&self, key: &str) -> f64 {
        self.lookup(key)
            .and_then(|value| match value {
                Value::Number(number) => number.as_f64(),
                Value::String(raw) => raw.trim().parse().ok(),
                _ => None,
            })
            .unwrap_or(f64::NAN)
    }

    fn flag(&self, key: &str) -> Result<bool> {
        match self.lookup(key) {
            None => Ok(false),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(Value::String(raw)) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" | "enabled" => Ok(true),
                "0" | "false" | "off" | "no" | "disabled" => Ok(false),
                _ => bail!("record {}: field {key:?} is not a boolean: {raw:?}", self.index),
            },
            Some(other) => bail!("record {}: field {key:?} is not a boolean: {other}", self.index),
        }
    }

    fn accepted(&self, key: &str) -> String {
        self.aliases
            .iter()
            .find(|(canonical, _)| *canonical == key)
            .map(|(_, sources)| sources.join(", "))
            .unwrap_or_else(|| key.to_owned())
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn records(value: &Value) -> Result<&Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| anyhow!("expected a JSON array of records"))
}

pub fn decode_machines(value: &Value) -> Result<Vec<Machine>> {
    let machines = records(value)?
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<Machine> {
            let fields = Fields::new(index, item, MACHINE_ALIASES)?;
            let raw_status = fields.required_text("status")?;
            let status = MachineStatus::parse(&raw_status).ok_or_else(|| {
                anyhow!("record {index}: unknown machine status {raw_status:?}; expected Normal, Watch or Risk")
            })?;
            Ok(Machine {
                id: MachineId::new(fields.required_text("id")?),
                name: fields.text("name"),
                status,
                risk_score: fields.number("riskScore"),
                location: fields.text("location"),
                last_maintenance: fields.text("lastMaintenance"),
            })
        })
        .collect::<Result<Vec<_>>>()
        .context("decode machine records")?;
    debug!(count = machines.len(), "decoded machines");
    Ok(machines)
}

pub fn decode_tickets(value: &Value) -> Result<Vec<Ticket>> {
    let tickets = records(value)?
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<Ticket> {
            let fields = Fields::new(index, item, TICKET_ALIASES)?;
            let raw_priority = fields.required_text("priority")?;
            let priority = TicketPriority::parse(&raw_priority).ok_or_else(|| {
                anyhow!("record {index}: unknown ticket priority {raw_priority:?}; expected Low, Medium, High or Critical")
            })?;
            let raw_status = fields.required_text("status")?;
            let status = TicketStatus::parse(&raw_status).ok_or_else(|| {
                anyhow!("record {index}: unknown ticket status {raw_status:?}; expected Pending, In Progress or Completed")
            })?;
            Ok(Ticket {
                id: TicketId::new(fields.required_text("id")?),
                machine: fields.text("machine"),
                issue: fields.text("issue"),
                suggested_fix: fields.text("suggestedFix"),
                priority,
                eta: fields.text("eta"),
                status,
                created_date: fields.text("createdDate"),
            })
        })
        .collect::<Result<Vec<_>>>()
        .context("decode ticket records")?;
    debug!(count = tickets.len(), "decoded tickets");
    Ok(tickets)
}

pub fn decode_alerts(value: &Value) -> Result<Vec<Alert>> {
    let alerts = records(value)?
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<Alert> {
            let fields = Fields::new(index, item, ALERT_ALIASES)?;
            Ok(Alert {
                id: AlertId::new(fields.required_text("id")?),
                name: fields.text("name"),
                machine: fields.text("machine"),
                metric: fields.text("metric"),
                threshold: fields.number("threshold"),
                enabled: fields.flag("enabled")?,
                created_date: fields.text("createdDate"),
            })
        })
        .collect::<Result<Vec<_>>>()
        .context("decode alert records")?;
    debug!(count = alerts.len(), "decoded alerts");
    Ok(alerts)
}

/// Keeps every value as given, renaming aliased keys to their canonical
/// spelling. The first non-null alias in table order wins, as in the typed
/// decoders. Keys without an alias entry pass through untouched.
pub fn decode_raw(value: &Value, aliases: AliasTable) -> Result<Vec<RawRecord>> {
    let raw = records(value)?
        .iter()
        .enumerate()
        .map(|(index, item)| -> Result<RawRecord> {
            let fields = Fields::new(index, item, aliases)?;
            let mut record = RawRecord::new();
            for (canonical, _) in aliases {
                if let Some(value) = fields.lookup(canonical) {
                    record.insert(canonical, raw_cell(value));
                }
            }
            for (key, value) in fields.object {
                let aliased = aliases
                    .iter()
                    .any(|(_, sources)| sources.contains(&key.as_str()));
                if !aliased && record.cell(key).is_missing() {
                    record.insert(key, raw_cell(value));
                }
            }
            Ok(record)
        })
        .collect::<Result<Vec<_>>>()
        .context("decode raw records")?;
    debug!(count = raw.len(), "decoded raw records");
    Ok(raw)
}

fn raw_cell(value: &Value) -> Cell {
    match value {
        Value::String(text) => Cell::Text(text.clone()),
        Value::Number(number) => number.as_f64().map(Cell::Number).unwrap_or(Cell::Missing),
        Value::Bool(flag) => Cell::Bool(*flag),
        Value::Null | Value::Array(_) | Value::Object(_) => Cell::Missing,
    }
}
