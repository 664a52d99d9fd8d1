// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::compare::{ColumnKind, RankTable};
use crate::model::{MachineStatus, RiskBand, TableKind, TicketPriority, TicketStatus};

static FALLBACK_KIND: ColumnKind = ColumnKind::Text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn new(key: &str, label: &str, kind: ColumnKind) -> Self {
        Self {
            key: key.to_owned(),
            label: label.to_owned(),
            kind,
        }
    }
}

/// Column declarations for one table screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub title: String,
    pub columns: Vec<ColumnSpec>,
    pub searchable: Vec<String>,
    pub status_field: String,
}

impl TableSchema {
    pub fn new(title: &str, columns: Vec<ColumnSpec>, searchable: &[&str], status_field: &str) -> Self {
        Self {
            title: title.to_owned(),
            columns,
            searchable: searchable.iter().map(|field| (*field).to_owned()).collect(),
            status_field: status_field.to_owned(),
        }
    }

    pub fn for_kind(kind: TableKind) -> Self {
        match kind {
            TableKind::Fleet => fleet_schema(),
            TableKind::Tickets => ticket_schema(),
            TableKind::Alerts => alert_schema(),
        }
    }

    pub fn column(&self, key: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|column| column.key == key)
    }

    /// Comparator for `key`. Undeclared columns compare as text.
    pub fn kind_for(&self, key: &str) -> &ColumnKind {
        self.column(key)
            .map(|column| &column.kind)
            .unwrap_or(&FALLBACK_KIND)
    }

    pub fn searchable_fields(&self) -> Vec<&str> {
        self.searchable.iter().map(String::as_str).collect()
    }

    pub fn column_keys(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.key.as_str()).collect()
    }
}

pub fn fleet_schema() -> TableSchema {
    let statuses = MachineStatus::ALL.map(MachineStatus::as_str);
    let risk_bands = RankTable::ordered(&RiskBand::ALL.map(RiskBand::label));
    TableSchema::new(
        "fleet",
        vec![
            ColumnSpec::new("id", "Machine ID", ColumnKind::IdNumericSuffix),
            ColumnSpec::new("name", "Machine Name", ColumnKind::Text),
            ColumnSpec::new(
                "status",
                "Status",
                ColumnKind::EnumRank(RankTable::ordered(&statuses)),
            ),
            ColumnSpec::new("riskScore", "Risk Score", ColumnKind::Numeric),
            ColumnSpec::new("riskBand", "Risk Band", ColumnKind::EnumRank(risk_bands)),
            ColumnSpec::new("location", "Location", ColumnKind::Text),
            ColumnSpec::new("lastMaintenance", "Last Maintenance", ColumnKind::Date),
        ],
        &["name", "id"],
        "status",
    )
}

pub fn ticket_schema() -> TableSchema {
    let priorities = TicketPriority::ALL.map(TicketPriority::as_str);
    let statuses = TicketStatus::ALL.map(TicketStatus::as_str);
    TableSchema::new(
        "tickets",
        vec![
            ColumnSpec::new("id", "Ticket ID", ColumnKind::IdNumericSuffix),
            ColumnSpec::new("machine", "Machine", ColumnKind::Text),
            ColumnSpec::new("issue", "Issue", ColumnKind::Text),
            ColumnSpec::new(
                "priority",
                "Priority",
                ColumnKind::EnumRank(RankTable::ordered(&priorities)),
            ),
            ColumnSpec::new("eta", "ETA", ColumnKind::Text),
            ColumnSpec::new(
                "status",
                "Status",
                ColumnKind::EnumRank(RankTable::ordered(&statuses)),
            ),
            ColumnSpec::new("createdDate", "Created", ColumnKind::Date),
        ],
        &["id", "machine", "issue"],
        "status",
    )
}

pub fn alert_schema() -> TableSchema {
    TableSchema::new(
        "alerts",
        vec![
            ColumnSpec::new("id", "ID", ColumnKind::IdNumericSuffix),
            ColumnSpec::new("name", "Alert Name", ColumnKind::Text),
            ColumnSpec::new("machine", "Machine", ColumnKind::Text),
            ColumnSpec::new("metric", "Metric", ColumnKind::Text),
            ColumnSpec::new("threshold", "Threshold", ColumnKind::Numeric),
            ColumnSpec::new(
                "enabled",
                "Status",
                ColumnKind::EnumRank(RankTable::ordered(&["enabled", "disabled"])),
            ),
            ColumnSpec::new("createdDate", "Created", ColumnKind::Date),
        ],
        &["name", "machine", "metric"],
        "enabled",
    )
}
