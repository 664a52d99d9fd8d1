// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::ids::*;
use crate::record::{Cell, TableRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineStatus {
    Normal,
    Watch,
    Risk,
}

impl MachineStatus {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Watch, Self::Risk];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Watch => "Watch",
            Self::Risk => "Risk",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Normal" => Some(Self::Normal),
            "Watch" => Some(Self::Watch),
            "Risk" => Some(Self::Risk),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            "Critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TicketStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Colour band of a risk score on the fleet table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Elevated,
    High,
}

impl RiskBand {
    pub const ALL: [Self; 3] = [Self::Low, Self::Elevated, Self::High];

    pub fn for_score(score: f64) -> Self {
        if score >= 70.0 {
            Self::High
        } else if score >= 50.0 {
            Self::Elevated
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Elevated => "elevated",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableKind {
    Fleet,
    Tickets,
    Alerts,
}

impl TableKind {
    pub const ALL: [Self; 3] = [Self::Fleet, Self::Tickets, Self::Alerts];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fleet => "fleet",
            Self::Tickets => "tickets",
            Self::Alerts => "alerts",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fleet" => Some(Self::Fleet),
            "tickets" => Some(Self::Tickets),
            "alerts" => Some(Self::Alerts),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: MachineId,
    pub name: String,
    pub status: MachineStatus,
    pub risk_score: f64,
    pub location: String,
    pub last_maintenance: String,
}

impl Machine {
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::for_score(self.risk_score)
    }
}

impl TableRecord for Machine {
    fn cell(&self, field: &str) -> Cell {
        match field {
            "id" => Cell::text(self.id.as_str()),
            "name" => Cell::text(&self.name),
            "status" => Cell::text(self.status.as_str()),
            "riskScore" => Cell::Number(self.risk_score),
            "riskBand" if self.risk_score.is_nan() => Cell::Missing,
            "riskBand" => Cell::text(self.risk_band().label()),
            "location" => Cell::text(&self.location),
            "lastMaintenance" => Cell::text(&self.last_maintenance),
            _ => Cell::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: TicketId,
    pub machine: String,
    pub issue: String,
    pub suggested_fix: String,
    pub priority: TicketPriority,
    pub eta: String,
    pub status: TicketStatus,
    pub created_date: String,
}

impl TableRecord for Ticket {
    fn cell(&self, field: &str) -> Cell {
        match field {
            "id" => Cell::text(self.id.as_str()),
            "machine" => Cell::text(&self.machine),
            "issue" => Cell::text(&self.issue),
            "suggestedFix" => Cell::text(&self.suggested_fix),
            "priority" => Cell::text(self.priority.as_str()),
            "eta" => Cell::text(&self.eta),
            "status" => Cell::text(self.status.as_str()),
            "createdDate" => Cell::text(&self.created_date),
            _ => Cell::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: AlertId,
    pub name: String,
    pub machine: String,
    pub metric: String,
    pub threshold: f64,
    pub enabled: bool,
    pub created_date: String,
}

impl Alert {
    pub const fn state_label(&self) -> &'static str {
        if self.enabled { "enabled" } else { "disabled" }
    }
}

impl TableRecord for Alert {
    fn cell(&self, field: &str) -> Cell {
        match field {
            "id" => Cell::text(self.id.as_str()),
            "name" => Cell::text(&self.name),
            "machine" => Cell::text(&self.machine),
            "metric" => Cell::text(&self.metric),
            "threshold" => Cell::Number(self.threshold),
            "enabled" => Cell::text(self.state_label()),
            "createdDate" => Cell::text(&self.created_date),
            _ => Cell::Missing,
        }
    }
}

/// Summary counts shown above the fleet table. Always over the full fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FleetStats {
    pub total: usize,
    pub normal: usize,
    pub watch: usize,
    pub risk: usize,
}

impl FleetStats {
    pub fn from_machines(machines: &[Machine]) -> Self {
        machines.iter().fold(Self::default(), |mut stats, machine| {
            stats.total += 1;
            match machine.status {
                MachineStatus::Normal => stats.normal += 1,
                MachineStatus::Watch => stats.watch += 1,
                MachineStatus::Risk => stats.risk += 1,
            }
            stats
        })
    }
}
