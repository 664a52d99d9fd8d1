// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use fleetview_app::{
    Alert, AlertId, Machine, MachineId, MachineStatus, Ticket, TicketId, TicketPriority,
    TicketStatus,
};
use std::path::PathBuf;
use time::macros::date;
use time::{Date, Duration};

const MACHINE_KINDS: [&str; 20] = [
    "Pump Station",
    "Compressor",
    "Motor Drive",
    "Turbine",
    "Generator",
    "Cooling Unit",
    "Hydraulic Press",
    "Conveyor",
    "Boiler",
    "Chiller",
    "Packaging Line",
    "Mixer",
    "Furnace",
    "Water Pump",
    "Lathe",
    "CNC Router",
    "Extruder",
    "Oven",
    "Lift",
    "Filter",
];

const FLOORS: [&str; 6] = ["Floor 1", "Floor 2", "Floor 3", "Basement", "Roof", "Mezzanine"];

const ISSUES: [(&str, &str); 8] = [
    (
        "High vibration levels detected",
        "Inspect and realign bearings, check lubrication system",
    ),
    (
        "Temperature exceeding normal operating range",
        "Clean cooling system, check for blockages",
    ),
    ("Routine maintenance due", "Standard inspection and lubrication"),
    ("Current draw above baseline", "Check windings and load balance"),
    ("Pressure drop across filter", "Replace filter cartridge"),
    ("Abnormal acoustic signature", "Run ultrasonic inspection on gearbox"),
    ("RPM fluctuation under load", "Recalibrate drive controller"),
    ("Oil contamination detected", "Flush and replace lubricant"),
];

const ETAS: [&str; 5] = ["1-2 days", "3-5 days", "7-10 days", "14-21 days", "30 days"];

const METRICS: [&str; 6] = [
    "Temperature",
    "Vibration",
    "Current",
    "Pressure",
    "RPM",
    "Power Consumption",
];

const ALERT_PREFIXES: [&str; 5] = ["High", "Critical", "Sustained", "Rising", "Peak"];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

/// Seeded generator of fleet, ticket and alert records. The same seed always
/// yields the same records.
#[derive(Debug, Clone)]
pub struct FleetFaker {
    rng: DeterministicRng,
}

impl FleetFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn machine(&mut self, number: usize) -> Machine {
        let risk_score = self.int_range(0, 100) as f64;
        let status = if risk_score >= 70.0 {
            MachineStatus::Risk
        } else if risk_score >= 45.0 {
            MachineStatus::Watch
        } else {
            MachineStatus::Normal
        };
        let building = char::from(b'A' + self.rng.int_n(26) as u8);
        Machine {
            id: MachineId::new(format!("M{number:03}")),
            name: format!(
                "{} {}-{:02}",
                self.pick(&MACHINE_KINDS),
                building,
                self.int_range(1, 40)
            ),
            status,
            risk_score,
            location: format!("Building {building}, {}", self.pick(&FLOORS)),
            last_maintenance: self.recent_date(),
        }
    }

    /// `count` machines numbered from `M001`, in shuffled order.
    pub fn fleet(&mut self, count: usize) -> Vec<Machine> {
        let mut machines: Vec<Machine> = (1..=count).map(|number| self.machine(number)).collect();
        for index in (1..machines.len()).rev() {
            let swap = self.rng.int_n(index + 1);
            machines.swap(index, swap);
        }
        machines
    }

    pub fn ticket(&mut self, number: usize, machine: &Machine) -> Ticket {
        let (issue, fix) = ISSUES[self.rng.int_n(ISSUES.len())];
        Ticket {
            id: TicketId::new(format!("T{number:03}")),
            machine: machine.name.clone(),
            issue: issue.to_owned(),
            suggested_fix: fix.to_owned(),
            priority: TicketPriority::ALL[self.rng.int_n(TicketPriority::ALL.len())],
            eta: self.pick(&ETAS).to_owned(),
            status: TicketStatus::ALL[self.rng.int_n(TicketStatus::ALL.len())],
            created_date: self.recent_date(),
        }
    }

    pub fn tickets(&mut self, fleet: &[Machine], count: usize) -> Vec<Ticket> {
        if fleet.is_empty() {
            return Vec::new();
        }
        (1..=count)
            .map(|number| {
                let machine = &fleet[self.rng.int_n(fleet.len())];
                self.ticket(number, machine)
            })
            .collect()
    }

    pub fn alert(&mut self, number: usize, machine: &Machine) -> Alert {
        let metric = self.pick(&METRICS);
        Alert {
            id: AlertId::new(number.to_string()),
            name: format!("{} {metric}", self.pick(&ALERT_PREFIXES)),
            machine: machine.name.clone(),
            metric: metric.to_owned(),
            threshold: self.int_range(1, 200) as f64 / 2.0,
            enabled: self.rng.bool(),
            created_date: self.recent_date(),
        }
    }

    fn pick<'a>(&mut self, values: &'a [&'a str]) -> &'a str {
        values[self.rng.int_n(values.len())]
    }

    fn int_range(&mut self, low: usize, high: usize) -> usize {
        low + self.rng.int_n(high.saturating_sub(low) + 1)
    }

    fn recent_date(&mut self) -> String {
        let offset = Duration::days(self.int_range(0, 364) as i64);
        (REFERENCE_DATE - offset).to_string()
    }
}

pub fn temp_records_file(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("records.json");
    std::fs::write(&path, content)
        .with_context(|| format!("write records file {}", path.display()))?;
    Ok((dir, path))
}

pub fn machines_json(machines: &[Machine]) -> Result<String> {
    serde_json::to_string_pretty(machines).context("encode machines")
}

pub fn fixture_date() -> &'static str {
    "2025-11-10"
}

const REFERENCE_DATE: Date = date!(2025 - 11 - 10);
