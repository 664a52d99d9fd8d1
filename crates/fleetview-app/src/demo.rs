// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::{AlertId, MachineId, TicketId};
use crate::model::{
    Alert, Machine, MachineStatus, Ticket, TicketPriority, TicketStatus,
};

const DEMO_FLEET: [(&str, &str, MachineStatus, f64, &str, &str); 26] = [
    ("M001", "Pump Station A-12", MachineStatus::Normal, 12.0, "Building A, Floor 2", "2025-10-15"),
    ("M002", "Compressor B-04", MachineStatus::Watch, 58.0, "Building B, Floor 1", "2025-09-20"),
    ("M003", "Motor Drive C-33", MachineStatus::Risk, 87.0, "Building C, Floor 3", "2025-08-10"),
    ("M004", "Turbine D-21", MachineStatus::Normal, 24.0, "Building D, Floor 1", "2025-11-01"),
    ("M005", "Generator E-15", MachineStatus::Watch, 64.0, "Building E, Floor 2", "2025-09-15"),
    ("M006", "Cooling Unit F-08", MachineStatus::Normal, 18.0, "Building F, Floor 1", "2025-10-28"),
    ("M007", "Hydraulic Press G-02", MachineStatus::Watch, 52.0, "Building G, Floor 1", "2025-09-05"),
    ("M008", "Conveyor H-10", MachineStatus::Normal, 21.0, "Building H, Floor 2", "2025-10-12"),
    ("M009", "Boiler I-01", MachineStatus::Risk, 90.0, "Building I, Basement", "2025-07-30"),
    ("M010", "Chiller J-04", MachineStatus::Watch, 63.0, "Building J, Roof", "2025-09-18"),
    ("M011", "Packaging Line K-07", MachineStatus::Normal, 28.0, "Building K, Floor 1", "2025-10-08"),
    ("M012", "Mixer L-03", MachineStatus::Watch, 55.0, "Building L, Floor 2", "2025-09-02"),
    ("M013", "Furnace M-09", MachineStatus::Risk, 94.0, "Building M, Floor 1", "2025-08-20"),
    ("M014", "Water Pump N-05", MachineStatus::Normal, 16.0, "Building N, Basement", "2025-11-03"),
    ("M015", "Lathe O-11", MachineStatus::Watch, 47.0, "Building O, Floor 1", "2025-09-25"),
    ("M016", "CNC Router P-06", MachineStatus::Normal, 23.0, "Building P, Floor 2", "2025-10-02"),
    ("M017", "Extruder Q-08", MachineStatus::Risk, 81.0, "Building Q, Floor 1", "2025-08-05"),
    ("M018", "Oven R-02", MachineStatus::Watch, 59.0, "Building R, Floor 1", "2025-09-12"),
    ("M019", "Press S-14", MachineStatus::Normal, 31.0, "Building S, Floor 2", "2025-10-18"),
    ("M020", "Lift T-03", MachineStatus::Watch, 50.0, "Building T, Floor 3", "2025-09-28"),
    ("M021", "Compressor U-12", MachineStatus::Risk, 76.0, "Building U, Floor 1", "2025-08-22"),
    ("M022", "Pump V-01", MachineStatus::Normal, 19.0, "Building V, Basement", "2025-11-06"),
    ("M023", "Motor W-15", MachineStatus::Watch, 57.0, "Building W, Floor 2", "2025-09-09"),
    ("M024", "Fan X-05", MachineStatus::Normal, 14.0, "Building X, Floor 1", "2025-10-26"),
    ("M025", "Generator Y-07", MachineStatus::Risk, 82.0, "Building Y, Roof", "2025-08-12"),
    ("M026", "Filter Z-03", MachineStatus::Watch, 46.0, "Building Z, Floor 1", "2025-09-16"),
];

/// The 26-machine fleet shown by `--demo`.
pub fn demo_machines() -> Vec<Machine> {
    DEMO_FLEET
        .iter()
        .map(|(id, name, status, risk, location, last_maintenance)| Machine {
            id: MachineId::from(*id),
            name: (*name).to_owned(),
            status: *status,
            risk_score: *risk,
            location: (*location).to_owned(),
            last_maintenance: (*last_maintenance).to_owned(),
        })
        .collect()
}

pub fn demo_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: TicketId::from("T001"),
            machine: "Motor Drive C-33".to_owned(),
            issue: "High vibration levels detected - bearing misalignment suspected".to_owned(),
            suggested_fix: "Inspect and realign bearings, check lubrication system".to_owned(),
            priority: TicketPriority::Critical,
            eta: "3-5 days".to_owned(),
            status: TicketStatus::Pending,
            created_date: "2025-11-10".to_owned(),
        },
        Ticket {
            id: TicketId::from("T002"),
            machine: "Compressor B-04".to_owned(),
            issue: "Temperature exceeding normal operating range".to_owned(),
            suggested_fix: "Clean cooling system, check for blockages".to_owned(),
            priority: TicketPriority::High,
            eta: "7-10 days".to_owned(),
            status: TicketStatus::InProgress,
            created_date: "2025-11-08".to_owned(),
        },
        Ticket {
            id: TicketId::from("T003"),
            machine: "Pump Station A-12".to_owned(),
            issue: "Routine maintenance due".to_owned(),
            suggested_fix: "Standard inspection and lubrication".to_owned(),
            priority: TicketPriority::Low,
            eta: "14-21 days".to_owned(),
            status: TicketStatus::Completed,
            created_date: "2025-10-25".to_owned(),
        },
    ]
}

pub fn demo_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: AlertId::from("1"),
            name: "High Temperature Warning".to_owned(),
            machine: "Compressor B-04".to_owned(),
            metric: "Temperature".to_owned(),
            threshold: 90.0,
            enabled: true,
            created_date: "2025-11-01".to_owned(),
        },
        Alert {
            id: AlertId::from("2"),
            name: "Critical Vibration".to_owned(),
            machine: "Motor Drive C-33".to_owned(),
            metric: "Vibration".to_owned(),
            threshold: 5.0,
            enabled: true,
            created_date: "2025-10-28".to_owned(),
        },
        Alert {
            id: AlertId::from("3"),
            name: "Current Overload".to_owned(),
            machine: "Generator E-15".to_owned(),
            metric: "Current".to_owned(),
            threshold: 75.0,
            enabled: false,
            created_date: "2025-10-15".to_owned(),
        },
    ]
}
