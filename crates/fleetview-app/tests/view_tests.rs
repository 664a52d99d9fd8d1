// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use fleetview_app::decode::{decode_machines, decode_raw, MACHINE_ALIASES};
use fleetview_app::demo::{demo_alerts, demo_machines, demo_tickets};
use fleetview_app::compare::numeric_suffix;
use fleetview_app::{
    Cell, Query, RawRecord, SortState, StatusFilter, TableCommand, TableRecord, TableSchema,
    TableState, alert_schema, compute_view, fleet_schema, ticket_schema,
};
use fleetview_testkit::{FleetFaker, machines_json};

fn ids<R: TableRecord>(rows: &[&R]) -> Vec<String> {
    column(rows, "id")
}

fn column<R: TableRecord>(rows: &[&R], key: &str) -> Vec<String> {
    rows.iter().map(|row| row.cell(key).as_text()).collect()
}

fn all_pages<R: TableRecord>(records: &[R], schema: &TableSchema, query: &Query) -> Vec<String> {
    let first = compute_view(records, schema, query);
    let mut collected = Vec::new();
    for page in 1..=first.total_pages {
        let paged = Query {
            page,
            ..query.clone()
        };
        collected.extend(column(&compute_view(records, schema, &paged).rows, "name"));
    }
    collected
}

fn sorted_everything<R: TableRecord>(records: &[R], sort: SortState) -> Vec<String> {
    let query = Query {
        sort,
        page_size: records.len(),
        ..Query::default()
    };
    column(&compute_view(records, &fleet_schema(), &query).rows, "name")
}

/// Fixed-width ISO dates, so text order is date order.
fn is_dated(text: &str) -> bool {
    text.len() == 10 && text.starts_with("2025-")
}

/// About a quarter of the maintenance dates are unparsable or absent.
fn maintenance_log(seed: u64, count: usize) -> Vec<RawRecord> {
    let mut faker = FleetFaker::new(seed);
    (0..count)
        .map(|n| {
            let date = match faker.int_n(8) {
                0 => Cell::Missing,
                1 => Cell::text(["n/a", "", "next week", "TBD"][faker.int_n(4)]),
                _ => Cell::text(format!(
                    "2025-{:02}-{:02}",
                    1 + faker.int_n(12),
                    1 + faker.int_n(28)
                )),
            };
            RawRecord::new()
                .with("id", Cell::text(format!("M{n:03}")))
                .with("name", Cell::text(format!("row {n}")))
                .with("status", Cell::text("Normal"))
                .with("lastMaintenance", date)
        })
        .collect()
}

/// Ids mixing prefixes, trailing letters and bare words.
fn mixed_id_fleet(seed: u64, count: usize, suffixed_only: bool) -> Vec<RawRecord> {
    let mut faker = FleetFaker::new(seed);
    let shapes = if suffixed_only { 2 } else { 5 };
    (0..count)
        .map(|n| {
            let id = match faker.int_n(shapes) {
                0 => format!("A{}", faker.int_n(100)),
                1 => format!("B{}", faker.int_n(100)),
                2 => format!("A{}x", faker.int_n(100)),
                3 => ["pump", "Pump", "beta", "zeta"][faker.int_n(4)].to_owned(),
                _ => format!("{}", faker.int_n(1000)),
            };
            RawRecord::new()
                .with("id", Cell::text(id))
                .with("name", Cell::text(format!("row {n}")))
                .with("status", Cell::text("Watch"))
        })
        .collect()
}

#[test]
fn search_results_always_contain_the_needle() {
    for seed in 1..=20 {
        let fleet = FleetFaker::new(seed).fleet(40);
        for needle in ["pump", "M01", "c-", "OVEN"] {
            let query = Query {
                search_text: needle.to_owned(),
                page_size: 100,
                ..Query::default()
            };
            let view = compute_view(&fleet, &fleet_schema(), &query);
            let lowered = needle.to_lowercase();
            for row in &view.rows {
                assert!(
                    row.name.to_lowercase().contains(&lowered)
                        || row.id.as_str().to_lowercase().contains(&lowered),
                    "seed {seed}: {} / {} does not contain {needle}",
                    row.id,
                    row.name
                );
            }
        }
    }
}

#[test]
fn status_filter_returns_only_that_status() {
    for seed in 1..=20 {
        let fleet = FleetFaker::new(seed).fleet(35);
        for status in ["Normal", "Watch", "Risk"] {
            let query = Query {
                status_filter: StatusFilter::parse(status),
                page_size: 100,
                ..Query::default()
            };
            let view = compute_view(&fleet, &fleet_schema(), &query);
            let expected = fleet.iter().filter(|m| m.status.as_str() == status).count();
            assert_eq!(view.total_count, expected, "seed {seed}");
            assert!(view.rows.iter().all(|m| m.status.as_str() == status));
        }
    }
}

#[test]
fn compute_view_is_idempotent() {
    let fleet = FleetFaker::new(17).fleet(33);
    let query = Query {
        search_text: "a".to_owned(),
        sort: SortState::Descending("lastMaintenance".to_owned()),
        page: 2,
        ..Query::default()
    };
    let schema = fleet_schema();
    assert_eq!(
        compute_view(&fleet, &schema, &query),
        compute_view(&fleet, &schema, &query)
    );
}

#[test]
fn pages_concatenate_to_the_full_sorted_set() {
    for seed in 1..=10 {
        let fleet = FleetFaker::new(seed).fleet(47);
        for sort_column in [
            "id",
            "name",
            "status",
            "riskScore",
            "riskBand",
            "lastMaintenance",
        ] {
            for page_size in [1, 7, 10, 47, 60] {
                let query = Query {
                    sort: SortState::Ascending(sort_column.to_owned()),
                    page_size,
                    ..Query::default()
                };
                let everything = Query {
                    page_size: fleet.len(),
                    ..query.clone()
                };
                let expected =
                    column(&compute_view(&fleet, &fleet_schema(), &everything).rows, "name");
                assert_eq!(expected.len(), fleet.len());
                assert_eq!(
                    all_pages(&fleet, &fleet_schema(), &query),
                    expected,
                    "seed {seed} column {sort_column} size {page_size}"
                );
            }
        }
    }
}

#[test]
fn unparsable_dates_hold_position_in_large_sorted_fleets() {
    for seed in 1..=8 {
        for count in [50, 137, 500] {
            let records = maintenance_log(seed, count);
            let input_dates: Vec<String> = records
                .iter()
                .map(|record| record.cell("lastMaintenance").as_text())
                .collect();
            for sort in [
                SortState::Ascending("lastMaintenance".to_owned()),
                SortState::Descending("lastMaintenance".to_owned()),
            ] {
                let query = Query {
                    sort: sort.clone(),
                    page_size: count,
                    ..Query::default()
                };
                let view = compute_view(&records, &fleet_schema(), &query);
                assert_eq!(view.total_count, count);
                let output_dates = column(&view.rows, "lastMaintenance");
                let output_names = column(&view.rows, "name");

                for (index, date) in input_dates.iter().enumerate() {
                    if !is_dated(date) {
                        assert_eq!(
                            output_names[index],
                            format!("row {index}"),
                            "seed {seed} count {count}: undated row moved"
                        );
                    }
                }

                let dated: Vec<&String> =
                    output_dates.iter().filter(|date| is_dated(date)).collect();
                let ordered = match sort {
                    SortState::Descending(_) => dated.windows(2).all(|pair| pair[0] >= pair[1]),
                    _ => dated.windows(2).all(|pair| pair[0] <= pair[1]),
                };
                assert!(ordered, "seed {seed} count {count}: {sort:?} out of order");

                for page_size in [7, 10, 33] {
                    let paged = Query {
                        page_size,
                        ..query.clone()
                    };
                    assert_eq!(
                        all_pages(&records, &fleet_schema(), &paged),
                        output_names,
                        "seed {seed} count {count} size {page_size}"
                    );
                }
            }
        }
    }
}

#[test]
fn mixed_ids_sort_completely_and_deterministically() {
    for seed in 1..=8 {
        for count in [50, 211, 500] {
            let records = mixed_id_fleet(seed, count, false);
            for sort in [
                SortState::Ascending("id".to_owned()),
                SortState::Descending("id".to_owned()),
            ] {
                let sorted = sorted_everything(&records, sort.clone());
                assert_eq!(sorted, sorted_everything(&records, sort.clone()));

                let mut seen = sorted.clone();
                seen.sort();
                let mut expected: Vec<String> = (0..count).map(|n| format!("row {n}")).collect();
                expected.sort();
                assert_eq!(seen, expected, "seed {seed} count {count}: rows lost");

                let paged = Query {
                    sort,
                    page_size: 10,
                    ..Query::default()
                };
                assert_eq!(all_pages(&records, &fleet_schema(), &paged), sorted);
            }
        }
    }
}

#[test]
fn suffixed_ids_sort_by_number_in_large_fleets() {
    for seed in 1..=8 {
        let records = mixed_id_fleet(seed, 300, true);
        let view = compute_view(
            &records,
            &fleet_schema(),
            &Query {
                sort: SortState::Ascending("id".to_owned()),
                page_size: records.len(),
                ..Query::default()
            },
        );
        let numbers: Vec<Option<u64>> = ids(&view.rows)
            .iter()
            .map(|id| numeric_suffix(id))
            .collect();
        assert!(numbers.iter().all(Option::is_some));
        assert!(
            numbers.windows(2).all(|pair| pair[0] <= pair[1]),
            "seed {seed}: ids out of numeric order"
        );
    }
}

#[test]
fn every_page_has_the_documented_length() {
    let fleet = FleetFaker::new(23).fleet(26);
    let schema = fleet_schema();
    for page in 1..=3 {
        let query = Query {
            page,
            ..Query::default()
        };
        let view = compute_view(&fleet, &schema, &query);
        let expected = view
            .page_size
            .min(view.total_count - (view.page - 1) * view.page_size);
        assert_eq!(view.rows.len(), expected);
    }
}

#[test]
fn sort_law_three_activations_clear_and_fourth_restarts() {
    let mut state = TableState::default();
    for _ in 0..3 {
        state.dispatch(TableCommand::ActivateSort("id".to_owned()));
    }
    assert_eq!(state.query().sort_column(), None);

    state.dispatch(TableCommand::ActivateSort("id".to_owned()));
    assert_eq!(state.query().sort, SortState::Ascending("id".to_owned()));
}

#[test]
fn documented_examples_hold_for_decoded_records() -> Result<()> {
    let value = serde_json::json!([
        {"id": "M002", "riskScore": 58, "status": "Watch"},
        {"id": "M001", "riskScore": 12, "status": "Normal"},
        {"id": "M013", "riskScore": 94, "status": "Risk"}
    ]);
    let records = decode_machines(&value)?;
    let schema = fleet_schema();

    let by_risk = compute_view(
        &records,
        &schema,
        &Query {
            sort: SortState::Ascending("riskScore".to_owned()),
            ..Query::with_page_size(2)
        },
    );
    assert_eq!(ids(&by_risk.rows), vec!["M001", "M002"]);
    assert_eq!((by_risk.total_count, by_risk.total_pages), (3, 2));

    let at_risk = compute_view(
        &records,
        &schema,
        &Query {
            status_filter: StatusFilter::parse("Risk"),
            ..Query::default()
        },
    );
    assert_eq!(ids(&at_risk.rows), vec!["M013"]);
    assert_eq!((at_risk.total_count, at_risk.total_pages), (1, 1));

    let by_id = compute_view(
        &records,
        &schema,
        &Query {
            sort: SortState::Ascending("id".to_owned()),
            ..Query::default()
        },
    );
    assert_eq!(ids(&by_id.rows), vec!["M001", "M002", "M013"]);

    let clamped = compute_view(
        &records,
        &schema,
        &Query {
            page: 5,
            ..Query::with_page_size(2)
        },
    );
    assert_eq!(clamped.page, 2);
    Ok(())
}

#[test]
fn raw_records_sort_malformed_risk_last() -> Result<()> {
    let value = serde_json::json!([
        {"id": "M001", "risk": "unknown", "status": "Normal"},
        {"id": "M002", "risk": 58, "status": "Watch"},
        {"id": "M003", "status": "Risk"},
        {"id": "M004", "risk": 12, "status": "Normal"}
    ]);
    let records = decode_raw(&value, MACHINE_ALIASES)?;
    let view = compute_view(
        &records,
        &fleet_schema(),
        &Query {
            sort: SortState::Ascending("riskScore".to_owned()),
            ..Query::default()
        },
    );
    assert_eq!(ids(&view.rows), vec!["M004", "M002", "M001", "M003"]);
    Ok(())
}

#[test]
fn demo_fleet_sorted_by_status_groups_by_rank() {
    let fleet = demo_machines();
    let view = compute_view(
        &fleet,
        &fleet_schema(),
        &Query {
            sort: SortState::Descending("status".to_owned()),
            page_size: fleet.len(),
            ..Query::default()
        },
    );
    let statuses: Vec<&str> = view.rows.iter().map(|m| m.status.as_str()).collect();
    assert!(statuses[..6].iter().all(|s| *s == "Risk"));
    assert!(statuses[16..].iter().all(|s| *s == "Normal"));
    // Stable within a rank.
    assert_eq!(view.rows[0].id.as_str(), "M003");
}

#[test]
fn ticket_priority_and_alert_state_sort_by_rank() {
    let tickets = demo_tickets();
    let view = compute_view(
        &tickets,
        &ticket_schema(),
        &Query {
            sort: SortState::Descending("priority".to_owned()),
            ..Query::default()
        },
    );
    assert_eq!(ids(&view.rows), vec!["T001", "T002", "T003"]);

    let alerts = demo_alerts();
    let disabled = compute_view(
        &alerts,
        &alert_schema(),
        &Query {
            status_filter: StatusFilter::parse("disabled"),
            ..Query::default()
        },
    );
    assert_eq!(ids(&disabled.rows), vec!["3"]);
}

#[test]
fn faker_fleet_survives_json_boundary() -> Result<()> {
    let fleet = FleetFaker::new(31).fleet(12);
    let value: serde_json::Value = serde_json::from_str(&machines_json(&fleet)?)?;
    assert_eq!(decode_machines(&value)?, fleet);
    Ok(())
}
