// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use fleetview_app::{Cell, FleetStats, Query, TableRecord, TableSchema, ViewResult};
use std::collections::BTreeMap;
use serde::Serialize;

const COLUMN_GAP: &str = "  ";

pub fn stats_line(stats: &FleetStats) -> String {
    format!(
        "total {} · normal {} · watch {} · risk {}",
        stats.total, stats.normal, stats.watch, stats.risk
    )
}

pub fn footer<R>(view: &ViewResult<'_, R>) -> String {
    format!(
        "{} · Page {} of {}",
        view.range_label(),
        view.page,
        view.total_pages
    )
}

/// Plain-text table: optional stats line, header, aligned rows, footer.
pub fn render_text<R: TableRecord>(
    view: &ViewResult<'_, R>,
    schema: &TableSchema,
    stats: Option<&FleetStats>,
) -> String {
    let header: Vec<String> = schema
        .columns
        .iter()
        .map(|column| column.label.clone())
        .collect();
    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|record| {
            schema
                .columns
                .iter()
                .map(|column| record.cell(&column.key).as_text())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|label| label.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    if let Some(stats) = stats {
        out.push_str(&stats_line(stats));
        out.push('\n');
    }
    out.push_str(&format_row(&header, &widths));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out.push_str(&footer(view));
    out.push('\n');
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_owned()
}

#[derive(Serialize)]
struct JsonView<'v, 'a, R> {
    table: &'v str,
    query: &'v Query,
    range_label: String,
    has_prev: bool,
    has_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<&'v FleetStats>,
    /// Page rows as displayed, one entry per schema column.
    cells: Vec<BTreeMap<&'v str, Cell>>,
    #[serde(flatten)]
    view: &'v ViewResult<'a, R>,
}

pub fn render_json<R: TableRecord + Serialize>(
    view: &ViewResult<'_, R>,
    schema: &TableSchema,
    query: &Query,
    stats: Option<&FleetStats>,
) -> Result<String> {
    let cells = view
        .rows
        .iter()
        .map(|record| {
            schema
                .columns
                .iter()
                .map(|column| (column.key.as_str(), record.cell(&column.key)))
                .collect()
        })
        .collect();
    let payload = JsonView {
        table: &schema.title,
        query,
        range_label: view.range_label(),
        has_prev: view.has_prev(),
        has_next: view.has_next(),
        stats,
        cells,
        view,
    };
    serde_json::to_string_pretty(&payload).context("encode view as JSON")
}

#[cfg(test)]
mod tests {
    use super::{footer, render_json, render_text, stats_line};
    use anyhow::Result;
    use fleetview_app::demo::demo_machines;
    use fleetview_app::{FleetStats, Query, compute_view, fleet_schema};

    #[test]
    fn stats_line_lists_each_status() {
        let stats = FleetStats::from_machines(&demo_machines());
        assert_eq!(
            stats_line(&stats),
            "total 26 · normal 10 · watch 10 · risk 6"
        );
    }

    #[test]
    fn footer_matches_dashboard_wording() {
        let fleet = demo_machines();
        let query = Query {
            page: 2,
            ..Query::default()
        };
        let view = compute_view(&fleet, &fleet_schema(), &query);
        assert_eq!(footer(&view), "11-20 of 26 · Page 2 of 3");

        let empty = compute_view(
            &fleet,
            &fleet_schema(),
            &Query {
                search_text: "no such machine".to_owned(),
                ..Query::default()
            },
        );
        assert_eq!(footer(&empty), "No results · Page 1 of 1");
    }

    #[test]
    fn text_table_aligns_columns() {
        let fleet = demo_machines();
        let schema = fleet_schema();
        let view = compute_view(&fleet, &schema, &Query::with_page_size(3));
        let rendered = render_text(&view, &schema, None);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Machine ID  Machine Name"));
        assert!(lines[0].contains("Risk Band"));
        let name_offset = "Machine ID  ".len();
        for row in &lines[1..4] {
            assert!(row.starts_with('M'));
            assert_eq!(&row[name_offset - 2..name_offset], "  ");
            assert_ne!(row.as_bytes()[name_offset], b' ');
        }
        assert_eq!(lines[4], "1-3 of 26 · Page 1 of 9");
    }

    #[test]
    fn text_table_leads_with_stats_when_given() {
        let fleet = demo_machines();
        let schema = fleet_schema();
        let stats = FleetStats::from_machines(&fleet);
        let view = compute_view(&fleet, &schema, &Query::default());
        let rendered = render_text(&view, &schema, Some(&stats));
        assert!(rendered.starts_with("total 26 · "));
    }

    #[test]
    fn json_output_carries_rows_and_pagination() -> Result<()> {
        let fleet = demo_machines();
        let schema = fleet_schema();
        let query = Query::with_page_size(5);
        let view = compute_view(&fleet, &schema, &query);
        let encoded = render_json(&view, &schema, &query, None)?;
        let value: serde_json::Value = serde_json::from_str(&encoded)?;

        assert_eq!(value["total_count"], 26);
        assert_eq!(value["total_pages"], 6);
        assert_eq!(value["range_label"], "1-5 of 26");
        assert_eq!(value["has_prev"], false);
        assert_eq!(value["rows"].as_array().map(Vec::len), Some(5));
        assert!(value.get("stats").is_none());
        Ok(())
    }

    #[test]
    fn json_cells_include_the_risk_band() -> Result<()> {
        let fleet = demo_machines();
        let schema = fleet_schema();
        let query = Query::with_page_size(2);
        let view = compute_view(&fleet, &schema, &query);
        let encoded = render_json(&view, &schema, &query, None)?;
        let value: serde_json::Value = serde_json::from_str(&encoded)?;

        let first = &value["cells"][0];
        assert_eq!(first["id"], "M001");
        let expected = view.rows[0].risk_band().label();
        assert_eq!(first["riskBand"], expected);
        assert_eq!(value["cells"].as_array().map(Vec::len), Some(2));
        Ok(())
    }
}
