// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod render;
mod source;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use fleetview_app::{
    FleetStats, StatusFilter, TableCommand, TableKind, TableRecord, TableSchema, TableState,
};
use serde::Serialize;
use source::{DemoSource, JsonFileSource, LoadedTable, RecordSource};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("FLEETVIEW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `fleetview --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let source = record_source(&options, &config)?;
    let kind = options.table.unwrap_or_else(|| config.default_table());
    let table = source.load(kind).with_context(|| {
        format!(
            "load {} records from {}; check --records, [data].records_path or FLEETVIEW_RECORDS_PATH",
            kind.as_str(),
            source.describe()
        )
    })?;
    info!(
        source = %source.describe(),
        table = table.kind().as_str(),
        count = table.len(),
        "records loaded"
    );
    if options.check_only {
        return Ok(());
    }

    let mut state = TableState::new(options.page_size.unwrap_or_else(|| config.page_size()));
    let schema = TableSchema::for_kind(kind);
    for command in options.commands(&schema) {
        state.dispatch(command);
    }

    let output = match &table {
        LoadedTable::Fleet(machines) => {
            let stats = FleetStats::from_machines(machines);
            show(machines, &schema, &mut state, Some(&stats), options.json)?
        }
        LoadedTable::Tickets(tickets) => show(tickets, &schema, &mut state, None, options.json)?,
        LoadedTable::Alerts(alerts) => show(alerts, &schema, &mut state, None, options.json)?,
        LoadedTable::Raw(_, records) => show(records, &schema, &mut state, None, options.json)?,
    };
    print!("{output}");
    Ok(())
}

fn record_source(options: &CliOptions, config: &Config) -> Result<Box<dyn RecordSource>> {
    if options.demo {
        if options.raw {
            bail!("--raw reads a records file and cannot be combined with --demo");
        }
        return Ok(Box::new(DemoSource));
    }

    let path = options
        .records_path
        .clone()
        .or_else(|| config.records_path())
        .ok_or_else(|| {
            anyhow!(
                "no records file; pass --records <path>, set [data].records_path or FLEETVIEW_RECORDS_PATH, or use --demo"
            )
        })?;
    if options.raw {
        Ok(Box::new(JsonFileSource::raw(path)))
    } else {
        Ok(Box::new(JsonFileSource::new(path)))
    }
}

fn show<R: TableRecord + Serialize>(
    records: &[R],
    schema: &TableSchema,
    state: &mut TableState,
    stats: Option<&FleetStats>,
    json: bool,
) -> Result<String> {
    let view = state.view(records, schema);
    if json {
        let mut encoded = render::render_json(&view, schema, state.query(), stats)?;
        encoded.push('\n');
        Ok(encoded)
    } else {
        Ok(render::render_text(&view, schema, stats))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
    demo: bool,
    raw: bool,
    json: bool,
    table: Option<TableKind>,
    records_path: Option<PathBuf>,
    search: Option<String>,
    status: Option<StatusFilter>,
    sort: Vec<String>,
    page: Option<usize>,
    page_size: Option<usize>,
}

impl CliOptions {
    /// Table commands in the order a user would issue them. Search and
    /// filter reset the page, so the requested page goes last.
    fn commands(&self, schema: &TableSchema) -> Vec<TableCommand> {
        let mut commands = Vec::new();
        if let Some(search) = &self.search {
            commands.push(TableCommand::SetSearch(search.clone()));
        }
        if let Some(status) = &self.status {
            commands.push(TableCommand::SetStatusFilter(status.clone()));
        }
        for column in &self.sort {
            if schema.column(column).is_none() {
                warn!(
                    column = %column,
                    table = %schema.title,
                    "sort column is not declared; comparing as text"
                );
            }
            commands.push(TableCommand::ActivateSort(column.clone()));
        }
        if let Some(page) = self.page {
            commands.push(TableCommand::GoToPage(page));
        }
        commands
    }
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        check_only: false,
        show_help: false,
        demo: false,
        raw: false,
        json: false,
        table: None,
        records_path: None,
        search: None,
        status: None,
        sort: Vec::new(),
        page: None,
        page_size: None,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--records" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--records requires a file path"))?;
                options.records_path = Some(PathBuf::from(value.as_ref()));
            }
            "--table" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--table requires fleet, tickets or alerts"))?;
                let kind = TableKind::parse(value.as_ref()).ok_or_else(|| {
                    anyhow!(
                        "unknown table {:?}; expected fleet, tickets or alerts",
                        value.as_ref()
                    )
                })?;
                options.table = Some(kind);
            }
            "--search" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--search requires a search text"))?;
                options.search = Some(value.as_ref().to_owned());
            }
            "--status" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--status requires a status value or `all`"))?;
                options.status = Some(StatusFilter::parse(value.as_ref()));
            }
            "--sort" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--sort requires a column key"))?;
                options.sort.push(value.as_ref().to_owned());
            }
            "--page" => {
                options.page = Some(parse_positive("--page", iter.next())?);
            }
            "--page-size" => {
                options.page_size = Some(parse_positive("--page-size", iter.next())?);
            }
            "--json" => {
                options.json = true;
            }
            "--raw" => {
                options.raw = true;
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn parse_positive<S: AsRef<str>>(flag: &str, value: Option<S>) -> Result<usize> {
    let value = value.ok_or_else(|| anyhow!("{flag} requires a positive number"))?;
    match value.as_ref().parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(anyhow!(
            "{flag} expects a positive number, got {:?}",
            value.as_ref()
        )),
    }
}

fn print_help() {
    println!("fleetview");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --table <kind>           fleet, tickets or alerts");
    println!("  --records <path>         JSON array of records to show");
    println!("  --demo                   Use the built-in demo data set");
    println!("  --raw                    Show file values as given, without validation");
    println!("  --search <text>          Case-insensitive search over searchable columns");
    println!("  --status <value|all>     Keep only rows with this status");
    println!("  --sort <column>          Activate a column header; repeat to cycle asc/desc/off");
    println!("  --page <n>               Page to show (clamped to the last page)");
    println!("  --page-size <n>          Rows per page");
    println!("  --json                   Print the view as JSON");
    println!("  --check                  Validate config and records, then exit");
    println!("  --help                   Show this help");
}
