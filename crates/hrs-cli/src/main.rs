// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use hrs_app::{
    AppState, InventoryTable, InventoryTotals, InventoryView, PRICE_COLUMNS, micros_to_cents,
    table_model,
};
use hrs_data::Catalog;
use hrs_tui::UiOptions;
use runtime::CatalogRuntime;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
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
            "load config {}; run `hrs --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let log_path = config.log_path()?;
    logging::init(&log_path, &config.log_level())?;
    tracing::info!(
        config = %options.config_path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "hrs starting"
    );

    let catalog = Catalog::load(&config.sources()).with_context(|| {
        format!(
            "load datasets configured in {}",
            options.config_path.display()
        )
    })?;

    if options.check_only {
        println!("config: {}", options.config_path.display());
        println!("log: {}", log_path.display());
        println!("{}", catalog.summary());
        return Ok(());
    }

    if let Some(query) = &options.search {
        let show_prices = options.prices || config.show_prices();
        print!(
            "{}",
            search_output(&catalog, query, show_prices, options.json)?
        );
        return Ok(());
    }

    let mut state = AppState::with_start_tab(config.start_tab());
    let mut runtime = CatalogRuntime::new(&catalog);
    hrs_tui::run_app(
        &mut state,
        &mut runtime,
        UiOptions {
            show_prices: config.show_prices(),
            faq_limit: config.faq_limit(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    check_only: bool,
    search: Option<String>,
    prices: bool,
    json: bool,
    show_help: bool,
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
        search: None,
        prices: false,
        json: false,
        show_help: false,
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
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--search" => {
                let value = iter.next().ok_or_else(|| {
                    anyhow!("--search requires a query; pass \"\" to list every item")
                })?;
                options.search = Some(value.as_ref().to_owned());
            }
            "--prices" => {
                options.prices = true;
            }
            "--json" => {
                options.json = true;
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

    if options.search.is_none() && (options.prices || options.json) {
        bail!("--prices and --json only apply to --search <query>");
    }

    Ok(options)
}

fn print_help() {
    println!("hrs - Home Renovation Solutions showroom");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --check                  Validate config + datasets and print a summary");
    println!("  --search <query>         Print matching inventory and exit");
    println!("  --prices                 Include cost, list price, and totals in --search");
    println!("  --json                   Print --search results as JSON");
    println!("  --help                   Show this help");
}

#[derive(Debug, Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    match_count: usize,
    total_count: usize,
    prices_visible: bool,
    columns: &'a [&'static str],
    rows: &'a [Vec<String>],
    #[serde(skip_serializing_if = "Option::is_none")]
    totals: Option<SearchTotals>,
}

/// Filtered totals rounded to whole cents once, after summing.
#[derive(Debug, Serialize)]
struct SearchTotals {
    cost_cents: i64,
    list_price_cents: i64,
}

impl From<InventoryTotals> for SearchTotals {
    fn from(totals: InventoryTotals) -> Self {
        Self {
            cost_cents: micros_to_cents(totals.cost_micros),
            list_price_cents: micros_to_cents(totals.list_price_micros),
        }
    }
}

fn search_output(catalog: &Catalog, query: &str, show_prices: bool, json: bool) -> Result<String> {
    let mut view = InventoryView::new(catalog.inventory(), show_prices);
    view.set_query_text(query);
    let snapshot = view.snapshot();
    let table = table_model(&snapshot);

    if json {
        let report = SearchReport {
            query,
            match_count: view.match_count(),
            total_count: view.total_count(),
            prices_visible: show_prices,
            columns: &table.columns,
            rows: &table.rows,
            totals: show_prices.then(|| view.totals().into()),
        };
        let mut encoded =
            serde_json::to_string_pretty(&report).context("encode search results as JSON")?;
        encoded.push('\n');
        return Ok(encoded);
    }

    let mut output = format_plain_table(&table);
    output.push_str(&format!(
        "{} of {} items\n",
        view.match_count(),
        view.total_count()
    ));
    Ok(output)
}

fn format_plain_table(table: &InventoryTable) -> String {
    let mut lines = table.rows.clone();
    if let Some(totals) = &table.totals {
        lines.push(vec![
            String::new(),
            String::new(),
            String::new(),
            totals.label.to_owned(),
            totals.cost.clone(),
            totals.list_price.clone(),
        ]);
    }

    let widths = table
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            lines
                .iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([column.chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();
    let right_aligned = |index: usize| {
        table
            .columns
            .get(index)
            .is_some_and(|column| PRICE_COLUMNS.contains(column))
    };

    let format_row = |cells: &[String]| {
        let padded = cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let width = widths.get(index).copied().unwrap_or(0);
                if right_aligned(index) {
                    format!("{cell:>width$}")
                } else {
                    format!("{cell:<width$}")
                }
            })
            .collect::<Vec<_>>();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let header = table
        .columns
        .iter()
        .map(|column| (*column).to_owned())
        .collect::<Vec<_>>();
    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>();

    let mut output = format_row(&header);
    output.push_str(&format_row(&rule));
    for line in &lines {
        output.push_str(&format_row(line));
    }
    output
}
