//! Dashboard snapshot tool
//!
//! Loads a launch dataset and prints the pie and scatter figures for
//! one site/payload selection as JSON, standing in for the interactive
//! rendering collaborator.
//!
//! Usage: launchboard-snapshot <dataset.csv> [site] [low] [high]
//! Site defaults to the ALL sentinel; the payload range defaults to the
//! dataset's own bounds, the way the dashboard slider initializes.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::env;
use std::process::ExitCode;

use log::{error, info};
use serde::Serialize;

use launchboard_core::{load_csv_path, LaunchRecordStore, PayloadRange, SiteSelection};
use launchboard_viz::{pie, scatter, PieFigure, ScatterFigure};

#[derive(Serialize)]
struct Snapshot {
    site: String,
    payload_range: (f64, f64),
    pie: PieFigure,
    scatter: ScatterFigure,
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("usage: launchboard-snapshot <dataset.csv> [site] [low] [high]");
        return ExitCode::FAILURE;
    };

    let records = match load_csv_path(path) {
        Ok(records) => records,
        Err(err) => {
            error!("{err}");
            eprintln!("launchboard-snapshot: {err}");
            return ExitCode::FAILURE;
        }
    };
    let store = LaunchRecordStore::new(records);

    let selection = args
        .get(1)
        .map(|s| SiteSelection::from_widget_value(s))
        .unwrap_or(SiteSelection::All);

    let bounds = store.payload_bounds().unwrap_or((0.0, 0.0));
    let low = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(bounds.0);
    let high = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(bounds.1);
    let range = PayloadRange::new(low, high);

    info!(
        "snapshot for {selection}, payload range {low}..{high} kg over {} records",
        store.len()
    );

    let snapshot = Snapshot {
        site: selection.to_string(),
        payload_range: (low, high),
        pie: pie::success_pie(&store, &selection),
        scatter: scatter::payload_outcome(&store, range, &selection),
    };

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("failed to serialize snapshot: {err}");
            ExitCode::FAILURE
        }
    }
}
