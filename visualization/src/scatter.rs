//! Scatter figure builder
//!
//! Shapes the payload-vs-outcome scatter view from the store's filter
//! query. Points keep the booster version category for coloring and the
//! launch site for hover data, exactly as filtered records carry them.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use launchboard_core::{LaunchRecordStore, PayloadRange, SiteSelection};

use crate::figure::{ScatterFigure, ScatterPoint};

/// Build the scatter figure for the active payload range and site
/// selection. An empty point set is a valid figure, not an error.
pub fn payload_outcome(
    store: &LaunchRecordStore,
    range: PayloadRange,
    selection: &SiteSelection,
) -> ScatterFigure {
    let points = store
        .filter_by_payload_and_site(range, selection)
        .into_iter()
        .map(|record| ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome_class: record.outcome.class(),
            booster_version_category: record.booster_version_category.clone(),
            launch_site: record.launch_site.clone(),
        })
        .collect();

    let title = match selection {
        SiteSelection::All => "Payload vs. Outcome for All Sites".to_string(),
        SiteSelection::Site(site) => format!("Payload vs. Outcome for Site {site}"),
    };

    ScatterFigure { title, points }
}
