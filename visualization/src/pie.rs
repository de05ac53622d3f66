//! Pie figure builders
//!
//! Shape the two success pies of the dashboard from store queries: the
//! all-sites pie of successful launches per site, and the per-site
//! success/failure pie. The empty-mapping contract of the core is
//! resolved here into the explicit "No Data" placeholder figure.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::debug;

use launchboard_core::{LaunchRecordStore, SiteSelection};

use crate::figure::{PieFigure, PieSegment};

/// Title of the all-sites success pie
const ALL_SITES_TITLE: &str = "Total Successful Launches by Site";

/// Build the pie for the given site selection: the all-sites success
/// breakdown for [`SiteSelection::All`], the success/failure breakdown
/// otherwise.
pub fn success_pie(store: &LaunchRecordStore, selection: &SiteSelection) -> PieFigure {
    match selection {
        SiteSelection::All => success_by_site(store),
        SiteSelection::Site(site) => outcomes_for_site(store, site),
    }
}

/// The "ALL sites" pie: one segment per site, weighted by successful
/// launch count. Sites with no successes contribute no segment.
pub fn success_by_site(store: &LaunchRecordStore) -> PieFigure {
    let counts = store.successes_by_site();
    if counts.is_empty() {
        return PieFigure::placeholder(ALL_SITES_TITLE);
    }

    let mut segments: Vec<PieSegment> = counts
        .into_iter()
        .map(|(label, value)| PieSegment { label, value })
        .collect();
    // Label-sorted for stable snapshot output; segment order carries no
    // meaning in the contract.
    segments.sort_by(|a, b| a.label.cmp(&b.label));

    PieFigure {
        title: ALL_SITES_TITLE.to_string(),
        segments,
    }
}

/// The per-site pie: success vs failure counts for one site. An
/// unknown or empty site yields the placeholder figure.
pub fn outcomes_for_site(store: &LaunchRecordStore, site: &str) -> PieFigure {
    let counts = store.outcome_counts_for_site(site);
    if counts.is_empty() {
        debug!("substituting no-data pie for site {site}");
        return PieFigure::placeholder(format!("No launch data for site {site}"));
    }

    let mut segments: Vec<PieSegment> = counts
        .into_iter()
        .map(|(label, value)| PieSegment {
            label: label.to_string(),
            value,
        })
        .collect();
    segments.sort_by(|a, b| a.label.cmp(&b.label));

    PieFigure {
        title: format!("Success vs Failure for site {site}"),
        segments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchboard_core::{LaunchRecord, Outcome};

    fn record(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: "FT".to_string(),
            outcome,
        }
    }

    fn store() -> LaunchRecordStore {
        LaunchRecordStore::new(vec![
            record("KSC LC-39A", 3500.0, Outcome::Success),
            record("CCAFS LC-40", 500.0, Outcome::Failure),
            record("CCAFS LC-40", 2500.0, Outcome::Success),
            record("KSC LC-39A", 9600.0, Outcome::Success),
        ])
    }

    #[test]
    fn test_all_sites_pie_segments_sorted_by_label() {
        let figure = success_by_site(&store());
        assert_eq!(figure.title, "Total Successful Launches by Site");
        let labels: Vec<&str> = figure.segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(figure.segments[0].value, 1);
        assert_eq!(figure.segments[1].value, 2);
    }

    #[test]
    fn test_all_sites_pie_placeholder_when_nothing_succeeded() {
        let store = LaunchRecordStore::new(vec![record("A", 100.0, Outcome::Failure)]);
        assert!(success_by_site(&store).is_placeholder());
    }

    #[test]
    fn test_per_site_pie_relabels_outcomes() {
        let figure = outcomes_for_site(&store(), "CCAFS LC-40");
        assert_eq!(figure.title, "Success vs Failure for site CCAFS LC-40");
        let labels: Vec<&str> = figure.segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Failure", "Success"]);
    }

    #[test]
    fn test_unknown_site_gets_placeholder_not_error() {
        let figure = outcomes_for_site(&store(), "Boca Chica");
        assert!(figure.is_placeholder());
        assert_eq!(figure.title, "No launch data for site Boca Chica");
    }

    #[test]
    fn test_all_success_site_is_distinguishable_from_no_data() {
        let figure = outcomes_for_site(&store(), "KSC LC-39A");
        assert!(!figure.is_placeholder());
        assert_eq!(figure.segments.len(), 1);
        assert_eq!(figure.segments[0].label, "Success");
        assert_eq!(figure.segments[0].value, 2);
    }

    #[test]
    fn test_selection_dispatch() {
        let store = store();
        assert_eq!(
            success_pie(&store, &SiteSelection::All),
            success_by_site(&store)
        );
        assert_eq!(
            success_pie(&store, &SiteSelection::Site("KSC LC-39A".to_string())),
            outcomes_for_site(&store, "KSC LC-39A")
        );
    }
}
