//! End-to-end contract test: CSV ingestion through every store query.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use launchboard_core::{
    load_csv_reader, LaunchRecordStore, PayloadRange, SiteSelection,
};

const DATASET: &str = "\
Flight Number,Launch Site,Payload Mass (kg),Booster Version Category,class
1,CCAFS LC-40,500.0,v1.0,0
2,CCAFS LC-40,2500.0,v1.1,1
3,VAFB SLC-4E,600.0,v1.1,1
4,KSC LC-39A,3500.0,FT,1
5,KSC LC-39A,9600.0,FT,0
6,CCAFS SLC-40,4200.0,B4,1
";

fn store() -> LaunchRecordStore {
    LaunchRecordStore::new(load_csv_reader(DATASET.as_bytes()).expect("fixture must parse"))
}

#[test]
fn test_dataset_shape_survives_ingestion() {
    let store = store();
    assert_eq!(store.len(), 6);
    assert_eq!(
        store.sites(),
        vec!["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
    );
    assert_eq!(store.payload_bounds(), Some((500.0, 9600.0)));
}

#[test]
fn test_all_sites_pie_counts_every_success_once() {
    let counts = store().successes_by_site();
    assert_eq!(counts.len(), 4);
    assert_eq!(counts["CCAFS LC-40"], 1);
    assert_eq!(counts["VAFB SLC-4E"], 1);
    assert_eq!(counts["KSC LC-39A"], 1);
    assert_eq!(counts["CCAFS SLC-40"], 1);
    assert_eq!(counts.values().sum::<usize>(), 4);
}

#[test]
fn test_per_site_pie_accounts_for_every_site_record() {
    let store = store();

    let ksc = store.outcome_counts_for_site("KSC LC-39A");
    assert_eq!(ksc["Success"], 1);
    assert_eq!(ksc["Failure"], 1);

    // One-sided site: a single entry, no explicit zero.
    let vafb = store.outcome_counts_for_site("VAFB SLC-4E");
    assert_eq!(vafb.len(), 1);
    assert_eq!(vafb["Success"], 1);

    assert!(store.outcome_counts_for_site("Boca Chica").is_empty());
}

#[test]
fn test_scatter_filter_honors_range_and_site_together() {
    let store = store();
    let range = PayloadRange::new(600.0, 4200.0);

    let all = store.filter_by_payload_and_site(range, &SiteSelection::All);
    assert_eq!(all.len(), 4);
    assert!(all.iter().all(|r| range.contains(r.payload_mass_kg)));

    let ksc = store.filter_by_payload_and_site(
        range,
        &SiteSelection::from_widget_value("KSC LC-39A"),
    );
    assert_eq!(ksc.len(), 1);
    assert_eq!(ksc[0].payload_mass_kg, 3500.0);
    assert_eq!(ksc[0].booster_version_category, "FT");
}

#[test]
fn test_widget_sentinels_select_the_whole_dataset() {
    let store = store();
    let range = PayloadRange::new(0.0, 10000.0);
    for sentinel in ["ALL", "All Sites"] {
        let selection = SiteSelection::from_widget_value(sentinel);
        let filtered = store.filter_by_payload_and_site(range, &selection);
        assert_eq!(filtered.len(), store.len());
    }
}
