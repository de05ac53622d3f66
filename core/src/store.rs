//! Immutable launch-record store and its derived-view queries
//!
//! The store owns the dataset loaded once at startup and answers the
//! dashboard's queries as pure reads: success counts per site for the
//! all-sites pie, success/failure counts for a single site's pie, and
//! the payload-and-site filtered record subsequence for the scatter
//! view. Absence of data is always structural (empty map, empty
//! sequence), never an error.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::HashMap;

use log::{debug, warn};

use crate::record::{LaunchRecord, PayloadRange, SiteSelection};

/// Success count per launch site, for the all-sites pie
pub type SiteSuccessCounts = HashMap<String, usize>;

/// Count per outcome label (`"Success"` / `"Failure"`), for one site's
/// pie. A zero count is represented by absence, never by an entry.
pub type OutcomeCounts = HashMap<&'static str, usize>;

/// Records passing the active filters, in original dataset order
pub type FilteredRecords<'a> = Vec<&'a LaunchRecord>;

/// Immutable in-memory launch dataset with pure query operations.
///
/// Constructed once at process start; every query is a pure function of
/// the dataset and its parameters, so repeated calls with identical
/// arguments return equal results and concurrent readers need no
/// locking.
#[derive(Debug, Clone)]
pub struct LaunchRecordStore {
    records: Vec<LaunchRecord>,
}

impl LaunchRecordStore {
    /// Wrap an already-parsed dataset. The store takes ownership and
    /// never mutates it.
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        debug!("launch record store initialized with {} records", records.len());
        Self { records }
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in load order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Sorted, deduplicated site identifiers present in the dataset.
    /// The dashboard's site dropdown is populated from these.
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = self
            .records
            .iter()
            .map(|r| r.launch_site.as_str())
            .collect();
        sites.sort_unstable();
        sites.dedup();
        sites
    }

    /// Minimum and maximum payload mass across the dataset, or `None`
    /// when the dataset is empty. The payload slider's default range is
    /// derived from these bounds.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), mass| {
            (min.min(mass), max.max(mass))
        });
        Some((min, max))
    }

    /// Count successful launches per site.
    ///
    /// Retains only successful records and groups them by launch site.
    /// An empty mapping means no launch in the dataset succeeded; the
    /// rendering collaborator treats that as "no data", not an error.
    pub fn successes_by_site(&self) -> SiteSuccessCounts {
        let mut counts = SiteSuccessCounts::new();
        for record in self.records.iter().filter(|r| r.outcome.is_success()) {
            *counts.entry(record.launch_site.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Count outcomes for a single site, relabeled to the fixed
    /// `"Success"` / `"Failure"` labels.
    ///
    /// An unknown site, or a site with no records, yields an empty
    /// mapping rather than an error. The result never carries a
    /// zero-count entry, so "all successes" is one entry and "no data"
    /// is none.
    pub fn outcome_counts_for_site(&self, site: &str) -> OutcomeCounts {
        let mut counts = OutcomeCounts::new();
        for record in self.records.iter().filter(|r| r.launch_site == site) {
            *counts.entry(record.outcome.label()).or_insert(0) += 1;
        }
        if counts.is_empty() {
            warn!("no launch records for site {site}");
        }
        counts
    }

    /// Records whose payload mass lies inside `range` (inclusive both
    /// ends) and whose site matches `selection`.
    ///
    /// Filter order is unobservable; the result preserves each record's
    /// full field set and original relative ordering. An inverted range
    /// or an unmatched site yields an empty sequence.
    pub fn filter_by_payload_and_site(
        &self,
        range: PayloadRange,
        selection: &SiteSelection,
    ) -> FilteredRecords<'_> {
        self.records
            .iter()
            .filter(|r| range.contains(r.payload_mass_kg))
            .filter(|r| selection.matches(r))
            .collect()
    }
}
