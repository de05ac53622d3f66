//! LAUNCHBOARD core: the filtering and aggregation pipeline
//!
//! Holds an immutable dataset of launch records and answers the
//! dashboard's derived-view queries: success counts per site, outcome
//! counts for one site, and payload/site-filtered record subsequences.
//! Everything here is pure and synchronous; presentation belongs to a
//! rendering collaborator.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod loader;
pub mod record;
pub mod store;

pub use self::loader::{load_csv_path, load_csv_reader, LoadError};
pub use self::record::{LaunchRecord, Outcome, PayloadRange, SiteSelection};
pub use self::store::{FilteredRecords, LaunchRecordStore, OutcomeCounts, SiteSuccessCounts};
