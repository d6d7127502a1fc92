//! Aggregate views over the launch table
//!
//! Pure functions recomputed on demand; nothing here holds state. The site
//! list and success counts only consider successful launches, which mirrors
//! the dashboard's dropdown: a site that never landed a success is not
//! selectable.

use crate::data::LaunchRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Success count for one launch site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteCount {
    pub site: String,
    pub successes: u32,
}

/// Distinct launch sites with at least one successful launch, sorted.
pub fn distinct_sites(table: &[LaunchRecord]) -> Vec<String> {
    let mut sites: Vec<String> = table
        .iter()
        .filter(|r| r.is_success())
        .map(|r| r.launch_site.clone())
        .collect();
    sites.sort();
    sites.dedup();
    sites
}

/// Successful launches grouped by site, in sorted site order.
pub fn success_counts_by_site(table: &[LaunchRecord]) -> Vec<SiteCount> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for record in table.iter().filter(|r| r.is_success()) {
        *counts.entry(record.launch_site.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(site, successes)| SiteCount {
            site: site.to_string(),
            successes,
        })
        .collect()
}

/// (min, max) payload mass over the whole table, `None` if the table is empty.
pub fn payload_range(table: &[LaunchRecord]) -> Option<(f64, f64)> {
    let mut range: Option<(f64, f64)> = None;
    for record in table {
        let mass = record.payload_mass_kg;
        range = Some(match range {
            None => (mass, mass),
            Some((min, max)) => (min.min(mass), max.max(mass)),
        });
    }
    range
}
