//! Reactive chart handlers
//!
//! The two update handlers behind the dashboard: each is a pure function
//! `(table, inputs) -> figure description`, invoked once per UI event by the
//! server. Figures are plain serializable value lists; the browser hands them
//! to Plotly as-is.

use crate::data::LaunchRecord;
use crate::stats;
use serde::Serialize;
use std::collections::BTreeMap;

/// Value of the site dropdown: the sentinel `"ALL"` or an exact site name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    /// Sentinel value the dropdown uses for the all-sites option.
    pub const ALL: &'static str = "ALL";

    pub fn parse(raw: &str) -> Self {
        if raw == Self::ALL {
            SiteSelection::All
        } else {
            SiteSelection::Site(raw.to_string())
        }
    }

    fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => record.launch_site == *name,
        }
    }
}

/// Pie chart description: one label/value pair per slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub labels: Vec<String>,
    pub values: Vec<u32>,
    pub title: String,
}

/// Scatter chart description: parallel per-point columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    /// Payload mass (kg) per point.
    pub x: Vec<f64>,
    /// Outcome class per point.
    pub y: Vec<u8>,
    /// Color category per point (booster version).
    pub color: Vec<String>,
    pub title: String,
}

const SCATTER_TITLE: &str = "Correlation between Payload and Success for All sites";

/// Recompute the success pie chart for a dropdown change.
///
/// For `All`, one slice per site valued by its success count. For a single
/// site, one slice per outcome class present at that site (failures first),
/// valued by row count. A site with no records yields an empty figure.
pub fn success_pie(table: &[LaunchRecord], selection: &SiteSelection) -> PieFigure {
    match selection {
        SiteSelection::All => {
            let counts = stats::success_counts_by_site(table);
            PieFigure {
                labels: counts.iter().map(|c| c.site.clone()).collect(),
                values: counts.iter().map(|c| c.successes).collect(),
                title: "Total Success Launches By Site".to_string(),
            }
        }
        SiteSelection::Site(name) => {
            // Class is 0 or 1, so the BTreeMap order puts the failure slice
            // before the success slice.
            let mut by_class: BTreeMap<u8, u32> = BTreeMap::new();
            for record in table.iter().filter(|r| r.launch_site == *name) {
                *by_class.entry(record.class).or_insert(0) += 1;
            }

            PieFigure {
                labels: by_class.keys().map(|class| class.to_string()).collect(),
                values: by_class.values().copied().collect(),
                title: format!("Total Success Launches for site {}", name),
            }
        }
    }
}

/// Recompute the payload/outcome scatter chart for a dropdown or slider change.
///
/// Both payload bounds are strictly exclusive: a record whose mass equals
/// `low` or `high` is dropped. This matches the slider semantics the
/// dashboard has always had.
pub fn payload_scatter(
    table: &[LaunchRecord],
    selection: &SiteSelection,
    payload_range: (f64, f64),
) -> ScatterFigure {
    let (low, high) = payload_range;
    let points = table
        .iter()
        .filter(|r| low < r.payload_mass_kg && r.payload_mass_kg < high)
        .filter(|r| selection.matches(r));
    scatter_from(points)
}

/// The scatter chart the page first renders: every record, no range filter.
pub fn initial_scatter(table: &[LaunchRecord]) -> ScatterFigure {
    scatter_from(table.iter())
}

fn scatter_from<'a, I>(records: I) -> ScatterFigure
where
    I: Iterator<Item = &'a LaunchRecord>,
{
    let mut figure = ScatterFigure {
        x: vec![],
        y: vec![],
        color: vec![],
        title: SCATTER_TITLE.to_string(),
    };
    for record in records {
        figure.x.push(record.payload_mass_kg);
        figure.y.push(record.class);
        figure.color.push(record.booster_version.clone());
    }
    figure
}
