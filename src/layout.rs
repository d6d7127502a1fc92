//! Static page layout
//!
//! Built once at startup from the loaded table and served to the browser as
//! JSON. Only the two chart regions ever change after this; the dropdown
//! options and slider bounds are fixed for the process lifetime.

use crate::charts::{self, PieFigure, ScatterFigure, SiteSelection};
use crate::data::LaunchRecord;
use crate::stats;
use serde::Serialize;
use std::io;

/// Fixed tick marks on the payload slider, in kg.
pub const SLIDER_MARKS: [u32; 5] = [0, 2500, 5000, 7500, 10000];

/// Slider step, in kg.
pub const SLIDER_STEP: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: u32,
    pub marks: Vec<u32>,
    /// Initial [low, high] selection: the full range.
    pub value: [f64; 2],
}

/// The whole initial page: everything the UI needs to render itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub dropdown: Vec<DropdownOption>,
    pub slider: SliderConfig,
    pub pie: PieFigure,
    pub scatter: ScatterFigure,
}

/// Build the initial page from the loaded table.
///
/// An empty table has no payload range to put under the slider, so it is
/// rejected here rather than serving a dashboard of blank panels.
pub fn build(table: &[LaunchRecord]) -> io::Result<Layout> {
    let (min_payload, max_payload) = stats::payload_range(table).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "dataset contains no launch records")
    })?;

    let mut dropdown = vec![DropdownOption {
        label: "All Sites".to_string(),
        value: SiteSelection::ALL.to_string(),
    }];
    for site in stats::distinct_sites(table) {
        dropdown.push(DropdownOption {
            label: site.clone(),
            value: site,
        });
    }

    Ok(Layout {
        title: "SpaceX Launch Records Dashboard".to_string(),
        dropdown,
        slider: SliderConfig {
            min: min_payload,
            max: max_payload,
            step: SLIDER_STEP,
            marks: SLIDER_MARKS.to_vec(),
            value: [min_payload, max_payload],
        },
        pie: charts::success_pie(table, &SiteSelection::All),
        scatter: charts::initial_scatter(table),
    })
}
