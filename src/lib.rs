//! Launchboard - Interactive SpaceX launch records dashboard
//!
//! Launchboard loads a fixed CSV of historical SpaceX launch attempts and
//! serves a small interactive dashboard over local HTTP: a launch-site
//! dropdown, a pie chart of success counts, a payload-mass range slider, and
//! a scatter plot correlating payload mass with launch outcome.
//!
//! # How It Works
//!
//! The table is loaded once at startup and is read-only for the process
//! lifetime. Every view is recomputed on demand from it:
//!
//! 1. **Aggregates** ([`stats`]): distinct sites, per-site success counts,
//!    payload min/max.
//! 2. **Chart handlers** ([`charts`]): pure functions
//!    `(table, inputs) -> figure description`, one per chart, invoked on
//!    every dropdown or slider change.
//! 3. **Layout** ([`layout`]): the static page description built once from
//!    the aggregates.
//! 4. **Host** ([`serve`]): a local HTTP server with the page embedded in
//!    the binary; the browser renders figures with Plotly.
//!
//! # Quick Start
//!
//! ```no_run
//! use launchboard::{charts, load_table, SiteSelection};
//!
//! let table = load_table("spacex_launch_dash.csv").expect("dataset");
//!
//! let pie = charts::success_pie(&table, &SiteSelection::All);
//! println!("{} sites with successful launches", pie.labels.len());
//!
//! let scatter = charts::payload_scatter(&table, &SiteSelection::All, (0.0, 10000.0));
//! println!("{} launches in range", scatter.x.len());
//! ```
//!
//! # Modules
//!
//! - [`data`]: CSV loading into the immutable launch table
//! - [`stats`]: aggregate views over the table
//! - [`charts`]: the two reactive chart-update handlers
//! - [`layout`]: static page structure
//! - [`serve`]: HTTP host and JSON API

pub mod charts;
pub mod data;
pub mod layout;
pub mod serve;
pub mod stats;

pub use charts::{PieFigure, ScatterFigure, SiteSelection};
pub use data::{load_table, read_table, LaunchRecord, REQUIRED_COLUMNS};
pub use layout::Layout;
pub use stats::SiteCount;
