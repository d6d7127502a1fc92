//! HTTP host for the dashboard
//!
//! `launchboard serve data.csv` → starts server, opens browser, renders the
//! dashboard. The page itself is embedded in the binary; the browser fetches
//! the layout once and then drives the two chart handlers through the
//! `/api/pie` and `/api/scatter` endpoints on every dropdown or slider change.

use crate::charts::{self, PieFigure, ScatterFigure, SiteSelection};
use crate::data::LaunchRecord;
use crate::layout::{self, Layout};
use crate::stats;
use serde::{Deserialize, Serialize};
use std::io;
use tiny_http::{Header, Method, Request, Response, Server};

// Embed the UI directly in the binary
const UI_HTML: &str = include_str!("ui.html");

/// Port the dashboard serves on unless overridden.
pub const DEFAULT_PORT: u16 = 8090;

#[derive(Serialize)]
struct ApiResponse<T> {
    ok: bool,
    generated: String,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            ok: true,
            generated: chrono::Local::now().to_rfc3339(),
            data: Some(data),
            error: None,
        }
    }
}

#[derive(Deserialize, Debug)]
struct PieParams {
    #[serde(default = "default_site")]
    site: String,
}

#[derive(Deserialize, Debug)]
struct ScatterParams {
    #[serde(default = "default_site")]
    site: String,
    low: Option<f64>,
    high: Option<f64>,
}

fn default_site() -> String {
    SiteSelection::ALL.to_string()
}

/// Start the server and block handling requests.
///
/// The layout is built once up front; each API request recomputes its figure
/// from the shared read-only table.
pub fn start(port: u16, table: Vec<LaunchRecord>, open_browser: bool) -> io::Result<()> {
    let layout = layout::build(&table)?;

    let addr = format!("127.0.0.1:{}", port);
    let server = Server::http(&addr)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let url = format!("http://localhost:{}", port);
    eprintln!("\n\x1b[1;36m🚀 Launchboard\x1b[0m");
    eprintln!("   {}", url);
    eprintln!("   {} launch records loaded\n", table.len());

    if open_browser {
        let _ = open::that(&url);
    }

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &table, &layout) {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

fn handle_request(
    request: Request,
    table: &[LaunchRecord],
    layout: &Layout,
) -> io::Result<()> {
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("/");
    let query = url.split('?').nth(1).unwrap_or("");
    let method = request.method().clone();

    match (&method, path) {
        // Serve embedded UI
        (&Method::Get, "/") => respond_html(request, UI_HTML),

        // API: static page structure
        (&Method::Get, "/api/layout") => respond_json(request, &ApiResponse::success(layout)),

        // API: success pie chart
        (&Method::Get, "/api/pie") => {
            let params: PieParams = serde_urlencoded::from_str(query)
                .unwrap_or(PieParams { site: default_site() });
            let figure = pie_for(table, &params);
            respond_json(request, &ApiResponse::success(figure))
        }

        // API: payload/outcome scatter chart
        (&Method::Get, "/api/scatter") => {
            let params: ScatterParams = serde_urlencoded::from_str(query).unwrap_or(ScatterParams {
                site: default_site(),
                low: None,
                high: None,
            });
            let figure = scatter_for(table, &params);
            respond_json(request, &ApiResponse::success(figure))
        }

        // 404
        _ => {
            let response = Response::from_string("Not found").with_status_code(404);
            request.respond(response)
        }
    }
}

fn pie_for(table: &[LaunchRecord], params: &PieParams) -> PieFigure {
    charts::success_pie(table, &SiteSelection::parse(&params.site))
}

fn scatter_for(table: &[LaunchRecord], params: &ScatterParams) -> ScatterFigure {
    // Missing bounds fall back to the table's full payload range.
    let (table_min, table_max) = stats::payload_range(table).unwrap_or((0.0, 0.0));
    let low = params.low.unwrap_or(table_min);
    let high = params.high.unwrap_or(table_max);

    charts::payload_scatter(table, &SiteSelection::parse(&params.site), (low, high))
}

fn respond_html(request: Request, html: &str) -> io::Result<()> {
    let response = Response::from_string(html)
        .with_header(Header::from_bytes(&b"Content-Type"[..], &b"text/html"[..]).unwrap());
    request.respond(response)
}

fn respond_json<T: Serialize>(request: Request, payload: &T) -> io::Result<()> {
    let json = serde_json::to_string(payload)?;
    let response = Response::from_string(json)
        .with_header(Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap());
    request.respond(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // REQUEST PARAMETER TESTS
    // ==========================================================================
    //
    // The query-string types are the host's only parsing surface; everything
    // past them is the pure handlers. Missing parameters fall back to ALL
    // sites and the full payload range.
    // ==========================================================================

    fn record(site: &str, mass: f64, class: u8, booster: &str) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: mass,
            class,
            booster_version: booster.to_string(),
        }
    }

    fn sample_table() -> Vec<LaunchRecord> {
        vec![
            record("SiteA", 100.0, 1, "v1"),
            record("SiteA", 200.0, 0, "v2"),
            record("SiteB", 150.0, 1, "v1"),
        ]
    }

    #[test]
    fn test_pie_params_default_to_all() {
        let params: PieParams = serde_urlencoded::from_str("").unwrap();
        assert_eq!(params.site, "ALL");
    }

    #[test]
    fn test_pie_params_site_with_spaces() {
        let params: PieParams = serde_urlencoded::from_str("site=KSC%20LC-39A").unwrap();
        assert_eq!(params.site, "KSC LC-39A");
    }

    #[test]
    fn test_scatter_params_full() {
        let params: ScatterParams =
            serde_urlencoded::from_str("site=SiteA&low=250&high=7500.5").unwrap();
        assert_eq!(params.site, "SiteA");
        assert_eq!(params.low, Some(250.0));
        assert_eq!(params.high, Some(7500.5));
    }

    #[test]
    fn test_scatter_missing_bounds_use_table_range() {
        let table = sample_table();
        let params = ScatterParams {
            site: default_site(),
            low: None,
            high: None,
        };

        let figure = scatter_for(&table, &params);
        // Full range is exclusive on both ends, so the extremes drop out.
        assert_eq!(figure.x, vec![150.0]);
    }

    #[test]
    fn test_pie_for_dispatches_on_site() {
        let table = sample_table();

        let all = pie_for(&table, &PieParams { site: "ALL".to_string() });
        assert_eq!(all.labels, vec!["SiteA", "SiteB"]);

        let single = pie_for(&table, &PieParams { site: "SiteA".to_string() });
        assert_eq!(single.labels, vec!["0", "1"]);
    }

    #[test]
    fn test_ui_html_is_embedded() {
        assert!(UI_HTML.contains("plotly"));
        assert!(UI_HTML.contains("site-dropdown"));
        assert!(UI_HTML.contains("payload-slider"));
    }
}
