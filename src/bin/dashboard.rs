//! AWS Lambda HTTP handler serving the dashboard projection as JSON
//!
//! Records are read from `WEALTH_DATA_DIR` (default `data`) on every request.
//! Query parameters `start_year`, `start_age` and `years` override the
//! default horizon. A missing monthly record projects with zero savings.

use std::path::PathBuf;

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use log::{error, info};
use serde_json::json;

use wealth_projection::records::load_store;
use wealth_projection::report::DashboardView;
use wealth_projection::ProjectionConfig;

const DATA_DIR_VAR: &str = "WEALTH_DATA_DIR";

fn data_dir() -> PathBuf {
    std::env::var_os(DATA_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Apply query overrides to the default horizon
fn config_from_query(
    start_year: Option<&str>,
    start_age: Option<&str>,
    years: Option<&str>,
) -> Result<ProjectionConfig, String> {
    let mut config = ProjectionConfig::default();
    if let Some(value) = start_year {
        config.start_year = value.parse().map_err(|_| format!("invalid start_year '{}'", value))?;
    }
    if let Some(value) = start_age {
        config.start_age = value.parse().map_err(|_| format!("invalid start_age '{}'", value))?;
    }
    if let Some(value) = years {
        config.num_years = value.parse().map_err(|_| format!("invalid years '{}'", value))?;
    }
    Ok(config)
}

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?;
    Ok(response)
}

async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let params = event.query_string_parameters();
    let config = match config_from_query(
        params.first("start_year"),
        params.first("start_age"),
        params.first("years"),
    ) {
        Ok(config) => config,
        Err(message) => return json_response(400, json!({ "error": message }).to_string()),
    };

    let dir = data_dir();
    let view = load_store(&dir).and_then(|mut store| DashboardView::from_store(&mut store, config));

    match view {
        Ok(view) => {
            info!("served projection of {} years", view.report_data.len());
            json_response(200, serde_json::to_string(&view)?)
        }
        Err(wealth_projection::Error::InvalidConfig(message)) => {
            json_response(400, json!({ "error": message }).to_string())
        }
        Err(e) => {
            error!("projection failed for {}: {}", dir.display(), e);
            json_response(500, json!({ "error": e.to_string() }).to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
