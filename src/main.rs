//! Kinship - genealogical statistics over in-memory person records.
//!
//! # Modes
//!
//! - `serve` (default): load the collection and expose every query over HTTP
//! - `print`: load the collection, print everyone with their children as
//!   pretty JSON, and exit
//!
//! # Configuration
//!
//! - `KINSHIP_DATA_PATH`: JSON file with the person records (default: `people.json`)
//! - `KINSHIP_PORT`: HTTP port (default: 3000)
//! - `KINSHIP_MODE`: `serve` or `print`
//!
//! # API Endpoints
//!
//! - `GET /people` and `GET /people/{names,lifespans,life-durations,centuries,children}`
//! - `GET /people/women-died-before?year=` and `GET /people/lived-at-least?age=`
//! - `GET /people/sorted?by=name|born|died|age`
//! - `GET /people/:name/children` and `GET /people/:name/father`
//! - `GET /health` - Health check

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::bail;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use kinship::api::{AppState, router};
use kinship::family::with_children;
use kinship::loader::load_file;

/// Default port if not specified via environment variable.
const DEFAULT_PORT: u16 = 3000;

/// Default data file if not specified via environment variable.
const DEFAULT_DATA_PATH: &str = "people.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("kinship=info".parse()?))
        .init();

    // Load configuration from environment
    let port: u16 = env::var("KINSHIP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let data_path = PathBuf::from(
        env::var("KINSHIP_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string()),
    );

    let mode = env::var("KINSHIP_MODE").unwrap_or_else(|_| "serve".to_string());

    let people = load_file(&data_path)?;

    match mode.as_str() {
        "print" => {
            let enriched = with_children(&people);
            println!("{}", serde_json::to_string_pretty(&enriched)?);
            Ok(())
        }
        "serve" => {
            let app = router(AppState::new(people)).layer(TraceLayer::new_for_http());

            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            let listener = TcpListener::bind(addr).await?;

            info!(%addr, data_path = %data_path.display(), "Kinship is listening");

            axum::serve(listener, app).await?;
            Ok(())
        }
        other => bail!("unknown KINSHIP_MODE `{other}`, expected `serve` or `print`"),
    }
}
