use std::sync::Arc;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::info;

use vigil_core::alerts::{ProximityAlertEngine, DEFAULT_ALERT_RADIUS_METERS};
use vigil_core::geo::GeoPoint;

use vigil_server::store::HazardStore;
use vigil_server::web::{self, AppState};

#[derive(Parser, Debug)]
#[command(name = "vigil-server", version, about = "Civic hazard proximity alert server")]
struct Args {
    /// Interface address to bind
    #[arg(long, default_value = "0.0.0.0")]
    address: String,

    /// Port to listen on
    #[arg(long, default_value_t = 6503)]
    port: u16,

    /// Default alert radius in meters
    #[arg(long, default_value_t = DEFAULT_ALERT_RADIUS_METERS)]
    radius: f64,

    /// Station latitude, used when requests omit coordinates
    #[arg(long, requires = "longitude")]
    latitude: Option<f64>,

    /// Station longitude, used when requests omit coordinates
    #[arg(long, requires = "latitude")]
    longitude: Option<f64>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let engine = ProximityAlertEngine::new(args.radius)?;
    let station = match (args.latitude, args.longitude) {
        (Some(latitude), Some(longitude)) => Some(GeoPoint::new(latitude, longitude)?),
        _ => None,
    };

    let store = Arc::new(HazardStore::with_demo_data());
    let (reports, discussions, updates) = store.counts().await;
    info!(
        "serving {} reports, {} discussions, {} updates; alert radius {} m",
        reports,
        discussions,
        updates,
        engine.threshold_meters()
    );

    let app = web::router(AppState {
        store,
        engine,
        station,
    });

    let bind = format!("{}:{}", args.address, args.port);
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("listening on http://{}", bind);
    axum::serve(listener, app).await?;

    Ok(())
}
