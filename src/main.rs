use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use realty_advisor::config::{LoggingSettings, Settings};
use realty_advisor::routes::{self, AppState};
use realty_advisor::services::{load_catalog, load_prices};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default().with_env_overrides());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging.clone().with_env_overrides());
    info!("Starting Realty Advisor service...");

    // Both tables are loaded once; refuse to start without them
    let prices = load_prices(&settings.data.prices_path).map_err(|e| {
        error!("Failed to load price dataset: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;
    let catalog = load_catalog(&settings.data.catalog_path).map_err(|e| {
        error!("Failed to load rule catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!(
        "Loaded {} price records, {} facility rules, {} land rules",
        prices.len(),
        catalog.facility.len(),
        catalog.land.len()
    );

    let app_state = AppState::new(prices, catalog, settings.search.max_radius_km);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
