use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::GeoRadiusFilter;
use crate::error::AdvisorError;
use crate::models::{ErrorResponse, HealthResponse, LocationRequest};
use crate::routes::AppState;

/// Configure health and price lookup routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/data")
            .route("/prices_in_radius", web::post().to(prices_in_radius))
            .route("/price_summary", web::post().to(price_summary)),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        price_records: state.prices.len(),
        facility_rules: state.catalog.facility.len(),
        land_rules: state.catalog.land.len(),
    })
}

fn check_location(req: &LocationRequest, max_radius_km: f64) -> Result<(), AdvisorError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for location request: field_errors={:?}", errors);
        return Err(AdvisorError::invalid_argument(errors.to_string()));
    }
    if req.radius > max_radius_km {
        return Err(AdvisorError::invalid_argument(format!(
            "radius {} km exceeds the maximum of {} km",
            req.radius, max_radius_km
        )));
    }
    Ok(())
}

/// Prices within a radius
///
/// POST /data/prices_in_radius
///
/// Request body:
/// ```json
/// { "latitude": 55.75, "longitude": 37.61, "radius": 1.5 }
/// ```
async fn prices_in_radius(
    state: web::Data<AppState>,
    req: web::Json<LocationRequest>,
) -> Result<HttpResponse, AdvisorError> {
    tracing::info!(
        "Received request for prices within radius of {} km from {}, {}",
        req.radius,
        req.latitude,
        req.longitude
    );
    check_location(&req, state.max_radius_km)?;

    let records = GeoRadiusFilter::new(state.prices.records()).find_within_radius(
        req.latitude,
        req.longitude,
        req.radius,
    )?;

    Ok(HttpResponse::Ok().json(records))
}

/// Min / max / mean price per meter within a radius
///
/// POST /data/price_summary
async fn price_summary(
    state: web::Data<AppState>,
    req: web::Json<LocationRequest>,
) -> Result<HttpResponse, AdvisorError> {
    check_location(&req, state.max_radius_km)?;

    let summary = GeoRadiusFilter::new(state.prices.records()).summarize_within_radius(
        req.latitude,
        req.longitude,
        req.radius,
    )?;

    Ok(match summary {
        Some(summary) => HttpResponse::Ok().json(summary),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "no_prices".to_string(),
            message: format!(
                "No prices within {} km of {}, {}",
                req.radius, req.latitude, req.longitude
            ),
            status_code: 404,
        }),
    })
}
