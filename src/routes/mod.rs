// Route exports
pub mod data;
pub mod eligibility;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use std::sync::Arc;

use crate::error::AdvisorError;
use crate::models::{ErrorResponse, PriceDataset, RuleCatalog};

/// Application state shared across all handlers
///
/// Both tables are loaded once before the server starts and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub prices: Arc<PriceDataset>,
    pub catalog: Arc<RuleCatalog>,
    pub max_radius_km: f64,
}

impl AppState {
    pub fn new(prices: PriceDataset, catalog: RuleCatalog, max_radius_km: f64) -> Self {
        Self {
            prices: Arc::new(prices),
            catalog: Arc::new(catalog),
            max_radius_km,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(data::configure)
        .configure(eligibility::configure);
}

impl ResponseError for AdvisorError {
    fn status_code(&self) -> StatusCode {
        match self {
            AdvisorError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AdvisorError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AdvisorError::DataUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// JSON extractor config: undecodable bodies become validation errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    AdvisorError::validation(format!("Invalid JSON: {}", err)).into()
}
