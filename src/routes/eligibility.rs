use actix_web::{web, HttpResponse, Responder};

use crate::core::EligibilityEvaluator;
use crate::error::AdvisorError;
use crate::models::{CriteriaResponse, EligibilityResponse, FacilitySubmission, LandSubmission};
use crate::routes::AppState;

/// Configure eligibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/eligibility")
            .route("/criteria/facility", web::get().to(facility_criteria))
            .route("/criteria/land", web::get().to(land_criteria))
            .route("/check/facility", web::post().to(check_facility))
            .route("/check/land", web::post().to(check_land)),
    );
}

async fn facility_criteria(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CriteriaResponse {
        eligibility_criteria: state.catalog.facility.as_slice(),
    })
}

async fn land_criteria(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(CriteriaResponse {
        eligibility_criteria: state.catalog.land.as_slice(),
    })
}

/// Check premises against facility rules
///
/// POST /eligibility/check/facility
///
/// Request body:
/// ```json
/// {
///   "total_area": 120,
///   "floor": 1,
///   "ceiling_height": 3.2,
///   "utilities": true,
///   "expected_visitors": false
/// }
/// ```
async fn check_facility(
    state: web::Data<AppState>,
    req: web::Json<FacilitySubmission>,
) -> Result<HttpResponse, AdvisorError> {
    tracing::info!("Checking eligibility for facility: {:?}", req);
    let eligible = EligibilityEvaluator::new(&state.catalog).evaluate_facility(&req)?;

    let response = EligibilityResponse::new(eligible);
    tracing::info!("Eligible categories: {:?}", response.by_category);
    Ok(HttpResponse::Ok().json(response))
}

/// Check a land parcel against land rules
///
/// POST /eligibility/check/land
async fn check_land(
    state: web::Data<AppState>,
    req: web::Json<LandSubmission>,
) -> Result<HttpResponse, AdvisorError> {
    tracing::info!("Checking eligibility for land: {:?}", req);
    let eligible = EligibilityEvaluator::new(&state.catalog).evaluate_land(&req)?;

    let response = EligibilityResponse::new(eligible);
    tracing::info!("Eligible categories: {:?}", response.by_category);
    Ok(HttpResponse::Ok().json(response))
}
