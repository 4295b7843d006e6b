use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::catalog::SchemeCatalog;
use crate::eligibility::{Profile, Scheme};
use crate::service::{EligibilityService, EligibilityServiceError};

/// Body for a single-scheme check.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub profile: Profile,
    pub scheme_id: String,
}

/// Body for a batch check. Without `schemes` the whole catalog is used.
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub profile: Profile,
    #[serde(default)]
    pub schemes: Option<Vec<Scheme>>,
}

/// Router builder exposing the eligibility and catalog endpoints.
pub fn eligibility_router<C>(service: Arc<EligibilityService<C>>) -> Router
where
    C: SchemeCatalog + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/check", post(check_handler::<C>))
        .route("/api/v1/eligibility/batch", post(batch_handler::<C>))
        .route("/api/v1/schemes", get(list_schemes_handler::<C>))
        .route("/api/v1/schemes/:scheme_id", get(scheme_handler::<C>))
        .with_state(service)
}

pub(crate) async fn check_handler<C>(
    State(service): State<Arc<EligibilityService<C>>>,
    Json(request): Json<CheckRequest>,
) -> Response
where
    C: SchemeCatalog + 'static,
{
    match service.check(&request.profile, &request.scheme_id) {
        Ok(evaluation) => (StatusCode::OK, Json(evaluation)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn batch_handler<C>(
    State(service): State<Arc<EligibilityService<C>>>,
    Json(request): Json<BatchRequest>,
) -> Response
where
    C: SchemeCatalog + 'static,
{
    let result = match request.schemes {
        Some(schemes) => Ok(service.check_candidates(&request.profile, &schemes)),
        None => service.check_batch(&request.profile),
    };

    match result {
        Ok(batch) => (StatusCode::OK, Json(batch)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_schemes_handler<C>(
    State(service): State<Arc<EligibilityService<C>>>,
) -> Response
where
    C: SchemeCatalog + 'static,
{
    match service.schemes() {
        Ok(schemes) => (StatusCode::OK, Json(schemes)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn scheme_handler<C>(
    State(service): State<Arc<EligibilityService<C>>>,
    Path(scheme_id): Path<String>,
) -> Response
where
    C: SchemeCatalog + 'static,
{
    match service.scheme(&scheme_id) {
        Ok(scheme) => (StatusCode::OK, Json(scheme)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: EligibilityServiceError) -> Response {
    let status = match &error {
        EligibilityServiceError::SchemeNotFound(_) => StatusCode::NOT_FOUND,
        EligibilityServiceError::Catalog(_) => {
            warn!(%error, "catalog failure while serving eligibility request");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
