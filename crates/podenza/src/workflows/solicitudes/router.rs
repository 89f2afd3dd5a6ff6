use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{Solicitud, SolicitudId, SolicitudStatus, SolicitudView};
use super::filter::SolicitudFilter;
use super::repository::{RepositoryError, SolicitudRepository};
use super::service::{SolicitudService, SolicitudServiceError, TransitionOutcome};

/// Router builder exposing the solicitudes board, the status catalogue, and
/// the workbench over HTTP.
pub fn solicitud_router<R>(service: Arc<SolicitudService<R>>) -> Router
where
    R: SolicitudRepository + 'static,
{
    Router::new()
        .route("/api/v1/solicitudes", get(list_handler::<R>))
        .route("/api/v1/solicitudes/estados", get(estados_handler))
        .route(
            "/api/v1/solicitudes/estadisticas",
            get(statistics_handler::<R>),
        )
        .route("/api/v1/solicitudes/:solicitud_id", get(detail_handler::<R>))
        .route(
            "/api/v1/solicitudes/:solicitud_id/estado",
            post(change_status_handler::<R>),
        )
        .route(
            "/api/v1/solicitudes/:solicitud_id/workbench",
            get(workbench_handler::<R>),
        )
        .with_state(service)
}

/// Query string of the board listing. Dates arrive as `YYYY-MM-DD`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub desde: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub hasta: Option<NaiveDate>,
}

/// Body of the status change request.
#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    pub estado: String,
}

#[derive(Debug, Serialize)]
struct TransitionResponse {
    solicitud: SolicitudView,
    cambiado: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    anterior: Option<&'static str>,
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<SolicitudService<R>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    R: SolicitudRepository + 'static,
{
    let filter = SolicitudFilter {
        search: query.search,
        desde: query.desde,
        hasta: query.hasta,
    };

    match service.visible(&filter) {
        Ok(solicitudes) => {
            let views: Vec<SolicitudView> = solicitudes.iter().map(Solicitud::to_view).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn estados_handler() -> Response {
    let catalogue = SolicitudStatus::catalogue();
    (StatusCode::OK, axum::Json(catalogue)).into_response()
}

pub(crate) async fn statistics_handler<R>(
    State(service): State<Arc<SolicitudService<R>>>,
) -> Response
where
    R: SolicitudRepository + 'static,
{
    match service.statistics() {
        Ok(statistics) => (StatusCode::OK, axum::Json(statistics.to_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn detail_handler<R>(
    State(service): State<Arc<SolicitudService<R>>>,
    Path(solicitud_id): Path<String>,
) -> Response
where
    R: SolicitudRepository + 'static,
{
    let id = SolicitudId(solicitud_id);
    match service.get(&id) {
        Ok(solicitud) => (StatusCode::OK, axum::Json(solicitud.to_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn change_status_handler<R>(
    State(service): State<Arc<SolicitudService<R>>>,
    Path(solicitud_id): Path<String>,
    axum::Json(request): axum::Json<ChangeStatusRequest>,
) -> Response
where
    R: SolicitudRepository + 'static,
{
    let id = SolicitudId(solicitud_id);
    match service.change_status(&id, &request.estado) {
        Ok(outcome) => {
            let anterior = match &outcome {
                TransitionOutcome::Applied { previous, .. } => Some(previous.id()),
                TransitionOutcome::Unchanged(_) => None,
            };
            let response = TransitionResponse {
                solicitud: outcome.solicitud().to_view(),
                cambiado: outcome.changed(),
                anterior,
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn workbench_handler<R>(
    State(service): State<Arc<SolicitudService<R>>>,
    Path(solicitud_id): Path<String>,
) -> Response
where
    R: SolicitudRepository + 'static,
{
    let id = SolicitudId(solicitud_id);
    match service.workbench(&id) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SolicitudServiceError) -> Response {
    let status = match &error {
        SolicitudServiceError::InvalidStatus { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        SolicitudServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SolicitudServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        SolicitudServiceError::Repository(RepositoryError::Conflict) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    let opt = opt.filter(|value| !value.trim().is_empty());
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
