use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use podenza::error::AppError;
use podenza::workflows::solicitudes::{
    solicitud_router, SolicitudRepository, SolicitudService, SolicitudStatistics, SolicitudView,
    StatisticsView,
};
use podenza::workflows::vitrina::VitrinaImporter;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct VitrinaPreviewRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct VitrinaPreviewResponse {
    pub(crate) total: usize,
    pub(crate) estadisticas: StatisticsView,
    pub(crate) solicitudes: Vec<SolicitudView>,
}

pub(crate) fn with_solicitud_routes<R>(service: Arc<SolicitudService<R>>) -> axum::Router
where
    R: SolicitudRepository + 'static,
{
    solicitud_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/vitrina/importar",
            axum::routing::post(vitrina_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Parses a vitrina export without touching the live store, answering with the
/// statistics and listings the board would show after an import.
pub(crate) async fn vitrina_preview_endpoint(
    Json(payload): Json<VitrinaPreviewRequest>,
) -> Result<Json<VitrinaPreviewResponse>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let records = VitrinaImporter::from_reader(reader)?;

    let estadisticas = SolicitudStatistics::aggregate(&records).to_view();
    let solicitudes: Vec<SolicitudView> =
        records.iter().map(|solicitud| solicitud.to_view()).collect();

    Ok(Json(VitrinaPreviewResponse {
        total: records.len(),
        estadisticas,
        solicitudes,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;

    const EXPORT: &str = concat!(
        "ID,Cedula,Cliente,Asesor,Afiliado,Vitrina,Banco,Monto,Estado,Fecha,Producto\n",
        "SOL-2025-101,1010101010,Comercial Andina SAS,Carlos Gómez,Sí,Vitrina Norte,Bancolombia,\"$30,000,000\",viabilidad,2025-02-03,Crédito Empresarial\n",
        "SOL-2025-102,2020202020,Pedro Salazar,Ana Rodríguez,No,Vitrina Sur,Davivienda,\"$9,500,000\",aprobado,2025-02-04,Crédito Personal\n",
    );

    #[tokio::test]
    async fn vitrina_preview_endpoint_summarises_the_export() {
        let request = VitrinaPreviewRequest {
            csv: EXPORT.to_string(),
        };

        let Json(body) = vitrina_preview_endpoint(Json(request))
            .await
            .expect("preview builds");

        assert_eq!(body.total, 2);
        assert_eq!(body.estadisticas.total, 2);
        assert_eq!(body.estadisticas.viabilidad, 1);
        assert_eq!(body.estadisticas.aprobado, 1);
        assert_eq!(body.solicitudes[0].cliente, "Comercial Andina SAS");
        assert_eq!(body.solicitudes[1].estado.label, "Aprobado");
    }

    #[tokio::test]
    async fn vitrina_preview_endpoint_rejects_unknown_statuses() {
        let request = VitrinaPreviewRequest {
            csv: EXPORT.replace("aprobado", "archivado"),
        };

        let err = vitrina_preview_endpoint(Json(request))
            .await
            .expect_err("preview fails");

        assert!(matches!(err, AppError::Import(_)));
        assert!(err.to_string().contains("unknown status 'archivado'"));
    }

    #[tokio::test]
    async fn vitrina_preview_endpoint_accepts_an_empty_export() {
        let request = VitrinaPreviewRequest {
            csv: "ID,Cedula,Cliente,Asesor,Afiliado,Vitrina,Banco,Monto,Estado,Fecha,Producto\n"
                .to_string(),
        };

        let Json(body) = vitrina_preview_endpoint(Json(request))
            .await
            .expect("preview builds");

        assert_eq!(body.total, 0);
        assert!(body.solicitudes.is_empty());
        assert_eq!(body.estadisticas.por_estado.len(), 10);
    }
}
