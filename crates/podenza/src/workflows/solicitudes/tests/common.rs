use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::solicitudes::repository::{AuditEntry, RepositoryError, SolicitudRepository};
use crate::workflows::solicitudes::seed::demo_solicitudes;
use crate::workflows::solicitudes::{
    solicitud_router, DashboardSession, Solicitud, SolicitudId, SolicitudService,
};

pub(super) fn fecha(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn solicitud_id(raw: &str) -> SolicitudId {
    SolicitudId(raw.to_string())
}

#[derive(Default)]
struct MemoryState {
    solicitudes: Vec<Solicitud>,
    activity: HashMap<SolicitudId, Vec<AuditEntry>>,
}

/// Vec-backed store preserving insertion order, shared through an `Arc`.
#[derive(Default)]
pub(super) struct MemoryRepository {
    state: Mutex<MemoryState>,
}

impl MemoryRepository {
    pub(super) fn seeded() -> Arc<Self> {
        let repository = Self::default();
        repository
            .state
            .lock()
            .expect("repository mutex poisoned")
            .solicitudes = demo_solicitudes();
        Arc::new(repository)
    }

    pub(super) fn remove(&self, id: &SolicitudId) {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        state.solicitudes.retain(|solicitud| &solicitud.id != id);
    }
}

impl SolicitudRepository for MemoryRepository {
    fn insert(&self, solicitud: Solicitud) -> Result<Solicitud, RepositoryError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        if state
            .solicitudes
            .iter()
            .any(|stored| stored.id == solicitud.id)
        {
            return Err(RepositoryError::Conflict);
        }
        state.solicitudes.push(solicitud.clone());
        Ok(solicitud)
    }

    fn update(&self, solicitud: Solicitud) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        match state
            .solicitudes
            .iter_mut()
            .find(|stored| stored.id == solicitud.id)
        {
            Some(stored) => {
                *stored = solicitud;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &SolicitudId) -> Result<Option<Solicitud>, RepositoryError> {
        let state = self.state.lock().expect("repository mutex poisoned");
        Ok(state
            .solicitudes
            .iter()
            .find(|stored| &stored.id == id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Solicitud>, RepositoryError> {
        let state = self.state.lock().expect("repository mutex poisoned");
        Ok(state.solicitudes.clone())
    }

    fn append_activity(&self, id: &SolicitudId, entry: AuditEntry) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        state.activity.entry(id.clone()).or_default().push(entry);
        Ok(())
    }

    fn activity(&self, id: &SolicitudId) -> Result<Vec<AuditEntry>, RepositoryError> {
        let state = self.state.lock().expect("repository mutex poisoned");
        Ok(state.activity.get(id).cloned().unwrap_or_default())
    }
}

pub(super) struct UnavailableRepository;

impl SolicitudRepository for UnavailableRepository {
    fn insert(&self, _solicitud: Solicitud) -> Result<Solicitud, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _solicitud: Solicitud) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SolicitudId) -> Result<Option<Solicitud>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Solicitud>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn append_activity(
        &self,
        _id: &SolicitudId,
        _entry: AuditEntry,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn activity(&self, _id: &SolicitudId) -> Result<Vec<AuditEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (SolicitudService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = MemoryRepository::seeded();
    let service = SolicitudService::new(repository.clone());
    (service, repository)
}

pub(super) fn build_session() -> DashboardSession<MemoryRepository> {
    DashboardSession::new(MemoryRepository::seeded())
}

pub(super) fn board_router() -> axum::Router {
    let (service, _) = build_service();
    solicitud_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
