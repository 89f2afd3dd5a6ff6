use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use podenza::workflows::solicitudes::{
    demo_solicitudes, AuditEntry, RepositoryError, Solicitud, SolicitudId, SolicitudRepository,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Keeps solicitudes in intake order so board listings stay stable across reads.
#[derive(Default, Clone)]
pub(crate) struct InMemorySolicitudRepository {
    state: Arc<Mutex<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    solicitudes: Vec<Solicitud>,
    activity: HashMap<SolicitudId, Vec<AuditEntry>>,
}

impl InMemorySolicitudRepository {
    pub(crate) fn seeded() -> Self {
        Self::with_records(demo_solicitudes())
    }

    pub(crate) fn with_records(records: Vec<Solicitud>) -> Self {
        let repository = Self::default();
        repository
            .state
            .lock()
            .expect("repository mutex poisoned")
            .solicitudes = records;
        repository
    }
}

impl SolicitudRepository for InMemorySolicitudRepository {
    fn insert(&self, solicitud: Solicitud) -> Result<Solicitud, RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        if guard
            .solicitudes
            .iter()
            .any(|stored| stored.id == solicitud.id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.solicitudes.push(solicitud.clone());
        Ok(solicitud)
    }

    fn update(&self, solicitud: Solicitud) -> Result<(), RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        match guard
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
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard
            .solicitudes
            .iter()
            .find(|stored| &stored.id == id)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Solicitud>, RepositoryError> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard.solicitudes.clone())
    }

    fn append_activity(&self, id: &SolicitudId, entry: AuditEntry) -> Result<(), RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        guard.activity.entry(id.clone()).or_default().push(entry);
        Ok(())
    }

    fn activity(&self, id: &SolicitudId) -> Result<Vec<AuditEntry>, RepositoryError> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard.activity.get(id).cloned().unwrap_or_default())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
