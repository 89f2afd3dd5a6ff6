use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::domain::{Solicitud, SolicitudId, SolicitudStatus};

/// One persisted status transition in a solicitud's activity trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub at: NaiveDateTime,
    pub desde: SolicitudStatus,
    pub hacia: SolicitudStatus,
}

impl AuditEntry {
    /// Feed line as rendered in the workbench activity panel.
    pub fn descripcion(&self) -> String {
        format!(
            "Estado cambiado de {} a {}",
            self.desde.label(),
            self.hacia.label()
        )
    }
}

/// Storage abstraction so the dashboard and service can be exercised in
/// isolation. The hosted data service adapter will implement this same trait;
/// only the in-memory store ships today.
///
/// `list` returns records in insertion order so the dashboard rendering stays
/// deterministic.
pub trait SolicitudRepository: Send + Sync {
    fn insert(&self, solicitud: Solicitud) -> Result<Solicitud, RepositoryError>;
    fn update(&self, solicitud: Solicitud) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SolicitudId) -> Result<Option<Solicitud>, RepositoryError>;
    fn list(&self) -> Result<Vec<Solicitud>, RepositoryError>;
    fn append_activity(&self, id: &SolicitudId, entry: AuditEntry) -> Result<(), RepositoryError>;
    fn activity(&self, id: &SolicitudId) -> Result<Vec<AuditEntry>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
