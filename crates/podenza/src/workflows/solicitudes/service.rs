use std::sync::Arc;

use chrono::Local;
use tracing::debug;

use super::domain::{Solicitud, SolicitudId, SolicitudStatus};
use super::filter::SolicitudFilter;
use super::repository::{AuditEntry, RepositoryError, SolicitudRepository};
use super::seed;
use super::stats::SolicitudStatistics;
use super::workbench::WorkbenchSnapshot;

/// Service composing the repository with filtering, statistics, and the
/// status transition rules.
pub struct SolicitudService<R> {
    repository: Arc<R>,
}

impl<R> SolicitudService<R>
where
    R: SolicitudRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Every stored solicitud, in insertion order.
    pub fn list(&self) -> Result<Vec<Solicitud>, SolicitudServiceError> {
        Ok(self.repository.list()?)
    }

    /// Fetch a single solicitud for API responses.
    pub fn get(&self, id: &SolicitudId) -> Result<Solicitud, SolicitudServiceError> {
        let solicitud = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(solicitud)
    }

    /// The solicitudes matching the given filter, in stored order.
    pub fn visible(
        &self,
        filter: &SolicitudFilter,
    ) -> Result<Vec<Solicitud>, SolicitudServiceError> {
        let solicitudes = self.repository.list()?;
        Ok(filter.apply(&solicitudes))
    }

    /// Counts across the whole store. The stat cards ignore the active
    /// filter, so this never takes one.
    pub fn statistics(&self) -> Result<SolicitudStatistics, SolicitudServiceError> {
        let solicitudes = self.repository.list()?;
        Ok(SolicitudStatistics::aggregate(&solicitudes))
    }

    /// The audit trail of a solicitud, oldest entry first.
    pub fn activity(&self, id: &SolicitudId) -> Result<Vec<AuditEntry>, SolicitudServiceError> {
        let _ = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(self.repository.activity(id)?)
    }

    /// Assemble the workbench snapshot for a solicitud. Case data beyond the
    /// record itself comes from the demo fixture until the document and bank
    /// integrations land.
    pub fn workbench(&self, id: &SolicitudId) -> Result<WorkbenchSnapshot, SolicitudServiceError> {
        let solicitud = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        let audit = self.repository.activity(id)?;
        let case_file = seed::demo_case_file();
        Ok(WorkbenchSnapshot::assemble(&solicitud, &case_file, &audit))
    }

    /// Move a solicitud to the status named by `estado_id`. Re-selecting the
    /// current status is a no-op and leaves the audit trail untouched.
    pub fn change_status(
        &self,
        id: &SolicitudId,
        estado_id: &str,
    ) -> Result<TransitionOutcome, SolicitudServiceError> {
        let estado = SolicitudStatus::from_id(estado_id).ok_or_else(|| {
            SolicitudServiceError::InvalidStatus {
                estado: estado_id.to_string(),
            }
        })?;

        let mut solicitud = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let previous = solicitud.estado;
        if previous == estado {
            debug!(id = %solicitud.id.0, estado = estado.id(), "status unchanged");
            return Ok(TransitionOutcome::Unchanged(solicitud));
        }

        solicitud.estado = estado;
        self.repository.update(solicitud.clone())?;
        self.repository.append_activity(
            id,
            AuditEntry {
                at: Local::now().naive_local(),
                desde: previous,
                hacia: estado,
            },
        )?;

        Ok(TransitionOutcome::Applied {
            solicitud,
            previous,
        })
    }
}

/// Result of a status change request.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// The status changed and the audit trail grew by one entry.
    Applied {
        solicitud: Solicitud,
        previous: SolicitudStatus,
    },
    /// The solicitud already carried the requested status.
    Unchanged(Solicitud),
}

impl TransitionOutcome {
    pub fn solicitud(&self) -> &Solicitud {
        match self {
            Self::Applied { solicitud, .. } | Self::Unchanged(solicitud) => solicitud,
        }
    }

    pub const fn changed(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Error raised by the solicitud service.
#[derive(Debug, thiserror::Error)]
pub enum SolicitudServiceError {
    #[error("unknown status '{estado}'")]
    InvalidStatus { estado: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
