use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{Solicitud, SolicitudId};
use super::filter::SolicitudFilter;
use super::repository::{RepositoryError, SolicitudRepository};
use super::service::{SolicitudService, SolicitudServiceError, TransitionOutcome};
use super::stats::SolicitudStatistics;

/// One operator's view of the dashboard: the active filter plus the
/// solicitud currently opened in the workbench, kept server-side so a page
/// reload lands back on the same state.
pub struct DashboardSession<R> {
    service: SolicitudService<R>,
    filter: SolicitudFilter,
    selected: Option<SolicitudId>,
}

impl<R> DashboardSession<R>
where
    R: SolicitudRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            service: SolicitudService::new(repository),
            filter: SolicitudFilter::default(),
            selected: None,
        }
    }

    pub fn service(&self) -> &SolicitudService<R> {
        &self.service
    }

    pub fn filter(&self) -> &SolicitudFilter {
        &self.filter
    }

    /// Replace the search term. The date range stays as it is.
    pub fn search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
    }

    /// Replace both ends of the date range at once.
    pub fn set_date_range(&mut self, desde: Option<NaiveDate>, hasta: Option<NaiveDate>) {
        self.filter.desde = desde;
        self.filter.hasta = hasta;
    }

    pub fn clear_date_range(&mut self) {
        self.filter.desde = None;
        self.filter.hasta = None;
    }

    /// Open a solicitud in the workbench. A failed lookup leaves the
    /// previous selection in place.
    pub fn select(&mut self, id: &SolicitudId) -> Result<Solicitud, SolicitudServiceError> {
        let solicitud = self.service.get(id)?;
        self.selected = Some(solicitud.id.clone());
        Ok(solicitud)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The currently selected solicitud, re-read from the store so status
    /// changes show up. A selection pointing at a removed record is dropped.
    pub fn selected(&mut self) -> Result<Option<Solicitud>, SolicitudServiceError> {
        let Some(id) = self.selected.clone() else {
            return Ok(None);
        };
        match self.service.get(&id) {
            Ok(solicitud) => Ok(Some(solicitud)),
            Err(SolicitudServiceError::Repository(RepositoryError::NotFound)) => {
                self.selected = None;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// The solicitudes visible under the active filter.
    pub fn list_visible(&self) -> Result<Vec<Solicitud>, SolicitudServiceError> {
        self.service.visible(&self.filter)
    }

    /// Counts over the whole store, regardless of the active filter.
    pub fn statistics(&self) -> Result<SolicitudStatistics, SolicitudServiceError> {
        self.service.statistics()
    }

    /// Change the status of the selected solicitud. Without a selection this
    /// reports the record as not found.
    pub fn change_status(
        &mut self,
        estado_id: &str,
    ) -> Result<TransitionOutcome, SolicitudServiceError> {
        let Some(id) = self.selected.clone() else {
            return Err(RepositoryError::NotFound.into());
        };
        match self.service.change_status(&id, estado_id) {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                if matches!(
                    err,
                    SolicitudServiceError::Repository(RepositoryError::NotFound)
                ) {
                    self.selected = None;
                }
                Err(err)
            }
        }
    }
}
