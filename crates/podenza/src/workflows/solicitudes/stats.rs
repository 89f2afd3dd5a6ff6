use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Solicitud, SolicitudStatus};

/// Counters behind the dashboard stat cards.
///
/// Aggregation is deterministic and order independent, and the per-status
/// counts always sum to `total`. The cards are computed over the full store,
/// not the filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolicitudStatistics {
    pub total: usize,
    por_estado: BTreeMap<SolicitudStatus, usize>,
}

impl SolicitudStatistics {
    pub fn aggregate(solicitudes: &[Solicitud]) -> Self {
        let mut por_estado = BTreeMap::new();
        for solicitud in solicitudes {
            *por_estado.entry(solicitud.estado).or_insert(0) += 1;
        }

        Self {
            total: solicitudes.len(),
            por_estado,
        }
    }

    /// Count for one status; zero when no record carries it.
    pub fn count(&self, estado: SolicitudStatus) -> usize {
        self.por_estado.get(&estado).copied().unwrap_or(0)
    }

    pub fn to_view(&self) -> StatisticsView {
        let por_estado = SolicitudStatus::ordered()
            .into_iter()
            .map(|estado| (estado.id(), self.count(estado)))
            .collect();

        StatisticsView {
            total: self.total,
            viabilidad: self.count(SolicitudStatus::Viabilidad),
            pre_aprobado: self.count(SolicitudStatus::PreAprobado),
            aprobado: self.count(SolicitudStatus::Aprobado),
            por_estado,
        }
    }
}

/// Card payload: the grand total, the three headline counters the dashboard
/// surfaces, and the full per-status breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsView {
    pub total: usize,
    pub viabilidad: usize,
    pub pre_aprobado: usize,
    pub aprobado: usize,
    pub por_estado: BTreeMap<&'static str, usize>,
}
