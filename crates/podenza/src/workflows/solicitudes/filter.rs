use chrono::NaiveDate;

use super::domain::Solicitud;

/// Search and date criteria applied to the solicitudes list.
///
/// Filtering is pure and order preserving: records come back in the order
/// they were given, and nothing here touches the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolicitudFilter {
    /// Substring matched against the searchable fields; empty passes all.
    pub search: String,
    /// Inclusive lower bound on `fecha`.
    pub desde: Option<NaiveDate>,
    /// Inclusive upper bound on `fecha`.
    pub hasta: Option<NaiveDate>,
}

impl SolicitudFilter {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Self::default()
        }
    }

    pub fn between(desde: Option<NaiveDate>, hasta: Option<NaiveDate>) -> Self {
        Self {
            desde,
            hasta,
            ..Self::default()
        }
    }

    /// Whether a single record passes both the text and the date criteria.
    pub fn matches(&self, solicitud: &Solicitud) -> bool {
        self.matches_search(solicitud) && self.matches_dates(solicitud)
    }

    /// The visible subsequence of `solicitudes`, in input order.
    pub fn apply(&self, solicitudes: &[Solicitud]) -> Vec<Solicitud> {
        solicitudes
            .iter()
            .filter(|solicitud| self.matches(solicitud))
            .cloned()
            .collect()
    }

    // The status and the date are not searchable; they have their own
    // controls. The cedula is matched verbatim, every other field lowercased.
    fn matches_search(&self, solicitud: &Solicitud) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let term = self.search.to_lowercase();
        solicitud.id.0.to_lowercase().contains(&term)
            || solicitud.cliente.to_lowercase().contains(&term)
            || solicitud.cedula.contains(&self.search)
            || solicitud.asesor.to_lowercase().contains(&term)
            || solicitud.afiliado_text().to_lowercase().contains(&term)
            || solicitud.vitrina.to_lowercase().contains(&term)
            || solicitud.banco.to_lowercase().contains(&term)
            || solicitud.monto.to_lowercase().contains(&term)
            || solicitud.producto.to_lowercase().contains(&term)
    }

    fn matches_dates(&self, solicitud: &Solicitud) -> bool {
        if let Some(desde) = self.desde {
            if solicitud.fecha < desde {
                return false;
            }
        }

        if let Some(hasta) = self.hasta {
            if solicitud.fecha > hasta {
                return false;
            }
        }

        true
    }
}
