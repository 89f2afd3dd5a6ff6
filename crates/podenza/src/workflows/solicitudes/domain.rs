use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for solicitudes (e.g. `SOL-2024-001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolicitudId(pub String);

/// The fixed catalogue of states a solicitud moves through, in the order the
/// dashboard presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolicitudStatus {
    Viabilidad,
    Viable,
    NoViable,
    PreAprobado,
    EnEstudio,
    Devuelto,
    Negado,
    Aprobado,
    Desistido,
    Aplazado,
}

impl SolicitudStatus {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Viabilidad,
            Self::Viable,
            Self::NoViable,
            Self::PreAprobado,
            Self::EnEstudio,
            Self::Devuelto,
            Self::Negado,
            Self::Aprobado,
            Self::Desistido,
            Self::Aplazado,
        ]
    }

    /// Stable identifier used on the wire and in vitrina exports.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Viabilidad => "viabilidad",
            Self::Viable => "viable",
            Self::NoViable => "no_viable",
            Self::PreAprobado => "pre_aprobado",
            Self::EnEstudio => "en_estudio",
            Self::Devuelto => "devuelto",
            Self::Negado => "negado",
            Self::Aprobado => "aprobado",
            Self::Desistido => "desistido",
            Self::Aplazado => "aplazado",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Viabilidad => "En viabilidad",
            Self::Viable => "Viable",
            Self::NoViable => "No viable",
            Self::PreAprobado => "Pre-Aprobado",
            Self::EnEstudio => "En estudio",
            Self::Devuelto => "Devuelto",
            Self::Negado => "Negado",
            Self::Aprobado => "Aprobado",
            Self::Desistido => "Desistido",
            Self::Aplazado => "Aplazado",
        }
    }

    pub const fn color(self) -> StatusColor {
        match self {
            Self::Viabilidad | Self::EnEstudio | Self::Devuelto => StatusColor::Accent,
            Self::Viable | Self::Aprobado => StatusColor::Chart3,
            Self::NoViable | Self::Negado => StatusColor::Destructive,
            Self::PreAprobado => StatusColor::Primary,
            Self::Desistido | Self::Aplazado => StatusColor::MutedForeground,
        }
    }

    pub const fn icon(self) -> StatusIcon {
        match self {
            Self::Viabilidad | Self::Aplazado => StatusIcon::Clock,
            Self::Viable | Self::PreAprobado | Self::Aprobado => StatusIcon::CheckCircle,
            Self::NoViable | Self::Negado | Self::Desistido => StatusIcon::XCircle,
            Self::EnEstudio => StatusIcon::FileText,
            Self::Devuelto => StatusIcon::AlertCircle,
        }
    }

    /// Resolve a wire identifier back to a status. Unknown identifiers are the
    /// source of `InvalidStatus` failures at the boundaries.
    pub fn from_id(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|status| status.id() == value)
    }

    pub const fn definition(self) -> StatusDefinition {
        StatusDefinition {
            id: self.id(),
            label: self.label(),
            color: self.color(),
            icon: self.icon(),
        }
    }

    /// The full registry in display order, one definition per status.
    pub fn catalogue() -> Vec<StatusDefinition> {
        Self::ordered()
            .into_iter()
            .map(Self::definition)
            .collect()
    }
}

/// Design-system color tokens carried by the registry so clients render the
/// same chip palette everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusColor {
    Accent,
    #[serde(rename = "chart-3")]
    Chart3,
    Destructive,
    Primary,
    MutedForeground,
}

impl StatusColor {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Accent => "accent",
            Self::Chart3 => "chart-3",
            Self::Destructive => "destructive",
            Self::Primary => "primary",
            Self::MutedForeground => "muted-foreground",
        }
    }
}

/// Icon names from the dashboard icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusIcon {
    Clock,
    CheckCircle,
    XCircle,
    FileText,
    AlertCircle,
}

impl StatusIcon {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::CheckCircle => "check-circle",
            Self::XCircle => "x-circle",
            Self::FileText => "file-text",
            Self::AlertCircle => "alert-circle",
        }
    }
}

/// Registry row served to clients rendering status chips and menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub color: StatusColor,
    pub icon: StatusIcon,
}

/// A credit application as captured from the vitrina intake flow.
///
/// `monto` stays the currency display string exactly as captured; nothing in
/// the dashboard does arithmetic on it and the search box matches it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solicitud {
    pub id: SolicitudId,
    pub cedula: String,
    pub cliente: String,
    pub asesor: String,
    pub afiliado: bool,
    pub vitrina: String,
    pub banco: String,
    pub monto: String,
    pub estado: SolicitudStatus,
    pub fecha: NaiveDate,
    pub producto: String,
}

impl Solicitud {
    /// Text shown and searched for the affiliate flag.
    pub const fn afiliado_text(&self) -> &'static str {
        if self.afiliado {
            "Sí"
        } else {
            "No"
        }
    }

    pub fn to_view(&self) -> SolicitudView {
        SolicitudView {
            id: self.id.clone(),
            cedula: self.cedula.clone(),
            cliente: self.cliente.clone(),
            asesor: self.asesor.clone(),
            afiliado: self.afiliado_text(),
            vitrina: self.vitrina.clone(),
            banco: self.banco.clone(),
            monto: self.monto.clone(),
            estado: self.estado.definition(),
            fecha: self.fecha,
            producto: self.producto.clone(),
        }
    }
}

/// List and detail representation with the status resolved to its registry
/// definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolicitudView {
    pub id: SolicitudId,
    pub cedula: String,
    pub cliente: String,
    pub asesor: String,
    pub afiliado: &'static str,
    pub vitrina: String,
    pub banco: String,
    pub monto: String,
    pub estado: StatusDefinition,
    pub fecha: NaiveDate,
    pub producto: String,
}
