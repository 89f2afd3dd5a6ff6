use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::domain::{Solicitud, SolicitudView};
use super::pipeline::{PipelineProgress, PipelineStep};
use super::repository::AuditEntry;

/// Outcome of sending a case to one bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Success,
    Error,
    Pending,
}

/// Per-bank state shown in the "Estado por Banco" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSubmission {
    pub banco: String,
    pub outcome: SubmissionOutcome,
    pub descripcion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detalle: Option<String>,
}

/// Entry of the attached-document checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentoAdjunto {
    pub nombre: String,
    pub tamano: String,
    pub tipo: String,
    pub subido: bool,
}

/// Line in the "Actividad Reciente" feed. `hora` is a display string since
/// the feed mixes clock times with relative markers like "Ayer".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub hora: String,
    pub actividad: String,
}

/// Values of the case summary card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSummary {
    pub valor_inmueble: String,
    pub financiacion: String,
    pub plazo: String,
    pub telefono: String,
    pub email: String,
}

/// Pre-check estimate for one bank before the case is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankEligibility {
    pub banco: String,
    pub score: u8,
    pub cobertura: u8,
}

/// How the case is dispatched to banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionMode {
    Automatica,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankChoice {
    pub banco: String,
    pub seleccionado: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRequirement {
    pub nombre: String,
    pub listo: bool,
}

/// Form state of the "Enviar a Bancos" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPlan {
    pub modo: SubmissionMode,
    pub bancos: Vec<BankChoice>,
    pub documentos: Vec<DocumentRequirement>,
}

impl SubmissionPlan {
    /// Banks currently ticked for dispatch.
    pub fn selected_banks(&self) -> Vec<&str> {
        self.bancos
            .iter()
            .filter(|choice| choice.seleccionado)
            .map(|choice| choice.banco.as_str())
            .collect()
    }

    /// Count driving the "Enviar a N Bancos" button.
    pub fn selected_count(&self) -> usize {
        self.bancos
            .iter()
            .filter(|choice| choice.seleccionado)
            .count()
    }
}

/// Everything the workbench shows for one solicitud beyond the record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFile {
    pub paso_actual: PipelineStep,
    pub bancos: Vec<BankSubmission>,
    pub documentos: Vec<DocumentoAdjunto>,
    pub actividad: Vec<ActivityEntry>,
    pub resumen: CaseSummary,
    pub sla_restante: String,
    pub elegibilidad: Vec<BankEligibility>,
    pub plan: SubmissionPlan,
}

/// Serialized workbench payload: the record, its derived pipeline position,
/// and the case file with the persisted audit trail folded into the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkbenchSnapshot {
    pub solicitud: SolicitudView,
    pub progreso: PipelineProgress,
    pub bancos: Vec<BankSubmission>,
    pub documentos: Vec<DocumentoAdjunto>,
    pub actividad: Vec<ActivityEntry>,
    pub resumen: CaseSummary,
    pub sla_restante: String,
    pub elegibilidad: Vec<BankEligibility>,
    pub plan: SubmissionPlan,
}

impl WorkbenchSnapshot {
    /// Merge the record, the case file, and the audit trail into one payload.
    /// Audit entries come first in the feed, newest first, ahead of the case
    /// file's own activity lines.
    pub fn assemble(solicitud: &Solicitud, case_file: &CaseFile, audit: &[AuditEntry]) -> Self {
        let mut actividad: Vec<ActivityEntry> = audit
            .iter()
            .rev()
            .map(|entry| ActivityEntry {
                hora: entry.at.format("%H:%M").to_string(),
                actividad: entry.descripcion(),
            })
            .collect();
        actividad.extend(case_file.actividad.iter().cloned());

        Self {
            solicitud: solicitud.to_view(),
            progreso: PipelineProgress::at(case_file.paso_actual),
            bancos: case_file.bancos.clone(),
            documentos: case_file.documentos.clone(),
            actividad,
            resumen: case_file.resumen.clone(),
            sla_restante: case_file.sla_restante.clone(),
            elegibilidad: case_file.elegibilidad.clone(),
            plan: case_file.plan.clone(),
        }
    }
}
