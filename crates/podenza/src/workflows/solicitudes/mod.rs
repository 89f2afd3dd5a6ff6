//! Solicitud board and workbench: the status registry, filtering,
//! statistics, status transitions with their audit trail, and the per-case
//! pipeline view backing the dashboard.

pub mod dashboard;
pub mod domain;
pub mod filter;
pub mod pipeline;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;
pub mod stats;
pub mod workbench;

#[cfg(test)]
mod tests;

pub use dashboard::DashboardSession;
pub use domain::{
    Solicitud, SolicitudId, SolicitudStatus, SolicitudView, StatusColor, StatusDefinition,
    StatusIcon,
};
pub use filter::SolicitudFilter;
pub use pipeline::{PipelineProgress, PipelineStep, StepProgressEntry, StepState};
pub use repository::{AuditEntry, RepositoryError, SolicitudRepository};
pub use router::{solicitud_router, ChangeStatusRequest, ListQuery};
pub use seed::{demo_case_file, demo_solicitudes};
pub use service::{SolicitudService, SolicitudServiceError, TransitionOutcome};
pub use stats::{SolicitudStatistics, StatisticsView};
pub use workbench::{
    ActivityEntry, BankChoice, BankEligibility, BankSubmission, CaseFile, CaseSummary,
    DocumentRequirement, DocumentoAdjunto, SubmissionMode, SubmissionOutcome, SubmissionPlan,
    WorkbenchSnapshot,
};
