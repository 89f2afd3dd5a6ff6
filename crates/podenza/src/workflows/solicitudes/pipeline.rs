use serde::{Deserialize, Serialize};

/// Ordered steps of the credit approval pipeline shown in the workbench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStep {
    Lead,
    Registro,
    Perfilamiento,
    FirmaAuco,
    GestionBancaria,
    Peritaje,
    Documentos,
    Desembolso,
}

impl PipelineStep {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Lead,
            Self::Registro,
            Self::Perfilamiento,
            Self::FirmaAuco,
            Self::GestionBancaria,
            Self::Peritaje,
            Self::Documentos,
            Self::Desembolso,
        ]
    }

    /// One-based position in the pipeline.
    pub const fn numero(self) -> u8 {
        match self {
            Self::Lead => 1,
            Self::Registro => 2,
            Self::Perfilamiento => 3,
            Self::FirmaAuco => 4,
            Self::GestionBancaria => 5,
            Self::Peritaje => 6,
            Self::Documentos => 7,
            Self::Desembolso => 8,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Registro => "Registro",
            Self::Perfilamiento => "Perfilamiento",
            Self::FirmaAuco => "Firma AUCO",
            Self::GestionBancaria => "Gestión Bancaria",
            Self::Peritaje => "Peritaje",
            Self::Documentos => "Documentos",
            Self::Desembolso => "Desembolso",
        }
    }
}

/// State of one step relative to the step currently being worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepState {
    Completado,
    Activo,
    Pendiente,
}

impl StepState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completado => "completado",
            Self::Activo => "activo",
            Self::Pendiente => "pendiente",
        }
    }
}

/// Per-step entry rendered in the workbench stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepProgressEntry {
    pub paso: PipelineStep,
    pub numero: u8,
    pub nombre: &'static str,
    pub estado: StepState,
}

/// Derived position in the pipeline: every step's state plus the completion
/// percentage.
///
/// Completed steps always form a prefix of the order and exactly the current
/// step is active. The percentage is computed from the completed count rather
/// than stored alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineProgress {
    pub actual: PipelineStep,
    pub pasos: Vec<StepProgressEntry>,
    pub progreso: u8,
}

impl PipelineProgress {
    pub fn at(actual: PipelineStep) -> Self {
        let ordered = PipelineStep::ordered();
        let active_idx = actual.numero() as usize - 1;

        let pasos: Vec<StepProgressEntry> = ordered
            .into_iter()
            .enumerate()
            .map(|(idx, paso)| {
                let estado = if idx < active_idx {
                    StepState::Completado
                } else if idx == active_idx {
                    StepState::Activo
                } else {
                    StepState::Pendiente
                };

                StepProgressEntry {
                    paso,
                    numero: paso.numero(),
                    nombre: paso.label(),
                    estado,
                }
            })
            .collect();

        let completados = pasos
            .iter()
            .filter(|entry| entry.estado == StepState::Completado)
            .count();
        let progreso = ((completados as f32 / ordered.len() as f32) * 100.0).round() as u8;

        Self {
            actual,
            pasos,
            progreso,
        }
    }

    pub fn completados(&self) -> usize {
        self.pasos
            .iter()
            .filter(|entry| entry.estado == StepState::Completado)
            .count()
    }
}
