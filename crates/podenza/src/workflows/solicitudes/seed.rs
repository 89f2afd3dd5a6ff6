//! Demo data set used by the CLI walkthrough and by a freshly started
//! service until the hosted data service adapter replaces it.

use chrono::{NaiveDate, NaiveTime};

use super::domain::{Solicitud, SolicitudId, SolicitudStatus};
use super::pipeline::PipelineStep;
use super::workbench::{
    ActivityEntry, BankChoice, BankEligibility, BankSubmission, CaseFile, CaseSummary,
    DocumentRequirement, DocumentoAdjunto, SubmissionMode, SubmissionOutcome, SubmissionPlan,
};

/// The eight solicitudes of the demo data set, newest first.
pub fn demo_solicitudes() -> Vec<Solicitud> {
    vec![
        Solicitud {
            id: SolicitudId("SOL-2024-001".to_string()),
            cedula: "1234567890".to_string(),
            cliente: "Empresa ABC SAS".to_string(),
            asesor: "Carlos Gómez".to_string(),
            afiliado: true,
            vitrina: "Vitrina Norte".to_string(),
            banco: "Bancolombia".to_string(),
            monto: "$50,000,000".to_string(),
            estado: SolicitudStatus::Viabilidad,
            fecha: fecha(2024, 1, 15),
            producto: "Crédito Empresarial".to_string(),
        },
        Solicitud {
            id: SolicitudId("SOL-2024-002".to_string()),
            cedula: "9876543210".to_string(),
            cliente: "Juan Pérez".to_string(),
            asesor: "Ana Rodríguez".to_string(),
            afiliado: false,
            vitrina: "Vitrina Sur".to_string(),
            banco: "Davivienda".to_string(),
            monto: "$15,000,000".to_string(),
            estado: SolicitudStatus::PreAprobado,
            fecha: fecha(2024, 1, 14),
            producto: "Crédito Personal".to_string(),
        },
        Solicitud {
            id: SolicitudId("SOL-2024-003".to_string()),
            cedula: "5551234567".to_string(),
            cliente: "María González".to_string(),
            asesor: "Luis Martínez".to_string(),
            afiliado: true,
            vitrina: "Vitrina Centro".to_string(),
            banco: "BBVA".to_string(),
            monto: "$25,000,000".to_string(),
            estado: SolicitudStatus::EnEstudio,
            fecha: fecha(2024, 1, 13),
            producto: "Crédito Vehículo".to_string(),
        },
        Solicitud {
            id: SolicitudId("SOL-2024-004".to_string()),
            cedula: "7778889990".to_string(),
            cliente: "Tech Solutions Ltd".to_string(),
            asesor: "Carlos Gómez".to_string(),
            afiliado: true,
            vitrina: "Vitrina Este".to_string(),
            banco: "Banco de Bogotá".to_string(),
            monto: "$100,000,000".to_string(),
            estado: SolicitudStatus::Viable,
            fecha: fecha(2024, 1, 12),
            producto: "Crédito Empresarial".to_string(),
        },
        Solicitud {
            id: SolicitudId("SOL-2024-005".to_string()),
            cedula: "3334445556".to_string(),
            cliente: "Carlos Ramírez".to_string(),
            asesor: "Ana Rodríguez".to_string(),
            afiliado: false,
            vitrina: "Vitrina Oeste".to_string(),
            banco: "Bancolombia".to_string(),
            monto: "$8,000,000".to_string(),
            estado: SolicitudStatus::Aprobado,
            fecha: fecha(2024, 1, 11),
            producto: "Crédito Personal".to_string(),
        },
        Solicitud {
            id: SolicitudId("SOL-2024-006".to_string()),
            cedula: "6667778889".to_string(),
            cliente: "Constructora XYZ".to_string(),
            asesor: "Luis Martínez".to_string(),
            afiliado: true,
            vitrina: "Vitrina Norte".to_string(),
            banco: "Davivienda".to_string(),
            monto: "$75,000,000".to_string(),
            estado: SolicitudStatus::Devuelto,
            fecha: fecha(2024, 1, 10),
            producto: "Crédito Construcción".to_string(),
        },
        Solicitud {
            id: SolicitudId("SOL-2024-007".to_string()),
            cedula: "2223334445".to_string(),
            cliente: "Ana Martínez".to_string(),
            asesor: "Carlos Gómez".to_string(),
            afiliado: false,
            vitrina: "Vitrina Sur".to_string(),
            banco: "BBVA".to_string(),
            monto: "$12,000,000".to_string(),
            estado: SolicitudStatus::Viabilidad,
            fecha: fecha(2024, 1, 9),
            producto: "Crédito Personal".to_string(),
        },
        Solicitud {
            id: SolicitudId("SOL-2024-008".to_string()),
            cedula: "8889990001".to_string(),
            cliente: "Inversiones ABC".to_string(),
            asesor: "Ana Rodríguez".to_string(),
            afiliado: true,
            vitrina: "Vitrina Centro".to_string(),
            banco: "Banco de Bogotá".to_string(),
            monto: "$200,000,000".to_string(),
            estado: SolicitudStatus::NoViable,
            fecha: fecha(2024, 1, 8),
            producto: "Crédito Empresarial".to_string(),
        },
    ]
}

/// Workbench fixture for the demo case: step five of the pipeline, two banks
/// already contacted, one document still missing.
pub fn demo_case_file() -> CaseFile {
    CaseFile {
        paso_actual: PipelineStep::GestionBancaria,
        bancos: vec![
            BankSubmission {
                banco: "Davivienda".to_string(),
                outcome: SubmissionOutcome::Success,
                descripcion: "En estudio".to_string(),
                hora: Some(hora(10, 24)),
                detalle: None,
            },
            BankSubmission {
                banco: "Occidente".to_string(),
                outcome: SubmissionOutcome::Error,
                descripcion: "Devuelto".to_string(),
                hora: None,
                detalle: Some("Doc faltante".to_string()),
            },
        ],
        documentos: vec![
            DocumentoAdjunto {
                nombre: "Cédula Frente".to_string(),
                tamano: "2.3 MB".to_string(),
                tipo: "PDF".to_string(),
                subido: true,
            },
            DocumentoAdjunto {
                nombre: "Extracto Bancario 1".to_string(),
                tamano: "1.8 MB".to_string(),
                tipo: "PDF".to_string(),
                subido: true,
            },
            DocumentoAdjunto {
                nombre: "Cert. Laboral".to_string(),
                tamano: "890 KB".to_string(),
                tipo: "PDF".to_string(),
                subido: true,
            },
            DocumentoAdjunto {
                nombre: "Extracto Bancario 2".to_string(),
                tamano: "0 MB".to_string(),
                tipo: String::new(),
                subido: false,
            },
        ],
        actividad: vec![
            ActivityEntry {
                hora: "12:05".to_string(),
                actividad: "Banco Occidente devolvió solicitud".to_string(),
            },
            ActivityEntry {
                hora: "10:24".to_string(),
                actividad: "Enviado a Davivienda".to_string(),
            },
            ActivityEntry {
                hora: "09:15".to_string(),
                actividad: "Firma AUCO completada".to_string(),
            },
            ActivityEntry {
                hora: "Ayer".to_string(),
                actividad: "Perfilamiento completado".to_string(),
            },
        ],
        resumen: CaseSummary {
            valor_inmueble: "$350.000.000".to_string(),
            financiacion: "80%".to_string(),
            plazo: "15 años".to_string(),
            telefono: "+57 315 123 4567".to_string(),
            email: "freddy@email.com".to_string(),
        },
        sla_restante: "22h 15m".to_string(),
        elegibilidad: vec![
            BankEligibility {
                banco: "Davivienda".to_string(),
                score: 95,
                cobertura: 80,
            },
            BankEligibility {
                banco: "Occidente".to_string(),
                score: 70,
                cobertura: 75,
            },
        ],
        plan: SubmissionPlan {
            modo: SubmissionMode::Automatica,
            bancos: vec![
                BankChoice {
                    banco: "Davivienda".to_string(),
                    seleccionado: true,
                },
                BankChoice {
                    banco: "Occidente".to_string(),
                    seleccionado: true,
                },
                BankChoice {
                    banco: "Bancolombia".to_string(),
                    seleccionado: false,
                },
                BankChoice {
                    banco: "BBVA".to_string(),
                    seleccionado: false,
                },
            ],
            documentos: vec![
                DocumentRequirement {
                    nombre: "Formulario".to_string(),
                    listo: true,
                },
                DocumentRequirement {
                    nombre: "Extracto 1".to_string(),
                    listo: true,
                },
                DocumentRequirement {
                    nombre: "Extracto 2".to_string(),
                    listo: false,
                },
                DocumentRequirement {
                    nombre: "Certificación".to_string(),
                    listo: true,
                },
            ],
        },
    }
}

fn fecha(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}

fn hora(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid demo time")
}
