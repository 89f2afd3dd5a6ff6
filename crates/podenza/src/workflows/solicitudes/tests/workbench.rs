use super::common::fecha;
use crate::workflows::solicitudes::seed::{demo_case_file, demo_solicitudes};
use crate::workflows::solicitudes::{
    AuditEntry, SolicitudStatus, SubmissionMode, SubmissionOutcome, WorkbenchSnapshot,
};

fn audit_entry(hour: u32, minute: u32, hacia: SolicitudStatus) -> AuditEntry {
    AuditEntry {
        at: fecha(2024, 1, 16)
            .and_hms_opt(hour, minute, 0)
            .expect("valid time"),
        desde: SolicitudStatus::Viabilidad,
        hacia,
    }
}

#[test]
fn assemble_merges_record_case_file_and_pipeline() {
    let solicitudes = demo_solicitudes();
    let snapshot = WorkbenchSnapshot::assemble(&solicitudes[2], &demo_case_file(), &[]);

    assert_eq!(snapshot.solicitud.id.0, "SOL-2024-003");
    assert_eq!(snapshot.solicitud.estado.id, "en_estudio");
    assert_eq!(snapshot.progreso.progreso, 50);
    assert_eq!(snapshot.progreso.completados(), 4);
    assert_eq!(snapshot.sla_restante, "22h 15m");
    assert_eq!(snapshot.resumen.valor_inmueble, "$350.000.000");
    assert_eq!(snapshot.resumen.plazo, "15 años");
}

#[test]
fn assemble_folds_audit_entries_newest_first_into_the_feed() {
    let solicitudes = demo_solicitudes();
    let audit = vec![
        audit_entry(9, 0, SolicitudStatus::Viable),
        audit_entry(11, 30, SolicitudStatus::EnEstudio),
    ];

    let snapshot = WorkbenchSnapshot::assemble(&solicitudes[0], &demo_case_file(), &audit);

    assert_eq!(snapshot.actividad.len(), 6);
    assert_eq!(snapshot.actividad[0].hora, "11:30");
    assert_eq!(
        snapshot.actividad[0].actividad,
        "Estado cambiado de En viabilidad a En estudio"
    );
    assert_eq!(snapshot.actividad[1].hora, "09:00");
    assert_eq!(snapshot.actividad[2].hora, "12:05");
    assert_eq!(snapshot.actividad[5].hora, "Ayer");
}

#[test]
fn demo_case_file_matches_the_gestion_bancaria_stage() {
    let case_file = demo_case_file();

    assert_eq!(case_file.bancos.len(), 2);
    assert_eq!(case_file.bancos[0].banco, "Davivienda");
    assert_eq!(case_file.bancos[0].outcome, SubmissionOutcome::Success);
    assert_eq!(
        case_file.bancos[0].hora.map(|hora| hora.to_string()),
        Some("10:24:00".to_string())
    );
    assert_eq!(case_file.bancos[1].outcome, SubmissionOutcome::Error);
    assert_eq!(case_file.bancos[1].detalle.as_deref(), Some("Doc faltante"));

    let subidos = case_file
        .documentos
        .iter()
        .filter(|documento| documento.subido)
        .count();
    assert_eq!(case_file.documentos.len(), 4);
    assert_eq!(subidos, 3);

    assert_eq!(case_file.elegibilidad.len(), 2);
    assert_eq!(case_file.elegibilidad[0].score, 95);
    assert_eq!(case_file.elegibilidad[0].cobertura, 80);
    assert_eq!(case_file.elegibilidad[1].score, 70);
    assert_eq!(case_file.elegibilidad[1].cobertura, 75);
}

#[test]
fn submission_plan_defaults_to_two_selected_banks() {
    let plan = demo_case_file().plan;

    assert_eq!(plan.modo, SubmissionMode::Automatica);
    assert_eq!(plan.selected_count(), 2);
    assert_eq!(plan.selected_banks(), vec!["Davivienda", "Occidente"]);

    let listos = plan
        .documentos
        .iter()
        .filter(|requisito| requisito.listo)
        .count();
    assert_eq!(listos, 3);
}
