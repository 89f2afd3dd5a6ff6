use crate::workflows::solicitudes::{PipelineProgress, PipelineStep, StepState};

#[test]
fn steps_are_numbered_in_pipeline_order() {
    let ordered = PipelineStep::ordered();

    for (idx, paso) in ordered.into_iter().enumerate() {
        assert_eq!(paso.numero() as usize, idx + 1);
    }
    assert_eq!(ordered[0].label(), "Lead");
    assert_eq!(ordered[3].label(), "Firma AUCO");
    assert_eq!(ordered[4].label(), "Gestión Bancaria");
    assert_eq!(ordered[7].label(), "Desembolso");
}

#[test]
fn progress_at_gestion_bancaria_completes_four_of_eight() {
    let progress = PipelineProgress::at(PipelineStep::GestionBancaria);

    assert_eq!(progress.completados(), 4);
    assert_eq!(progress.pasos[4].estado, StepState::Activo);
    assert_eq!(progress.pasos[4].nombre, "Gestión Bancaria");
    assert_eq!(progress.progreso, 50);
}

#[test]
fn progress_at_the_first_step_is_zero() {
    let progress = PipelineProgress::at(PipelineStep::Lead);

    assert_eq!(progress.completados(), 0);
    assert_eq!(progress.pasos[0].estado, StepState::Activo);
    assert_eq!(progress.progreso, 0);
}

#[test]
fn progress_at_the_last_step_rounds_up() {
    let progress = PipelineProgress::at(PipelineStep::Desembolso);

    assert_eq!(progress.completados(), 7);
    assert_eq!(progress.progreso, 88);
}

#[test]
fn completed_steps_always_form_a_prefix() {
    for actual in PipelineStep::ordered() {
        let progress = PipelineProgress::at(actual);
        let active_idx = actual.numero() as usize - 1;

        for (idx, entry) in progress.pasos.iter().enumerate() {
            let expected = if idx < active_idx {
                StepState::Completado
            } else if idx == active_idx {
                StepState::Activo
            } else {
                StepState::Pendiente
            };
            assert_eq!(entry.estado, expected, "step {} of {:?}", idx, actual);
        }
        assert_eq!(progress.actual, actual);
    }
}

#[test]
fn step_ids_serialize_in_snake_case() {
    let json = serde_json::to_value(PipelineStep::GestionBancaria).expect("serializes");
    assert_eq!(json, serde_json::json!("gestion_bancaria"));

    let json = serde_json::to_value(StepState::Completado).expect("serializes");
    assert_eq!(json, serde_json::json!("completado"));
}
