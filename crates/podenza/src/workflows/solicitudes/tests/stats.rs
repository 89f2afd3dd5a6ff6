use crate::workflows::solicitudes::seed::demo_solicitudes;
use crate::workflows::solicitudes::{SolicitudStatistics, SolicitudStatus};

#[test]
fn aggregate_counts_the_demo_set() {
    let statistics = SolicitudStatistics::aggregate(&demo_solicitudes());

    assert_eq!(statistics.total, 8);
    assert_eq!(statistics.count(SolicitudStatus::Viabilidad), 2);
    assert_eq!(statistics.count(SolicitudStatus::PreAprobado), 1);
    assert_eq!(statistics.count(SolicitudStatus::Aprobado), 1);
    assert_eq!(statistics.count(SolicitudStatus::Viable), 1);
    assert_eq!(statistics.count(SolicitudStatus::NoViable), 1);
    assert_eq!(statistics.count(SolicitudStatus::EnEstudio), 1);
    assert_eq!(statistics.count(SolicitudStatus::Devuelto), 1);
    assert_eq!(statistics.count(SolicitudStatus::Negado), 0);
}

#[test]
fn per_status_counts_sum_to_total() {
    let statistics = SolicitudStatistics::aggregate(&demo_solicitudes());

    let sum: usize = SolicitudStatus::ordered()
        .into_iter()
        .map(|estado| statistics.count(estado))
        .sum();

    assert_eq!(sum, statistics.total);
}

#[test]
fn aggregate_is_order_independent() {
    let mut reversed = demo_solicitudes();
    reversed.reverse();

    assert_eq!(
        SolicitudStatistics::aggregate(&demo_solicitudes()),
        SolicitudStatistics::aggregate(&reversed)
    );
}

#[test]
fn aggregate_of_nothing_is_all_zeroes() {
    let statistics = SolicitudStatistics::aggregate(&[]);

    assert_eq!(statistics.total, 0);
    for estado in SolicitudStatus::ordered() {
        assert_eq!(statistics.count(estado), 0);
    }
}

#[test]
fn view_exposes_headline_cards_and_every_status() {
    let view = SolicitudStatistics::aggregate(&demo_solicitudes()).to_view();

    assert_eq!(view.total, 8);
    assert_eq!(view.viabilidad, 2);
    assert_eq!(view.pre_aprobado, 1);
    assert_eq!(view.aprobado, 1);
    assert_eq!(view.por_estado.len(), 10);
    assert_eq!(view.por_estado.get("devuelto"), Some(&1));
    assert_eq!(view.por_estado.get("aplazado"), Some(&0));
}
