use crate::infra::InMemorySolicitudRepository;
use chrono::NaiveDate;
use clap::Args;
use podenza::error::AppError;
use podenza::workflows::solicitudes::{
    DashboardSession, Solicitud, SolicitudStatistics, SolicitudStatus, WorkbenchSnapshot,
};
use podenza::workflows::vitrina::VitrinaImporter;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct SolicitudesListArgs {
    /// Free-text search across client, adviser, bank, amount and product fields
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Keep solicitudes received on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) desde: Option<NaiveDate>,
    /// Keep solicitudes received on or before this date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) hasta: Option<NaiveDate>,
    /// Optional vitrina CSV export to load instead of the demo records
    #[arg(long)]
    pub(crate) vitrina_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional vitrina CSV export to load instead of the demo records
    #[arg(long)]
    pub(crate) vitrina_csv: Option<PathBuf>,
    /// Skip the workbench portion of the demo output
    #[arg(long)]
    pub(crate) skip_workbench: bool,
}

pub(crate) fn run_solicitudes_list(args: SolicitudesListArgs) -> Result<(), AppError> {
    let SolicitudesListArgs {
        search,
        desde,
        hasta,
        vitrina_csv,
    } = args;

    let (repository, imported) = load_repository(vitrina_csv)?;
    let mut session = DashboardSession::new(repository);
    session.search(search);
    session.set_date_range(desde, hasta);

    render_data_source(imported);

    let visible = match session.list_visible() {
        Ok(records) => records,
        Err(err) => {
            println!("Listing unavailable: {}", err);
            return Ok(());
        }
    };
    render_board(&visible);

    match session.statistics() {
        Ok(statistics) => render_statistics(&statistics),
        Err(err) => println!("Statistics unavailable: {}", err),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        vitrina_csv,
        skip_workbench,
    } = args;

    println!("Podenza solicitudes demo");
    let (repository, imported) = load_repository(vitrina_csv)?;
    render_data_source(imported);

    let mut session = DashboardSession::new(repository);

    match session.statistics() {
        Ok(statistics) => render_statistics(&statistics),
        Err(err) => {
            println!("Statistics unavailable: {}", err);
            return Ok(());
        }
    };

    let visible = match session.list_visible() {
        Ok(records) => records,
        Err(err) => {
            println!("Listing unavailable: {}", err);
            return Ok(());
        }
    };
    render_board(&visible);

    println!("\nFilter demo");
    session.search("Bancolombia");
    match session.list_visible() {
        Ok(records) => println!("- search \"Bancolombia\": {} visible", records.len()),
        Err(err) => println!("  Listing unavailable: {}", err),
    }
    session.set_date_range(NaiveDate::from_ymd_opt(2024, 1, 12), None);
    match session.list_visible() {
        Ok(records) => println!("- plus desde 2024-01-12: {} visible", records.len()),
        Err(err) => println!("  Listing unavailable: {}", err),
    }
    session.search("");
    session.clear_date_range();

    let Some(first) = visible.first() else {
        println!("\nNo solicitudes loaded, skipping the transition demo");
        return Ok(());
    };
    let id = first.id.clone();

    println!("\nStatus transition demo");
    if let Err(err) = session.select(&id) {
        println!("  Selection unavailable: {}", err);
        return Ok(());
    }

    let destino = if first.estado == SolicitudStatus::EnEstudio {
        SolicitudStatus::Viable
    } else {
        SolicitudStatus::EnEstudio
    };
    match session.change_status(destino.id()) {
        Ok(outcome) if outcome.changed() => {
            println!(
                "- {} moved to {}",
                id.0,
                outcome.solicitud().estado.label()
            );
        }
        Ok(_) => println!("- {} already at {}", id.0, destino.label()),
        Err(err) => {
            println!("  Transition unavailable: {}", err);
            return Ok(());
        }
    }

    match session.service().activity(&id) {
        Ok(trail) => {
            println!("Audit trail");
            for entry in trail {
                println!(
                    "- {} | {}",
                    entry.at.format("%Y-%m-%d %H:%M"),
                    entry.descripcion()
                );
            }
        }
        Err(err) => println!("  Audit trail unavailable: {}", err),
    }

    if skip_workbench {
        return Ok(());
    }

    println!("\nWorkbench demo");
    match session.service().workbench(&id) {
        Ok(snapshot) => render_workbench(&snapshot),
        Err(err) => println!("  Workbench unavailable: {}", err),
    }

    Ok(())
}

fn load_repository(
    vitrina_csv: Option<PathBuf>,
) -> Result<(Arc<InMemorySolicitudRepository>, bool), AppError> {
    match vitrina_csv {
        Some(path) => {
            let records = VitrinaImporter::from_path(path)?;
            let repository = InMemorySolicitudRepository::with_records(records);
            Ok((Arc::new(repository), true))
        }
        None => Ok((Arc::new(InMemorySolicitudRepository::seeded()), false)),
    }
}

fn render_data_source(imported: bool) {
    if imported {
        println!("Data source: vitrina CSV export");
    } else {
        println!("Data source: demo records");
    }
}

fn render_board(solicitudes: &[Solicitud]) {
    if solicitudes.is_empty() {
        println!("\nBoard: no solicitudes match the active filters");
        return;
    }

    println!("\nBoard ({} visible)", solicitudes.len());
    for solicitud in solicitudes {
        println!(
            "- {} | {} | {} | {} | {} | {}",
            solicitud.id.0,
            solicitud.cliente,
            solicitud.banco,
            solicitud.monto,
            solicitud.estado.label(),
            solicitud.fecha
        );
    }
}

fn render_statistics(statistics: &SolicitudStatistics) {
    println!("\nPipeline statistics");
    println!(
        "- {} solicitudes | {} en viabilidad | {} pre-aprobadas | {} aprobadas",
        statistics.total,
        statistics.count(SolicitudStatus::Viabilidad),
        statistics.count(SolicitudStatus::PreAprobado),
        statistics.count(SolicitudStatus::Aprobado)
    );
    println!("Status breakdown:");
    for estado in SolicitudStatus::ordered() {
        println!("  - {}: {}", estado.label(), statistics.count(estado));
    }
}

fn render_workbench(snapshot: &WorkbenchSnapshot) {
    println!(
        "Case {} | {} | step {} of 8 | {}% complete",
        snapshot.solicitud.id.0,
        snapshot.solicitud.cliente,
        snapshot.progreso.actual.numero(),
        snapshot.progreso.progreso
    );
    println!("SLA remaining: {}", snapshot.sla_restante);

    println!("\nPipeline steps");
    for paso in &snapshot.progreso.pasos {
        println!("- {}. {} | {}", paso.numero, paso.nombre, paso.estado.label());
    }

    println!("\nBank submissions");
    for banco in &snapshot.bancos {
        let hora = banco
            .hora
            .map(|hora| format!(" at {hora}"))
            .unwrap_or_default();
        let detalle = banco
            .detalle
            .as_deref()
            .map(|detalle| format!(" ({detalle})"))
            .unwrap_or_default();
        println!("- {} | {}{}{}", banco.banco, banco.descripcion, hora, detalle);
    }

    println!("\nDocuments");
    for documento in &snapshot.documentos {
        let estado = if documento.subido { "uploaded" } else { "pending" };
        println!("- {} | {} | {}", documento.nombre, documento.tamano, estado);
    }

    println!("\nActivity feed");
    for entry in &snapshot.actividad {
        println!("- {} | {}", entry.hora, entry.actividad);
    }

    println!("\nBank eligibility");
    for banco in &snapshot.elegibilidad {
        println!(
            "- {} | score {} | coverage {}%",
            banco.banco, banco.score, banco.cobertura
        );
    }

    println!(
        "\nSubmission plan: {:?} mode | banks {}",
        snapshot.plan.modo,
        snapshot.plan.selected_banks().join(", ")
    );
    println!(
        "Case summary: {} property | {} financed | {} term | {} | {}",
        snapshot.resumen.valor_inmueble,
        snapshot.resumen.financiacion,
        snapshot.resumen.plazo,
        snapshot.resumen.telefono,
        snapshot.resumen.email
    );
}
