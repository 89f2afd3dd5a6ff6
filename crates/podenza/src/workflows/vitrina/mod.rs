mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::workflows::solicitudes::{Solicitud, SolicitudId};

#[derive(Debug)]
pub enum VitrinaImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidStatus { row: usize, estado: String },
    InvalidDate { row: usize, fecha: String },
    DuplicateId { row: usize, id: String },
}

impl std::fmt::Display for VitrinaImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VitrinaImportError::Io(err) => write!(f, "failed to read vitrina export: {}", err),
            VitrinaImportError::Csv(err) => write!(f, "invalid vitrina CSV data: {}", err),
            VitrinaImportError::InvalidStatus { row, estado } => {
                write!(f, "row {}: unknown status '{}'", row, estado)
            }
            VitrinaImportError::InvalidDate { row, fecha } => {
                write!(f, "row {}: failed to parse '{}' as YYYY-MM-DD", row, fecha)
            }
            VitrinaImportError::DuplicateId { row, id } => {
                write!(f, "row {}: duplicate solicitud id '{}'", row, id)
            }
        }
    }
}

impl std::error::Error for VitrinaImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VitrinaImportError::Io(err) => Some(err),
            VitrinaImportError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VitrinaImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for VitrinaImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads vitrina CRM exports into solicitud records. Row numbers in errors
/// count data rows from one, the header excluded.
pub struct VitrinaImporter;

impl VitrinaImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Solicitud>, VitrinaImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Solicitud>, VitrinaImportError> {
        let mut solicitudes = Vec::new();
        let mut seen: HashSet<SolicitudId> = HashSet::new();

        for (index, row) in parser::parse_rows(reader)?.into_iter().enumerate() {
            let row_number = index + 1;
            let solicitud = row.into_solicitud(row_number)?;
            if !seen.insert(solicitud.id.clone()) {
                return Err(VitrinaImportError::DuplicateId {
                    row: row_number,
                    id: solicitud.id.0,
                });
            }
            solicitudes.push(solicitud);
        }

        Ok(solicitudes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::solicitudes::SolicitudStatus;
    use std::io::Cursor;

    const HEADER: &str =
        "ID,Cedula,Cliente,Asesor,Afiliado,Vitrina,Banco,Monto,Estado,Fecha,Producto\n";

    fn export_with_rows(rows: &str) -> String {
        format!("{HEADER}{rows}")
    }

    #[test]
    fn importer_reads_rows_in_order() {
        let csv = export_with_rows(
            "SOL-2024-101,1234567890,Empresa ABC SAS,Carlos Gómez,Sí,Vitrina Norte,Bancolombia,\"$50,000,000\",viabilidad,2024-01-15,Crédito Empresarial\n\
             SOL-2024-102,9876543210,Juan Pérez,Ana Rodríguez,No,Vitrina Sur,Davivienda,\"$15,000,000\",pre_aprobado,2024-01-14,Crédito Personal\n",
        );

        let solicitudes = VitrinaImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(solicitudes.len(), 2);
        assert_eq!(solicitudes[0].id.0, "SOL-2024-101");
        assert!(solicitudes[0].afiliado);
        assert_eq!(solicitudes[0].estado, SolicitudStatus::Viabilidad);
        assert_eq!(solicitudes[0].monto, "$50,000,000");
        assert_eq!(solicitudes[1].id.0, "SOL-2024-102");
        assert!(!solicitudes[1].afiliado);
        assert_eq!(solicitudes[1].estado, SolicitudStatus::PreAprobado);
        assert_eq!(solicitudes[1].fecha.to_string(), "2024-01-14");
    }

    #[test]
    fn importer_rejects_duplicate_ids() {
        let csv = export_with_rows(
            "SOL-2024-101,111,Cliente Uno,Asesor,No,Vitrina Norte,Bancolombia,$1,viabilidad,2024-01-15,Crédito Personal\n\
             SOL-2024-101,222,Cliente Dos,Asesor,No,Vitrina Sur,Davivienda,$2,viable,2024-01-16,Crédito Personal\n",
        );

        let error =
            VitrinaImporter::from_reader(Cursor::new(csv)).expect_err("expected duplicate error");

        match error {
            VitrinaImportError::DuplicateId { row, id } => {
                assert_eq!(row, 2);
                assert_eq!(id, "SOL-2024-101");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn importer_rejects_unknown_statuses() {
        let csv = export_with_rows(
            "SOL-2024-101,111,Cliente,Asesor,Sí,Vitrina Norte,Bancolombia,$1,rechazado,2024-01-15,Crédito Personal\n",
        );

        let error =
            VitrinaImporter::from_reader(Cursor::new(csv)).expect_err("expected status error");

        match error {
            VitrinaImportError::InvalidStatus { row, estado } => {
                assert_eq!(row, 1);
                assert_eq!(estado, "rechazado");
            }
            other => panic!("expected invalid status error, got {other:?}"),
        }
    }

    #[test]
    fn importer_rejects_malformed_dates() {
        let csv = export_with_rows(
            "SOL-2024-101,111,Cliente,Asesor,Sí,Vitrina Norte,Bancolombia,$1,viabilidad,15/01/2024,Crédito Personal\n",
        );

        let error =
            VitrinaImporter::from_reader(Cursor::new(csv)).expect_err("expected date error");

        match error {
            VitrinaImportError::InvalidDate { row, fecha } => {
                assert_eq!(row, 1);
                assert_eq!(fecha, "15/01/2024");
            }
            other => panic!("expected invalid date error, got {other:?}"),
        }
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = VitrinaImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            VitrinaImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn afiliado_accepts_both_spellings() {
        assert!(parser::parse_afiliado_for_tests("Sí"));
        assert!(parser::parse_afiliado_for_tests("si"));
        assert!(parser::parse_afiliado_for_tests("  SÍ "));
        assert!(!parser::parse_afiliado_for_tests("No"));
        assert!(!parser::parse_afiliado_for_tests(""));
        assert!(!parser::parse_afiliado_for_tests("yes"));
    }
}
