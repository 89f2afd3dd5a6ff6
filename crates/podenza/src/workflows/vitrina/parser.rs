use std::io::Read;

use chrono::NaiveDate;
use serde::Deserialize;

use super::VitrinaImportError;
use crate::workflows::solicitudes::{Solicitud, SolicitudId, SolicitudStatus};

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<VitrinaRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for row in csv_reader.deserialize::<VitrinaRow>() {
        rows.push(row?);
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
pub(crate) struct VitrinaRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Cedula")]
    cedula: String,
    #[serde(rename = "Cliente")]
    cliente: String,
    #[serde(rename = "Asesor")]
    asesor: String,
    #[serde(rename = "Afiliado")]
    afiliado: String,
    #[serde(rename = "Vitrina")]
    vitrina: String,
    #[serde(rename = "Banco")]
    banco: String,
    #[serde(rename = "Monto")]
    monto: String,
    #[serde(rename = "Estado")]
    estado: String,
    #[serde(rename = "Fecha")]
    fecha: String,
    #[serde(rename = "Producto")]
    producto: String,
}

impl VitrinaRow {
    pub(crate) fn into_solicitud(self, row: usize) -> Result<Solicitud, VitrinaImportError> {
        let Some(estado) = SolicitudStatus::from_id(&self.estado) else {
            return Err(VitrinaImportError::InvalidStatus {
                row,
                estado: self.estado,
            });
        };

        let Ok(fecha) = NaiveDate::parse_from_str(&self.fecha, "%Y-%m-%d") else {
            return Err(VitrinaImportError::InvalidDate {
                row,
                fecha: self.fecha,
            });
        };

        Ok(Solicitud {
            id: SolicitudId(self.id),
            cedula: self.cedula,
            cliente: self.cliente,
            asesor: self.asesor,
            afiliado: parse_afiliado(&self.afiliado),
            vitrina: self.vitrina,
            banco: self.banco,
            monto: self.monto,
            estado,
            fecha,
            producto: self.producto,
        })
    }
}

fn parse_afiliado(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    normalized == "sí" || normalized == "si"
}

#[cfg(test)]
pub(crate) fn parse_afiliado_for_tests(value: &str) -> bool {
    parse_afiliado(value)
}
