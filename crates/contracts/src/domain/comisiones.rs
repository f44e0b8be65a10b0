use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comision {
    pub id: i64,
    pub empleado_id: i64,
    pub empleado_nombre: Option<String>,
    pub venta_id: i64,
    pub venta_folio: Option<String>,
    pub porcentaje: f64,
    pub monto: f64,
    pub fecha: String,
    pub pagada: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarcarComisionPagadaDto {
    pub id: i64,
    pub pagada: bool,
}
