use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineaVenta {
    pub descripcion: String,
    pub cantidad: u32,
    pub precio_unitario: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venta {
    pub id: i64,
    pub folio: String,
    pub cliente: Option<String>,
    pub empleado_id: Option<i64>,
    pub empleado_nombre: Option<String>,
    pub metodo_pago: String,
    pub total: f64,
    pub fecha: String,
    #[serde(default)]
    pub lineas: Vec<LineaVenta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVentaDto {
    pub cliente: Option<String>,
    pub empleado_id: Option<i64>,
    pub metodo_pago: String,
    pub lineas: Vec<LineaVenta>,
}
