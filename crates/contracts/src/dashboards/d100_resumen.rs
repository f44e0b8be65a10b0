use serde::{Deserialize, Serialize};

/// One month on the income/expense chart, `mes` in `YYYY-MM` form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuntoMensual {
    pub mes: String,
    pub ingresos: f64,
    pub gastos: f64,
}

/// Payload of `GET /api/reportes/resumen`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumenResponse {
    pub ventas_mes: f64,
    pub ventas_mes_anterior: f64,
    pub citas_hoy: u32,
    pub gastos_mes: f64,
    pub comisiones_pendientes: f64,
    pub por_mes: Vec<PuntoMensual>,
}
