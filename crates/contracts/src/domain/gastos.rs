use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gasto {
    pub id: i64,
    pub concepto: String,
    pub categoria: String,
    pub monto: f64,
    pub fecha: String,
    pub registrado_por: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGastoDto {
    pub concepto: String,
    pub categoria: String,
    pub monto: f64,
    pub fecha: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGastoDto {
    pub id: i64,
    pub concepto: String,
    pub categoria: String,
    pub monto: f64,
    pub fecha: String,
}
