use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Servicio {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub duracion_minutos: u32,
    pub activo: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServicioDto {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub duracion_minutos: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateServicioDto {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub duracion_minutos: u32,
    pub activo: bool,
}
