use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empleado {
    pub id: i64,
    pub nombre: String,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub especialidad: Option<String>,
    pub porcentaje_comision: f64,
    pub activo: bool,
    pub contratado_en: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmpleadoDto {
    pub nombre: String,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub especialidad: Option<String>,
    pub porcentaje_comision: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmpleadoDto {
    pub id: i64,
    pub nombre: String,
    pub correo: Option<String>,
    pub telefono: Option<String>,
    pub especialidad: Option<String>,
    pub porcentaje_comision: f64,
    pub activo: bool,
}
