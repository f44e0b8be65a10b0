use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoCita {
    Pendiente,
    Confirmada,
    Completada,
    Cancelada,
}

impl EstadoCita {
    pub fn etiqueta(&self) -> &'static str {
        match self {
            EstadoCita::Pendiente => "Pendiente",
            EstadoCita::Confirmada => "Confirmada",
            EstadoCita::Completada => "Completada",
            EstadoCita::Cancelada => "Cancelada",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cita {
    pub id: i64,
    pub cliente: String,
    pub telefono: Option<String>,
    pub servicio_id: i64,
    pub servicio_nombre: Option<String>,
    pub empleado_id: i64,
    pub empleado_nombre: Option<String>,
    pub inicia_en: String,
    pub estado: EstadoCita,
    pub notas: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCitaDto {
    pub cliente: String,
    pub telefono: Option<String>,
    pub servicio_id: i64,
    pub empleado_id: i64,
    pub inicia_en: String,
    pub notas: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCitaDto {
    pub id: i64,
    pub cliente: String,
    pub telefono: Option<String>,
    pub servicio_id: i64,
    pub empleado_id: i64,
    pub inicia_en: String,
    pub estado: EstadoCita,
    pub notas: Option<String>,
}
