use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventoAuditoria {
    pub id: i64,
    pub usuario_correo: Option<String>,
    pub accion: String,
    pub entidad: String,
    /// Payload libre del evento: el backend guarda el diff o los campos
    /// afectados como JSON arbitrario.
    pub detalle: Option<serde_json::Value>,
    pub fecha: String,
}
