use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mensaje {
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    pub asunto: Option<String>,
    pub contenido: String,
    pub leido: bool,
    pub recibido_en: String,
}
