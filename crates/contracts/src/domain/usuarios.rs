use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    pub rol_id: Option<i64>,
    pub rol_nombre: Option<String>,
    pub activo: bool,
    pub creado_en: String,
    pub ultimo_acceso: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUsuarioDto {
    pub nombre: String,
    pub correo: String,
    pub contrasena: String,
    pub rol_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUsuarioDto {
    pub id: i64,
    pub nombre: String,
    pub correo: String,
    pub rol_id: Option<i64>,
    pub activo: bool,
}
