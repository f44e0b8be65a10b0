use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permiso {
    pub id: i64,
    pub clave: String,
    pub descripcion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rol {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub permisos: Vec<Permiso>,
}

/// One permission entry inside the role-lookup envelope. Only `clave` is
/// guaranteed by the backend; the gate never reads anything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermisoClave {
    pub clave: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolAsignado {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: Option<String>,
    pub permisos: Vec<PermisoClave>,
}

/// Envelope of `GET /api/roles/usuario/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolUsuarioResponse {
    pub data: RolAsignado,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRolDto {
    pub nombre: String,
    pub descripcion: Option<String>,
    pub permiso_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRolDto {
    pub id: i64,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub permiso_ids: Vec<i64>,
}
