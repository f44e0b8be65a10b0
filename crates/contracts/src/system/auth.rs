use serde::{Deserialize, Serialize};

/// Identity returned by the session-check endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identidad {
    pub id: i64,
    pub correo: String,
}

/// Envelope of `GET /api/auth/sesion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SesionResponse {
    pub usuario: Identidad,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub correo: String,
    pub contrasena: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub usuario: Identidad,
}
