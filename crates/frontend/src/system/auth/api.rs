use std::collections::HashSet;

use contracts::system::auth::{Identidad, LoginRequest, LoginResponse, SesionResponse};
use contracts::domain::roles::RolUsuarioResponse;
use gloo_net::http::Request;
use thiserror::Error;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

/// Failure of the session-check step. Any variant means "not authenticated":
/// the resolver redirects without retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("sin sesión activa ({0})")]
    NoAutenticado(u16),
    #[error("fallo de red: {0}")]
    Red(String),
    #[error("respuesta inválida: {0}")]
    Formato(String),
}

/// Failure of the role-lookup step. The resolver degrades to an empty
/// permission set instead of propagating any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("consulta de rol rechazada ({0})")]
    Rechazada(u16),
    #[error("fallo de red: {0}")]
    Red(String),
    #[error("respuesta inválida: {0}")]
    Formato(String),
}

/// Check the current cookie session and return the authenticated identity.
pub async fn obtener_sesion() -> Result<Identidad, AuthError> {
    let response = Request::get(&format!("{}/api/auth/sesion", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| AuthError::Red(e.to_string()))?;

    if !response.ok() {
        return Err(AuthError::NoAutenticado(response.status()));
    }

    let body = response
        .json::<SesionResponse>()
        .await
        .map_err(|e| AuthError::Formato(e.to_string()))?;

    Ok(body.usuario)
}

/// Fetch the permission keys of the role assigned to a user.
pub async fn permisos_de_usuario(usuario_id: i64) -> Result<HashSet<String>, LookupError> {
    let response = Request::get(&format!("{}/api/roles/usuario/{}", api_base(), usuario_id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| LookupError::Red(e.to_string()))?;

    if !response.ok() {
        return Err(LookupError::Rechazada(response.status()));
    }

    let body = response
        .json::<RolUsuarioResponse>()
        .await
        .map_err(|e| LookupError::Formato(e.to_string()))?;

    Ok(claves_de_respuesta(body))
}

/// Flatten the role-lookup envelope into the bare key set the gate consumes.
pub fn claves_de_respuesta(body: RolUsuarioResponse) -> HashSet<String> {
    body.data.permisos.into_iter().map(|p| p.clave).collect()
}

/// Login with email and password. The backend sets the session cookie.
pub async fn login(correo: String, contrasena: String) -> Result<Identidad, String> {
    let request = LoginRequest { correo, contrasena };

    let response = Request::post(&format!("{}/api/auth/login", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(body.usuario)
}

/// Logout (invalidate the server session).
pub async fn logout() -> Result<(), String> {
    let response = Request::post(&format!("{}/api/auth/logout", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::roles::{PermisoClave, RolAsignado};

    fn respuesta(claves: &[&str]) -> RolUsuarioResponse {
        RolUsuarioResponse {
            data: RolAsignado {
                id: Some(3),
                nombre: Some("recepción".to_string()),
                permisos: claves
                    .iter()
                    .map(|c| PermisoClave {
                        clave: c.to_string(),
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn aplana_el_sobre_de_rol() {
        let claves = claves_de_respuesta(respuesta(&["ver_usuarios", "gestionar_citas"]));
        assert!(claves.contains("ver_usuarios"));
        assert!(claves.contains("gestionar_citas"));
        assert_eq!(claves.len(), 2);
    }

    #[test]
    fn rol_sin_permisos_da_conjunto_vacio() {
        assert!(claves_de_respuesta(respuesta(&[])).is_empty());
    }

    #[test]
    fn claves_duplicadas_colapsan() {
        let claves = claves_de_respuesta(respuesta(&["ver_roles", "ver_roles"]));
        assert_eq!(claves.len(), 1);
    }
}
