use contracts::domain::roles::Permiso;
use gloo_net::http::Request;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

#[derive(Debug, Clone, Serialize)]
pub struct PermisoDto {
    pub clave: String,
    pub descripcion: Option<String>,
}

/// Fetch the full permission catalog
pub async fn fetch_permisos() -> Result<Vec<Permiso>, String> {
    let response = Request::get(&format!("{}/api/permisos", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch permisos: {}", response.status()));
    }

    response
        .json::<Vec<Permiso>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new permission key
pub async fn create_permiso(dto: PermisoDto) -> Result<i64, String> {
    let response = Request::post(&format!("{}/api/permisos", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create permiso: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_i64().unwrap_or_default())
}

/// Update permission key/description
pub async fn update_permiso(id: i64, dto: PermisoDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/permisos/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update permiso: {}", response.status()));
    }

    Ok(())
}

/// Delete permission
pub async fn delete_permiso(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/permisos/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete permiso: {}", response.status()));
    }

    Ok(())
}
