use contracts::domain::usuarios::{CreateUsuarioDto, UpdateUsuarioDto, Usuario};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

/// Fetch all users
pub async fn fetch_usuarios() -> Result<Vec<Usuario>, String> {
    let response = Request::get(&format!("{}/api/usuarios", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch usuarios: {}", response.status()));
    }

    response
        .json::<Vec<Usuario>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new user
pub async fn create_usuario(dto: CreateUsuarioDto) -> Result<i64, String> {
    let response = Request::post(&format!("{}/api/usuarios", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create usuario: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_i64().unwrap_or_default())
}

/// Update user
pub async fn update_usuario(dto: UpdateUsuarioDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/usuarios/{}", api_base(), dto.id))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update usuario: {}", response.status()));
    }

    Ok(())
}

/// Delete user
pub async fn delete_usuario(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/usuarios/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete usuario: {}", response.status()));
    }

    Ok(())
}
