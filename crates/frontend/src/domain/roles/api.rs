use contracts::domain::roles::{CreateRolDto, Rol, UpdateRolDto};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

/// Fetch all roles with their permission assignments
pub async fn fetch_roles() -> Result<Vec<Rol>, String> {
    let response = Request::get(&format!("{}/api/roles", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch roles: {}", response.status()));
    }

    response
        .json::<Vec<Rol>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new role
pub async fn create_rol(dto: CreateRolDto) -> Result<i64, String> {
    let response = Request::post(&format!("{}/api/roles", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create rol: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_i64().unwrap_or_default())
}

/// Update role and its permission assignments
pub async fn update_rol(dto: UpdateRolDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/roles/{}", api_base(), dto.id))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update rol: {}", response.status()));
    }

    Ok(())
}

/// Delete role
pub async fn delete_rol(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/roles/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete rol: {}", response.status()));
    }

    Ok(())
}
