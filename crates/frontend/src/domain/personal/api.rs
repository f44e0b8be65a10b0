use contracts::domain::personal::{CreateEmpleadoDto, Empleado, UpdateEmpleadoDto};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

pub async fn fetch_personal() -> Result<Vec<Empleado>, String> {
    let response = Request::get(&format!("{}/api/personal", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch personal: {}", response.status()));
    }

    response
        .json::<Vec<Empleado>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_empleado(dto: CreateEmpleadoDto) -> Result<i64, String> {
    let response = Request::post(&format!("{}/api/personal", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create empleado: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_i64().unwrap_or_default())
}

pub async fn update_empleado(dto: UpdateEmpleadoDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/personal/{}", api_base(), dto.id))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update empleado: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_empleado(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/personal/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete empleado: {}", response.status()));
    }

    Ok(())
}
