use contracts::domain::servicios::{CreateServicioDto, Servicio, UpdateServicioDto};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

pub async fn fetch_servicios() -> Result<Vec<Servicio>, String> {
    let response = Request::get(&format!("{}/api/servicios", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch servicios: {}", response.status()));
    }

    response
        .json::<Vec<Servicio>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_servicio(dto: CreateServicioDto) -> Result<i64, String> {
    let response = Request::post(&format!("{}/api/servicios", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create servicio: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_i64().unwrap_or_default())
}

pub async fn update_servicio(dto: UpdateServicioDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/servicios/{}", api_base(), dto.id))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update servicio: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_servicio(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/servicios/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete servicio: {}", response.status()));
    }

    Ok(())
}
