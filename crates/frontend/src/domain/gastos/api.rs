use contracts::domain::gastos::{CreateGastoDto, Gasto, UpdateGastoDto};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

pub async fn fetch_gastos() -> Result<Vec<Gasto>, String> {
    let response = Request::get(&format!("{}/api/gastos", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch gastos: {}", response.status()));
    }

    response
        .json::<Vec<Gasto>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_gasto(dto: CreateGastoDto) -> Result<i64, String> {
    let response = Request::post(&format!("{}/api/gastos", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create gasto: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_i64().unwrap_or_default())
}

pub async fn update_gasto(dto: UpdateGastoDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/gastos/{}", api_base(), dto.id))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update gasto: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_gasto(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/gastos/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete gasto: {}", response.status()));
    }

    Ok(())
}
