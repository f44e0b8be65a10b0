use contracts::domain::citas::{Cita, CreateCitaDto, UpdateCitaDto};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

pub async fn fetch_citas() -> Result<Vec<Cita>, String> {
    let response = Request::get(&format!("{}/api/citas", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch citas: {}", response.status()));
    }

    response
        .json::<Vec<Cita>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_cita(dto: CreateCitaDto) -> Result<i64, String> {
    let response = Request::post(&format!("{}/api/citas", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create cita: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_i64().unwrap_or_default())
}

pub async fn update_cita(dto: UpdateCitaDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/citas/{}", api_base(), dto.id))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update cita: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_cita(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/citas/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete cita: {}", response.status()));
    }

    Ok(())
}
