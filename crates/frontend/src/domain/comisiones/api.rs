use contracts::domain::comisiones::{Comision, MarcarComisionPagadaDto};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

pub async fn fetch_comisiones() -> Result<Vec<Comision>, String> {
    let response = Request::get(&format!("{}/api/comisiones", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch comisiones: {}", response.status()));
    }

    response
        .json::<Vec<Comision>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Toggle the paid flag of a commission
pub async fn marcar_pagada(dto: MarcarComisionPagadaDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/comisiones/{}/pagada", api_base(), dto.id))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update comision: {}", response.status()));
    }

    Ok(())
}
