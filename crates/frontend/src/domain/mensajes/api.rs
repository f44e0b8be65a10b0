use contracts::domain::mensajes::Mensaje;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

pub async fn fetch_mensajes() -> Result<Vec<Mensaje>, String> {
    let response = Request::get(&format!("{}/api/mensajes", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch mensajes: {}", response.status()));
    }

    response
        .json::<Vec<Mensaje>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Mark a contact message as read
pub async fn marcar_leido(id: i64) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/mensajes/{}/leido", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update mensaje: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_mensaje(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/mensajes/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete mensaje: {}", response.status()));
    }

    Ok(())
}
