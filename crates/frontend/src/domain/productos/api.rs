use contracts::domain::productos::{CreateProductoDto, Producto, UpdateProductoDto};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

pub async fn fetch_productos() -> Result<Vec<Producto>, String> {
    let response = Request::get(&format!("{}/api/productos", api_base()))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch productos: {}", response.status()));
    }

    response
        .json::<Vec<Producto>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_producto(dto: CreateProductoDto) -> Result<i64, String> {
    let response = Request::post(&format!("{}/api/productos", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create producto: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_i64().unwrap_or_default())
}

pub async fn update_producto(dto: UpdateProductoDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/productos/{}", api_base(), dto.id))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update producto: {}", response.status()));
    }

    Ok(())
}

pub async fn delete_producto(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/productos/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete producto: {}", response.status()));
    }

    Ok(())
}
