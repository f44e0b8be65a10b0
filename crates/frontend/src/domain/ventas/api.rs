use contracts::domain::ventas::{CreateVentaDto, Venta};
use contracts::shared::Paginado;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

/// Fetch one page of sales. The history grows without bound, so this list
/// is paginated server-side, unlike the small catalogs.
pub async fn fetch_ventas(
    page: usize,
    page_size: usize,
    query: &str,
) -> Result<Paginado<Venta>, String> {
    let mut url = format!(
        "{}/api/ventas?page={}&page_size={}",
        api_base(),
        page,
        page_size
    );
    if !query.is_empty() {
        url.push_str(&format!("&q={}", urlencoding::encode(query)));
    }

    let response = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch ventas: {}", response.status()));
    }

    response
        .json::<Paginado<Venta>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a single sale with its line items
pub async fn fetch_venta(id: i64) -> Result<Venta, String> {
    let response = Request::get(&format!("{}/api/ventas/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch venta: {}", response.status()));
    }

    response
        .json::<Venta>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_venta(dto: CreateVentaDto) -> Result<i64, String> {
    let response = Request::post(&format!("{}/api/ventas", api_base()))
        .credentials(RequestCredentials::Include)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create venta: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_i64().unwrap_or_default())
}

pub async fn delete_venta(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/ventas/{}", api_base(), id))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete venta: {}", response.status()));
    }

    Ok(())
}
