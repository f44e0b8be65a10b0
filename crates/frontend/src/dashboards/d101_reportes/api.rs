use contracts::dashboards::d100_resumen::ResumenResponse;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

pub async fn get_resumen(meses: u32) -> Result<ResumenResponse, String> {
    let response = Request::get(&format!(
        "{}/api/reportes/resumen?meses={}",
        api_base(),
        meses
    ))
    .credentials(RequestCredentials::Include)
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch resumen: {}", response.status()));
    }

    response
        .json::<ResumenResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Download the backend-rendered PDF report for a period. The rendering
/// itself lives server-side; here we only move bytes.
pub async fn descargar_reporte(meses: u32) -> Result<Vec<u8>, String> {
    let response = Request::get(&format!("{}/api/reportes/pdf?meses={}", api_base(), meses))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch reporte: {}", response.status()));
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))
}
