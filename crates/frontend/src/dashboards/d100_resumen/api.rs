use contracts::dashboards::d100_resumen::ResumenResponse;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

/// Fetch the dashboard summary. `meses` controls the chart window.
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
