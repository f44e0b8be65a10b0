use contracts::domain::auditoria::EventoAuditoria;
use contracts::shared::Paginado;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_base;

/// Fetch one page of the audit trail. Always paginated server-side; the
/// trail is append-only and can be large.
pub async fn fetch_eventos(
    page: usize,
    page_size: usize,
    query: &str,
) -> Result<Paginado<EventoAuditoria>, String> {
    let mut url = format!(
        "{}/api/auditoria?page={}&page_size={}",
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
        return Err(format!("Failed to fetch auditoria: {}", response.status()));
    }

    response
        .json::<Paginado<EventoAuditoria>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
