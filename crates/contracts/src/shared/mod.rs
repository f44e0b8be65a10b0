use serde::{Deserialize, Serialize};

/// Server-side paginated list envelope. Endpoints that return the full set
/// (small catalogs) use a plain `Vec<T>` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginado<T> {
    pub data: Vec<T>,
    pub total: usize,
}
