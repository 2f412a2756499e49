//! DTOs for short code expansion.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub original_url: String,
}
