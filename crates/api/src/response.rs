//! Shared response envelopes for list-style endpoints.

use serde::Serialize;

/// Standard `{ "success": true, "data": ... }` envelope.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ListResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
