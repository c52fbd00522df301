use serde::{Deserialize, Serialize};

/// Response of `POST /api/export`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Location of the written file on the backend host
    pub path: String,
}
