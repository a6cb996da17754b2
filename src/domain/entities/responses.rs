use serde::{Deserialize, Serialize};

/// Body returned by update and delete endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedRowsResponse {
    pub changed_rows: u64,
}
