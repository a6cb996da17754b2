use uuid::Uuid;

use crate::errors::AppError;

/// Rejects an empty (or whitespace-only) id with `message`.
pub fn require_id<'a>(id: &'a str, message: &str) -> Result<&'a str, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_param(message));
    }
    Ok(trimmed)
}

/// Parses a record id. An id that is not a UUID cannot match any row, so
/// callers report it exactly like a missing record.
pub fn parse_record_id(id: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::invalid_param(not_found))
}
