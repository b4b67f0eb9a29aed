//! Request validation helpers shared by the HTTP handlers.
//!
//! Everything here returns [`CoreError::Validation`] so handlers can `?` the
//! result straight into a 400 response.

use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// Require that a string field is present and not whitespace-only.
pub fn require_non_blank(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(CoreError::Validation(format!("{field} must not be blank"))),
    }
}

/// Run `validator` derive rules on a DTO, flattening the report into one message.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), CoreError> {
    dto.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .next()
                    .unwrap_or_else(|| {
                        errs.first()
                            .map(|e| e.code.to_string())
                            .unwrap_or_else(|| "invalid".to_string())
                    });
                format!("{field}: {detail}")
            })
            .collect();
        fields.sort();
        CoreError::Validation(fields.join("; "))
    })
}

/// Parse a client-supplied id list for batch operations.
///
/// Blank entries and entries that are not UUIDs are dropped rather than
/// rejected; an id that cannot exist cannot be deleted either. Duplicates are
/// removed while keeping first-seen order.
pub fn parse_batch_ids(raw: &[String]) -> Vec<DbId> {
    let mut ids: Vec<DbId> = Vec::with_capacity(raw.len());
    for entry in raw {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.parse::<DbId>() {
            Ok(id) if !ids.contains(&id) => ids.push(id),
            Ok(_) => {}
            Err(_) => tracing::debug!(id = trimmed, "Skipping malformed id in batch request"),
        }
    }
    ids
}
