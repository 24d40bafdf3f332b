use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{LoadError, Result};
use crate::models::EmojiRecord;

/// Maximum accepted catalog body (10MB)
pub const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Parse a catalog body (a JSON array of emoji objects) into records
///
/// Elements that do not deserialize are logged and skipped. Returns an error if the body
/// is not a JSON array, exceeds [`MAX_BODY_SIZE`], or more than 50% of its elements fail.
pub fn parse_records(body: &str) -> Result<Vec<EmojiRecord>> {
    if body.len() > MAX_BODY_SIZE {
        return Err(LoadError::TooLarge { size: body.len(), max: MAX_BODY_SIZE });
    }

    let value: Value = serde_json::from_str(body)?;
    let Value::Array(items) = value else {
        return Err(LoadError::Parse("expected a JSON array of emoji records".to_string()));
    };

    let total = items.len();
    let mut records = Vec::with_capacity(total);
    let mut skipped_count = 0;

    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<EmojiRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed emoji record");
                skipped_count += 1;
            }
        }
    }

    if total > 0 && skipped_count * 2 > total {
        return Err(LoadError::Parse(format!(
            "too many malformed records: {} of {} failed",
            skipped_count, total
        )));
    }

    if skipped_count > 0 {
        debug!(parsed = records.len(), skipped = skipped_count, "parsed catalog with skips");
    }

    Ok(records)
}
