//! Client-side gate applied to raw tracking input before any lookup.

use thiserror::Error;

pub const TRACKING_ID_PREFIX: &str = "BRG-";
const TRACKING_ID_DIGITS: usize = 6;

/// Placeholder shown in the tracking input.
pub const TRACKING_ID_HINT: &str = "ENTER TRACKING NUMBER (e.g. BRG-778899)";

/// Shown whenever a lookup comes back empty, whatever the reason.
pub const NOT_FOUND_MESSAGE: &str = "ID verification failed. Ensure the format matches BRG-XXXXXX.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejected {
    #[error("tracking number is empty")]
    Empty,
}

/// Trims and upper-cases raw input. Blank input never reaches a lookup.
pub fn normalize_tracking_input(raw: &str) -> Result<String, InputRejected> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputRejected::Empty);
    }
    Ok(trimmed.to_uppercase())
}

/// `BRG-` followed by six digits. Advisory only: lookups are issued for
/// identifiers that fail this check too.
pub fn is_conventional_format(tracking_id: &str) -> bool {
    tracking_id
        .strip_prefix(TRACKING_ID_PREFIX)
        .map(|digits| {
            digits.len() == TRACKING_ID_DIGITS && digits.bytes().all(|b| b.is_ascii_digit())
        })
        .unwrap_or(false)
}

/// Heads-up for identifiers outside the `BRG-XXXXXX` convention. The lookup
/// still goes ahead.
pub fn convention_notice(tracking_id: &str) -> Option<String> {
    (!is_conventional_format(tracking_id)).then(|| {
        format!("{tracking_id} does not follow the BRG-XXXXXX format. Searching anyway.")
    })
}
