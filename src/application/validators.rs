use crate::app_error::{AppError, AppResult};

/// Parses the party size from the reservation form.
///
/// Blank or absent input means "not given". Anything else must be a
/// non-negative whole number; the request is rejected otherwise rather than
/// storing a coerced value.
pub fn parse_guests(raw: Option<&str>) -> AppResult<Option<i32>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<i32>() {
        Ok(n) if n >= 0 => Ok(Some(n)),
        _ => Err(AppError::InvalidInput(format!(
            "guests must be a whole number, got {raw:?}"
        ))),
    }
}
