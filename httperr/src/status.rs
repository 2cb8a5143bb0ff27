//! Status code normalization

use http::StatusCode;

/// Status used whenever a code has no standard reason phrase
pub const FALLBACK_STATUS: u16 = 500;

/// Look up the standard reason phrase for a status code.
///
/// Returns `None` for codes outside the registry, including values that do
/// not fit in a `u16` at all.
///
/// ```rust
/// assert_eq!(httperr::status_text(404), Some("Not Found"));
/// assert_eq!(httperr::status_text(0), None);
/// assert_eq!(httperr::status_text(-1), None);
/// ```
pub fn status_text<S: TryInto<u16>>(code: S) -> Option<&'static str> {
    let code = code.try_into().ok()?;
    StatusCode::from_u16(code)
        .ok()?
        .canonical_reason()
        .filter(|reason| !reason.is_empty())
}

/// Return `code` if it has a standard reason phrase, otherwise 500.
pub fn normalize_status<S: TryInto<u16>>(code: S) -> u16 {
    match code.try_into() {
        Ok(code) if status_text(code).is_some() => code,
        Ok(code) => {
            tracing::trace!(status = code, "unknown status code, using {}", FALLBACK_STATUS);
            FALLBACK_STATUS
        }
        Err(_) => {
            tracing::trace!("status code out of range, using {}", FALLBACK_STATUS);
            FALLBACK_STATUS
        }
    }
}

/// Reason phrase of a normalized status. Always non-empty.
pub(crate) fn reason_of(code: u16) -> &'static str {
    status_text(normalize_status(code)).unwrap_or("Internal Server Error")
}
