//! Extension traits for annotating `Result` and `Option` values in place

use crate::cause::Cause;
use crate::status::normalize_status;
use crate::Error;
use std::panic::Location;

/// Annotate the error side of a `Result`.
///
/// The recorded caller is the line calling the extension method.
///
/// ```rust
/// use httperr::ResultExt;
///
/// fn parse(input: &str) -> httperr::Result<u32> {
///     input.parse::<u32>().with_status(400, "id must be numeric")
/// }
///
/// let err = parse("abc").unwrap_err();
/// assert_eq!(err.status_code(), 400);
/// ```
pub trait ResultExt<T> {
    /// Like [`Error::new`]
    fn with_status<S: TryInto<u16>>(self, status: S, message: impl Into<String>) -> crate::Result<T>;

    /// Like [`Error::wrap`]
    fn wrap_err(self, message: impl Into<String>) -> crate::Result<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    #[track_caller]
    fn with_status<S: TryInto<u16>>(self, status: S, message: impl Into<String>) -> crate::Result<T> {
        let caller = Location::caller();
        self.map_err(|err| Error::build(err.into(), normalize_status(status), message.into(), caller))
    }

    #[track_caller]
    fn wrap_err(self, message: impl Into<String>) -> crate::Result<T> {
        let caller = Location::caller();
        self.map_err(|err| Error::wrap_at(err.into(), message.into(), caller))
    }
}

/// Turn a missing value into a status error.
pub trait OptionExt<T> {
    /// `None` becomes [`Error::from_status`]
    fn ok_or_status<S: TryInto<u16>>(self, status: S) -> crate::Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn ok_or_status<S: TryInto<u16>>(self, status: S) -> crate::Result<T> {
        let caller = Location::caller();
        self.ok_or_else(|| Error::from_status_at(normalize_status(status), caller))
    }
}
