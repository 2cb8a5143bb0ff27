//! Causes: the errors an [`Error`](crate::Error) layers context on

use std::error::Error as StdError;
use std::fmt;

/// The error a cause reads back as when none was supplied.
///
/// Compare against it with [`is_base_nil`] or by equality:
///
/// ```rust
/// use httperr::{Cause, Error, BASE_NIL};
///
/// let err = Error::new(Cause::nil(), 0, "");
/// assert!(httperr::is_base_nil(err.cause()));
/// assert_eq!(err.cause().to_string(), BASE_NIL.to_string());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, thiserror::Error)]
#[error("httperr: base error is nil")]
pub struct BaseNilError;

/// Sentinel returned in place of a missing cause
pub static BASE_NIL: BaseNilError = BaseNilError;

/// Check whether `err` is the missing-cause sentinel
pub fn is_base_nil(err: &(dyn StdError + 'static)) -> bool {
    err.is::<BaseNilError>()
}

/// Leaf error carrying only a status reason phrase, e.g. "Not Found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{0}")]
pub struct ReasonPhrase(pub(crate) &'static str);

impl ReasonPhrase {
    /// The reason phrase text
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Errors that carry an HTTP status code.
///
/// [`Error::wrap`](crate::Error::wrap) inherits the status of causes with
/// this capability. Foreign types opt in through [`Cause::coded`].
pub trait HttpStatus {
    /// Status code as stored, not necessarily normalized.
    ///
    /// For [`Error`](crate::Error) this is the raw field, which can differ
    /// from the normalized [`Error::status_code`](crate::Error::status_code).
    fn status_code(&self) -> u16;
}

/// A possibly missing cause, with the status it carries (if any).
#[derive(Default)]
pub struct Cause {
    error: Option<anyhow::Error>,
    status: Option<u16>,
}

impl Cause {
    /// No cause. Reads back as [`BASE_NIL`].
    pub const fn nil() -> Self {
        Self {
            error: None,
            status: None,
        }
    }

    /// Build from an optional error; `None` behaves like [`Cause::nil`]
    pub fn from_option<E>(err: Option<E>) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        err.map_or_else(Self::nil, Self::from)
    }

    /// Build from an already type-erased error
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        // immediate type only; anyhow's own downcast looks through context layers
        let status = (*err).downcast_ref::<crate::Error>().map(|e| e.raw_status());
        Self {
            error: Some(err),
            status,
        }
    }

    /// Build from an error that carries its own status code
    pub fn coded<E>(err: E) -> Self
    where
        E: StdError + HttpStatus + Send + Sync + 'static,
    {
        let status = err.status_code();
        Self {
            error: Some(anyhow::Error::new(err)),
            status: Some(status),
        }
    }

    /// Whether no error was supplied
    pub fn is_nil(&self) -> bool {
        self.error.is_none()
    }

    /// Status carried by the cause, when it has one
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// The cause, with the sentinel standing in for a missing one
    pub fn get(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match &self.error {
            Some(err) => &**err,
            None => &BASE_NIL,
        }
    }

    /// The cause as an [`Error`](crate::Error), if it is one
    pub(crate) fn as_annotated(&self) -> Option<&crate::Error> {
        let err = self.error.as_ref()?;
        (**err).downcast_ref::<crate::Error>()
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::from_anyhow(anyhow::Error::new(err))
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(err) => write!(f, "{:?}", err),
            None => write!(f, "{:?}", BASE_NIL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug, thiserror::Error)]
    #[error("upstream rejected request")]
    struct Upstream(u16);

    impl HttpStatus for Upstream {
        fn status_code(&self) -> u16 {
            self.0
        }
    }

    #[test]
    fn test_nil_reads_as_sentinel() {
        let cause = Cause::nil();
        assert!(cause.is_nil());
        assert!(is_base_nil(cause.get()));
        assert_eq!(cause.get().to_string(), "httperr: base error is nil");
        assert_eq!(cause.status(), None);
    }

    #[test]
    fn test_default_is_nil() {
        assert!(Cause::default().is_nil());
    }

    #[test]
    fn test_present_cause_is_kept() {
        let cause = Cause::from(io::Error::new(io::ErrorKind::NotFound, "no such row"));
        assert!(!cause.is_nil());
        assert!(!is_base_nil(cause.get()));
        assert!(cause.get().is::<io::Error>());
        assert_eq!(cause.get().to_string(), "no such row");
    }

    #[test]
    fn test_present_cause_is_same_allocation() {
        let cause = Cause::from(io::Error::new(io::ErrorKind::Other, "boom"));
        let first = cause.get() as *const _ as *const ();
        let second = cause.get() as *const _ as *const ();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_option() {
        assert!(Cause::from_option::<io::Error>(None).is_nil());
        let cause = Cause::from_option(Some(io::Error::new(io::ErrorKind::Other, "x")));
        assert!(!cause.is_nil());
    }

    #[test]
    fn test_plain_error_carries_no_status() {
        let cause = Cause::from(io::Error::new(io::ErrorKind::Other, "x"));
        assert_eq!(cause.status(), None);
    }

    #[test]
    fn test_coded_carries_status() {
        let cause = Cause::coded(Upstream(502));
        assert_eq!(cause.status(), Some(502));
        assert!(cause.get().is::<Upstream>());
    }

    #[test]
    fn test_from_anyhow() {
        let cause = Cause::from_anyhow(anyhow::anyhow!("opaque failure"));
        assert_eq!(cause.get().to_string(), "opaque failure");
        assert_eq!(cause.status(), None);
    }

    #[test]
    fn test_from_anyhow_bare_error_carries_status() {
        let cause = Cause::from_anyhow(anyhow::Error::new(crate::Error::from_status(404)));
        assert_eq!(cause.status(), Some(404));
        assert!(cause.as_annotated().is_some());
    }

    #[test]
    fn test_from_anyhow_context_layer_carries_no_status() {
        use anyhow::Context;

        let err = Err::<(), _>(crate::Error::from_status(404))
            .context("while loading")
            .unwrap_err();
        let cause = Cause::from_anyhow(err);
        assert_eq!(cause.status(), None);
        assert!(cause.as_annotated().is_none());
        assert_eq!(cause.get().to_string(), "while loading");
    }

    #[test]
    fn test_coded_and_from_agree_on_raw_status() {
        let coded = Cause::coded(crate::Error::default());
        let plain = Cause::from(crate::Error::default());
        assert_eq!(coded.status(), Some(0));
        assert_eq!(coded.status(), plain.status());
    }

    #[test]
    fn test_sentinel_equality() {
        assert_eq!(BaseNilError, BASE_NIL);
        assert!(is_base_nil(&BASE_NIL));
    }

    #[test]
    fn test_reason_phrase_display() {
        let phrase = ReasonPhrase("Not Found");
        assert_eq!(phrase.to_string(), "Not Found");
        assert_eq!(phrase.as_str(), "Not Found");
    }
}
