//! The main Error type for httperr

use crate::cause::{Cause, HttpStatus, ReasonPhrase};
use crate::status::{normalize_status, reason_of};
use http::StatusCode;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// An error annotated with an HTTP status, a message and the call site.
///
/// This error type provides:
/// - `cause`: The underlying error, never absent (see [`BASE_NIL`](crate::BASE_NIL))
/// - `status`: HTTP status code, always one with a standard reason phrase
/// - `message`: Context added by this layer
/// - `caller`: `file:line` of the code that built the error
///
/// # Example
///
/// ```rust
/// use httperr::Error;
/// use std::io;
///
/// let missing = io::Error::new(io::ErrorKind::NotFound, "no rows");
/// let err = Error::new(missing, 404, "user not found");
/// let err = Error::wrap(err, "loading profile");
///
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.message(), "loading profile");
/// assert!(err.to_string().starts_with(r#"{"cause":{"error":"no rows""#));
/// ```
#[derive(Default)]
pub struct Error {
    cause: Cause,
    status: u16,
    message: String,
    caller: Option<&'static Location<'static>>,
}

impl Error {
    /// Annotate `cause` with a status code and a message.
    ///
    /// Unknown status codes become 500. The status of `cause` is ignored.
    #[track_caller]
    pub fn new<C, S>(cause: C, status: S, message: impl Into<String>) -> Self
    where
        C: Into<Cause>,
        S: TryInto<u16>,
    {
        Self::build(cause.into(), normalize_status(status), message.into(), Location::caller())
    }

    /// Add a message on top of `cause`.
    ///
    /// The status is inherited when `cause` carries one (another [`Error`],
    /// or a [`Cause::coded`] value); otherwise it is 500.
    #[track_caller]
    pub fn wrap<C>(cause: C, message: impl Into<String>) -> Self
    where
        C: Into<Cause>,
    {
        Self::wrap_at(cause.into(), message.into(), Location::caller())
    }

    /// Synthesize an error from a status code alone.
    ///
    /// Both the cause and the message are the reason phrase, e.g. "Not Found".
    #[track_caller]
    pub fn from_status<S: TryInto<u16>>(status: S) -> Self {
        Self::from_status_at(normalize_status(status), Location::caller())
    }

    pub(crate) fn build(
        cause: Cause,
        status: u16,
        message: String,
        caller: &'static Location<'static>,
    ) -> Self {
        if cause.is_nil() {
            tracing::trace!(caller = %caller, "nil cause, substituting sentinel");
        }

        Self {
            cause,
            status,
            message,
            caller: Some(caller),
        }
    }

    pub(crate) fn wrap_at(cause: Cause, message: String, caller: &'static Location<'static>) -> Self {
        // inherited as stored on the cause
        let status = normalize_status(cause.status().unwrap_or(0));
        Self::build(cause, status, message, caller)
    }

    pub(crate) fn from_status_at(status: u16, caller: &'static Location<'static>) -> Self {
        let reason = reason_of(status);
        Self::build(
            Cause::from(ReasonPhrase(reason)),
            normalize_status(status),
            reason.to_string(),
            caller,
        )
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// The underlying error, or the sentinel if none was given
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.cause.get()
    }

    /// Normalized status code
    pub fn status_code(&self) -> u16 {
        normalize_status(self.status)
    }

    /// Normalized status as an [`http::StatusCode`]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the message added by this layer
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `basename:line` of the construction site, `???:0` if unknown
    pub fn caller(&self) -> String {
        match self.caller {
            Some(location) => {
                let file = Path::new(location.file())
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(location.file());
                format!("{}:{}", file, location.line())
            }
            None => "???:0".to_string(),
        }
    }

    /// Full source location of the construction site
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.caller
    }

    /// The innermost error of the chain
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self.cause();
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    pub(crate) fn raw_status(&self) -> u16 {
        self.status
    }
}

impl HttpStatus for Error {
    fn status_code(&self) -> u16 {
        self.raw_status()
    }
}

// =============================================================================
// Rendering
// =============================================================================

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Error", 3)?;
        match self.cause.as_annotated() {
            Some(inner) => state.serialize_field("cause", inner)?,
            None => state.serialize_field("error", &self.cause().to_string())?,
        }
        state.serialize_field("message", &self.message)?;
        state.serialize_field("caller", &self.caller())?;
        state.end()
    }
}

/// Single-line JSON object, nested through `cause` for each wrapped layer
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} at {}", self.status(), self.caller())?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        writeln!(f)?;
        writeln!(f, "    Cause: {:?}", self.cause)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause())
    }
}
