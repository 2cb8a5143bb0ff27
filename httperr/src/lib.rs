//! # httperr
//!
//! Errors annotated with an HTTP status code, a message and the call site,
//! keeping the original error as the cause.
//!
//! ## Design Philosophy
//!
//! - **Status**: Every error maps to a standard HTTP status (unknown codes become 500)
//! - **Message**: Each layer adds its own context
//! - **Caller**: The `file:line` that built the layer, for locating the cause
//! - **Cause**: The wrapped error stays reachable through `source()` and `downcast_ref`
//!
//! ## Usage
//!
//! ```rust
//! use httperr::{Error, ResultExt};
//!
//! fn find_user(id: u32) -> httperr::Result<String> {
//!     if id == 0 {
//!         return Err(Error::from_status(404));
//!     }
//!     "alice".parse::<String>().with_status(500, "decoding user")
//! }
//!
//! fn handler() -> httperr::Result<String> {
//!     let user = find_user(0).map_err(|err| Error::wrap(err, "loading profile"))?;
//!     Ok(user)
//! }
//!
//! let err = handler().unwrap_err();
//! assert_eq!(err.status_code(), 404);
//! assert_eq!(err.message(), "loading profile");
//! ```
//!
//! ## Principles
//!
//! - Construction never fails: a missing cause becomes [`BASE_NIL`], an invalid status becomes 500
//! - `Display` renders a JSON object, nested through `"cause"` for wrapped layers
//! - `wrap` inherits the status of a cause that carries one

mod cause;
mod error;
mod ext;
mod status;

pub use cause::{is_base_nil, BaseNilError, Cause, HttpStatus, ReasonPhrase, BASE_NIL};
pub use error::Error;
pub use ext::{OptionExt, ResultExt};
pub use status::{normalize_status, status_text, FALLBACK_STATUS};

pub use http;

/// Result type alias using httperr Error
pub type Result<T> = std::result::Result<T, Error>;
