//! Extension traits for building error chains inside `?` pipelines.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::{ResultExt, TrailResultExt};
//! use error_trail::TrailError;
//!
//! fn load_config() -> Result<String, TrailError> {
//!     std::fs::read_to_string("missing-config.toml")
//!         .trail(100201)
//!         .message("loading configuration")
//! }
//!
//! fn start() -> Result<String, TrailError> {
//!     load_config().spawn_err(100301, "startup aborted")
//! }
//!
//! let err = start().unwrap_err();
//! assert_eq!(err.code(), 100301);
//! assert_eq!(err.cause().map(TrailError::message), Some("loading configuration"));
//! ```

use core::fmt::Display;

use crate::types::alloc_type::{Box, ToString};
use crate::types::{AnyError, TrailError, Underlying};

/// Wraps foreign errors into a [`TrailError`].
pub trait ResultExt<T, E> {
    /// Wraps the error with `code`, capturing the stack at this call.
    fn trail(self, code: u32) -> Result<T, TrailError>;
}

impl<T, E: Into<AnyError>> ResultExt<T, E> for Result<T, E> {
    #[track_caller]
    #[inline]
    fn trail(self, code: u32) -> Result<T, TrailError> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(TrailError::build(Underlying::foreign(error), code, None)),
        }
    }
}

/// Operations on results that already carry a [`TrailError`].
pub trait TrailResultExt<T> {
    /// Replaces the error with a new node that takes it as its cause.
    fn spawn_err<D: Display>(self, code: u32, text: D) -> Result<T, TrailError>;

    /// Appends to the error's accumulated message.
    fn message<D: Display>(self, message: D) -> Result<T, TrailError>;

    /// Appends a lazily built message; `f` only runs on `Err`.
    fn message_with<F, D>(self, f: F) -> Result<T, TrailError>
    where
        F: FnOnce() -> D,
        D: Display;
}

impl<T> TrailResultExt<T> for Result<T, TrailError> {
    #[track_caller]
    #[inline]
    fn spawn_err<D: Display>(self, code: u32, text: D) -> Result<T, TrailError> {
        match self {
            Ok(value) => Ok(value),
            Err(cause) => {
                let underlying = Underlying::text(text.to_string());
                Err(TrailError::build(underlying, code, Some(Box::new(cause))))
            },
        }
    }

    #[inline]
    fn message<D: Display>(self, message: D) -> Result<T, TrailError> {
        self.map_err(|mut error| {
            error.with_message(message);
            error
        })
    }

    #[inline]
    fn message_with<F, D>(self, f: F) -> Result<T, TrailError>
    where
        F: FnOnce() -> D,
        D: Display,
    {
        self.map_err(|mut error| {
            error.with_message(f());
            error
        })
    }
}
