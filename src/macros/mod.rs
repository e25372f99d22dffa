//! Formatting shorthands for building and annotating error chains.
//!
//! - [`macro@crate::trail`] - Creates a root [`TrailError`](crate::TrailError) from a
//!   code and a format string.
//! - [`macro@crate::spawn`] - Creates a node that takes an existing `TrailError` as
//!   its cause, with formatted text.
//! - [`macro@crate::with_message`] - Appends a formatted message to a node.
//!
//! The stack of the new node is captured where the macro is invoked.
//!
//! # Examples
//!
//! ```
//! use error_trail::{spawn, trail, with_message};
//!
//! let host = "db-1";
//! let mut err = trail!(100101, "connect to {} failed", host);
//! with_message!(&mut err, "Database error");
//!
//! let outer = spawn!(err, 100301, "error change err_code to {}", 100301);
//! assert_eq!(outer.cause().map(|c| c.to_string()), Some("Database error".to_string()));
//! ```

/// Creates a root [`TrailError`](crate::TrailError) from a code and a format string.
///
/// # Examples
///
/// ```
/// use error_trail::trail;
///
/// let err = trail!(100101, "connect to {}:{} failed", "localhost", 5432);
/// assert_eq!(err.code(), 100101);
/// assert_eq!(err.to_string(), "connect to localhost:5432 failed");
/// ```
#[macro_export]
macro_rules! trail {
    ($code:expr, $($arg:tt)+) => {
        $crate::TrailError::new($code, format_args!($($arg)+))
    };
}

/// Creates a node with `$err` as its cause and formatted text.
///
/// # Examples
///
/// ```
/// use error_trail::{spawn, trail};
///
/// let inner = trail!(100101, "connect failed");
/// let outer = spawn!(inner, 100301, "retry {} exhausted", 3);
/// assert_eq!(outer.to_string(), "retry 3 exhausted");
/// assert_eq!(outer.chain().depth(), 2);
/// ```
#[macro_export]
macro_rules! spawn {
    ($err:expr, $code:expr, $($arg:tt)+) => {
        $crate::TrailError::spawn($err, $code, format_args!($($arg)+))
    };
}

/// Appends a formatted message to a node.
///
/// Accepts either `&mut <place>` or an `Option<&mut E>`; `None` is a no-op.
///
/// # Panics
///
/// Panics if the target is not a [`TrailError`](crate::TrailError).
///
/// # Examples
///
/// ```
/// use error_trail::{trail, with_message};
///
/// let mut err = trail!(100101, "connect failed");
/// with_message!(&mut err, "attempt {}", 1);
/// with_message!(&mut err, "attempt {}", 2);
/// assert_eq!(err.message(), "attempt 1: attempt 2");
///
/// let mut missing: Option<error_trail::TrailError> = None;
/// with_message!(missing.as_mut(), "never recorded");
/// ```
#[macro_export]
macro_rules! with_message {
    (&mut $err:expr, $($arg:tt)+) => {
        $crate::erased::with_message(Some(&mut $err), format_args!($($arg)+))
    };
    ($err:expr, $($arg:tt)+) => {
        $crate::erased::with_message($err, format_args!($($arg)+))
    };
}
