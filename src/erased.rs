//! Nil-aware operations on type-erased errors.
//!
//! These functions accept `Option` inputs so that "no error" flows through
//! unchanged: `None` in, `None` out (or nothing done). Passing a value that is
//! not a [`TrailError`] to [`spawn`] or [`with_message`] is a defect in the
//! calling code and panics.
//!
//! # Examples
//!
//! ```
//! use error_trail::{erased, TrailError};
//!
//! assert!(erased::wrap(None::<std::io::Error>, 100201).is_none());
//!
//! let inner: Option<TrailError> = Some(TrailError::new(100101, "connect failed"));
//! let mut outer = erased::spawn(inner, 100301, "error change err_code");
//! erased::with_message(outer.as_mut(), "Database error");
//!
//! let outer = outer.unwrap();
//! assert_eq!(outer.message(), "Database error");
//! let inner = erased::unwrap(&outer).map(|cause| cause.to_string());
//! assert_eq!(inner.as_deref(), Some("connect failed"));
//! ```

use core::error::Error;
use core::fmt::Display;

use crate::traits::ChainCapable;
use crate::types::alloc_type::ToString;
use crate::types::{AnyError, TrailError, Underlying};

/// Wraps a foreign error with `code`; `None` yields `None`.
#[track_caller]
#[inline]
pub fn wrap<E: Into<AnyError>>(error: Option<E>, code: u32) -> Option<TrailError> {
    let error = error?;
    Some(TrailError::build(Underlying::foreign(error), code, None))
}

/// Creates a node whose cause is `error`; `None` yields `None`.
///
/// # Panics
///
/// Panics if `error` is not a [`TrailError`].
#[track_caller]
pub fn spawn<E, D>(error: Option<E>, code: u32, text: D) -> Option<TrailError>
where
    E: Into<AnyError>,
    D: Display,
{
    let error: AnyError = error?.into();
    match error.downcast::<TrailError>() {
        Ok(cause) => {
            Some(TrailError::build(Underlying::text(text.to_string()), code, Some(cause)))
        },
        Err(other) => not_chain_capable("spawn", &*other),
    }
}

/// Appends to the node's accumulated message; `None` is a no-op.
///
/// # Panics
///
/// Panics if `error` is not a [`TrailError`], or is one held by an `Arc`
/// with other owners.
#[track_caller]
pub fn with_message<E, D>(error: Option<&mut E>, message: D)
where
    E: ChainCapable + Display + ?Sized,
    D: Display,
{
    let Some(error) = error else {
        return;
    };
    if let Some(node) = error.as_trail_mut() {
        node.with_message(message);
        return;
    }
    if error.is_chain_capable() {
        panic!("with_message: TrailError is shared and cannot be modified")
    }
    not_chain_capable("with_message", &*error)
}

/// The immediate cause of `error`, one level down.
///
/// A foreign error wrapped by [`wrap`] is not a cause.
#[inline]
pub fn unwrap<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    error.source()
}

/// Follows causes and returns the last value that still has one.
///
/// For a chain `A -> B -> C` where `C` has no cause, this returns `B`. A value
/// without any cause is returned unchanged.
pub fn cause<'a>(error: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = error;
    while let Some(next) = current.source() {
        if next.source().is_none() {
            break;
        }
        current = next;
    }
    current
}

#[cold]
#[track_caller]
fn not_chain_capable<T: Display + ?Sized>(operation: &str, found: &T) -> ! {
    panic!("{}: expected a TrailError, got `{}`", operation, found)
}
