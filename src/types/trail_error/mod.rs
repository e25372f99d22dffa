//! Coded error node with an optional cause and a call-site stack.
//!
//! [`TrailError`] couples:
//! - an integer code, fixed at construction
//! - the underlying text, formatted at the call site or taken from a foreign error
//! - an append-only message
//! - an optional cause, which is itself a `TrailError`
//! - the stack captured where the node was created

use core::fmt::{Display, Write};

use crate::stack::{Frame, StackTrace};
use crate::types::alloc_type::{Box, String, ToString, Vec};
use crate::types::chain::{Chain, ChainLevel, LevelVec};
use crate::types::error_formatter::TrailFormatter;
use crate::types::underlying::{AnyError, Underlying};

mod traits;

/// Separator placed between appended messages.
pub const MESSAGE_SEPARATOR: &str = ": ";

/// Error node carrying a code, an appendable message, an optional cause and
/// the stack captured where it was created.
#[must_use]
#[derive(Debug)]
pub struct TrailError {
    pub(crate) underlying: Underlying,
    pub(crate) code: u32,
    pub(crate) message: String,
    pub(crate) cause: Option<Box<TrailError>>,
    pub(crate) stack: StackTrace,
}

impl TrailError {
    /// Creates a root node with no cause.
    ///
    /// Use [`trail!`](crate::trail) to build the text from a format string.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::TrailError;
    ///
    /// let err = TrailError::new(100101, "connect failed");
    /// assert_eq!(err.code(), 100101);
    /// assert!(err.cause().is_none());
    /// assert_eq!(err.to_string(), "connect failed");
    /// ```
    #[track_caller]
    #[inline]
    pub fn new<D: Display>(code: u32, text: D) -> Self {
        Self::build(Underlying::Text(text.to_string()), code, None)
    }

    /// Wraps a foreign error as opaque underlying text.
    ///
    /// The foreign error is not a cause: [`cause`](Self::cause) stays `None`
    /// and `source()` does not expose it.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::TrailError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "config.toml missing");
    /// let err = TrailError::wrap(io_err, 100201);
    /// assert_eq!(err.to_string(), "config.toml missing");
    /// assert!(err.underlying().is_foreign());
    /// ```
    #[track_caller]
    #[inline]
    pub fn wrap<E: Into<AnyError>>(error: E, code: u32) -> Self {
        Self::build(Underlying::foreign(error), code, None)
    }

    /// Creates a new node that takes `self` as its permanent cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::TrailError;
    ///
    /// let inner = TrailError::new(100101, "connect failed");
    /// let outer = inner.spawn(100301, "error change err_code");
    /// assert_eq!(outer.code(), 100301);
    /// assert_eq!(outer.cause().map(TrailError::code), Some(100101));
    /// ```
    #[track_caller]
    #[inline]
    pub fn spawn<D: Display>(self, code: u32, text: D) -> Self {
        Self::build(Underlying::Text(text.to_string()), code, Some(Box::new(self)))
    }

    #[track_caller]
    pub(crate) fn build(underlying: Underlying, code: u32, cause: Option<Box<TrailError>>) -> Self {
        Self {
            underlying,
            code,
            message: String::new(),
            cause,
            stack: StackTrace::capture(0),
        }
    }

    /// Appends to the accumulated message, joined with `": "`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trail::TrailError;
    ///
    /// let mut err = TrailError::new(100101, "connect failed");
    /// err.with_message("Database error").with_message("retry 3");
    /// assert_eq!(err.message(), "Database error: retry 3");
    /// ```
    pub fn with_message<D: Display>(&mut self, message: D) -> &mut Self {
        if self.message.is_empty() {
            self.message = message.to_string();
        } else {
            let _ = write!(self.message, "{}{}", MESSAGE_SEPARATOR, message);
        }
        self
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.code
    }

    #[inline]
    pub fn underlying(&self) -> &Underlying {
        &self.underlying
    }

    /// The accumulated message; empty until [`with_message`](Self::with_message) is called.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The immediate cause, one level down.
    #[inline]
    pub fn cause(&self) -> Option<&TrailError> {
        self.cause.as_deref()
    }

    /// Consumes the node, returning its cause.
    #[inline]
    pub fn into_cause(self) -> Option<TrailError> {
        self.cause.map(|cause| *cause)
    }

    /// The stack captured where this node was created.
    #[inline]
    pub fn stack(&self) -> &StackTrace {
        &self.stack
    }

    /// Walker over this node and its causes.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Per-level records, innermost (`#0`) first.
    #[inline]
    pub fn levels(&self) -> LevelVec<ChainLevel<'_>> {
        self.chain().levels()
    }

    /// Every node's frames, innermost node first.
    #[inline]
    pub fn merged_stack(&self) -> Vec<&Frame> {
        self.chain().merged_stack()
    }

    /// The deepest cause, or `self` when there is none.
    #[inline]
    pub fn innermost(&self) -> &TrailError {
        self.chain().innermost()
    }

    /// Returns `true` if `code` appears at any level of the chain.
    #[inline]
    pub fn contains_code(&self, code: u32) -> bool {
        self.chain().iter().any(|node| node.code == code)
    }

    /// Returns a builder for choosing the rendering.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> TrailFormatter<'_> {
        TrailFormatter::new(self)
    }

    /// Renders the error using a closure to configure the builder.
    #[must_use]
    pub fn format_with<F>(&self, f: F) -> String
    where
        F: FnOnce(TrailFormatter<'_>) -> TrailFormatter<'_>,
    {
        f(self.fmt()).to_string()
    }
}
