//! Tracing integration for error-trail.
//!
//! A failure should be logged once, where it originates; frames that only
//! forward the error should not log it again. [`TrailLogExt::log_origin`] and
//! [`ResultLogExt::log_err`] emit that single record with the structured
//! rendering of the whole chain.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! error-trail = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::alloc_type::String;
use crate::types::TrailError;

/// Emits one `ERROR` event for a node.
///
/// # Example
///
/// ```rust
/// use error_trail::tracing_ext::TrailLogExt;
/// use error_trail::TrailError;
///
/// let err = TrailError::new(100101, "connect failed");
/// err.log_origin();
/// ```
pub trait TrailLogExt {
    fn log_origin(&self);
}

impl TrailLogExt for TrailError {
    fn log_origin(&self) {
        tracing::error!(
            code = self.code(),
            depth = self.chain().depth(),
            error = %self,
            "{:#}",
            self
        );
    }
}

/// Logs the error of a `Result` at its origin and passes it through.
pub trait ResultLogExt<T> {
    /// # Example
    ///
    /// ```rust
    /// use error_trail::tracing_ext::ResultLogExt;
    /// use error_trail::TrailError;
    ///
    /// fn connect() -> Result<(), TrailError> {
    ///     Err(TrailError::new(100101, "connect failed")).log_err()
    /// }
    ///
    /// assert!(connect().is_err());
    /// ```
    fn log_err(self) -> Self;
}

impl<T> ResultLogExt<T> for Result<T, TrailError> {
    #[inline]
    fn log_err(self) -> Self {
        if let Err(error) = &self {
            error.log_origin();
        }
        self
    }
}

/// Appends the active span's name to the error's message.
pub trait ResultSpanExt<T> {
    /// Appends `in span '<name>'` for the current span.
    ///
    /// # Example
    ///
    /// ```rust
    /// use error_trail::tracing_ext::ResultSpanExt;
    /// use error_trail::TrailError;
    ///
    /// let result: Result<(), TrailError> = Err(TrailError::new(100101, "connect failed"));
    /// let err = result.with_current_span().unwrap_err();
    /// assert!(err.message().contains("span"));
    /// ```
    fn with_current_span(self) -> Self;

    /// Appends `in span '<name>'` for a specific span.
    fn with_span(self, span: &Span) -> Self;
}

impl<T> ResultSpanExt<T> for Result<T, TrailError> {
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    fn with_span(self, span: &Span) -> Self {
        self.map_err(|mut error| {
            error.with_message(span_label(span));
            error
        })
    }
}

fn span_label(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{}'", name)
}
