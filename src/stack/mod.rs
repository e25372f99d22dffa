//! Call-stack snapshots taken when an error node is created.
//!
//! A [`StackTrace`] is captured exactly once, at the call site of the public
//! constructor, and is never re-captured or mutated afterwards. Frames are
//! symbolized during capture so reading a trace is a plain slice access.
//!
//! # Examples
//!
//! ```
//! use error_trail::stack::{CallerOnly, StackTrace};
//!
//! let trace = StackTrace::capture_with(&CallerOnly, 0);
//! assert_eq!(trace.len(), 1);
//! assert!(trace.frames()[0].file().ends_with(".rs"));
//! ```

use core::fmt::{self, Display};
use core::panic::Location;

use crate::types::alloc_type::{String, Vec};

mod capture;

pub use capture::{CallerOnly, DefaultCapture, StackCapture};
#[cfg(feature = "backtrace")]
pub use capture::BacktraceCapture;

/// Maximum number of frames kept per captured trace.
pub const MAX_DEPTH: usize = 32;

const UNKNOWN: &str = "unknown";

/// One resolved call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    file: String,
    line: u32,
    function: String,
}

impl Frame {
    #[inline]
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self { file: file.into(), line, function: function.into() }
    }

    /// Placeholder used when a frame cannot be resolved.
    #[inline]
    pub fn unknown() -> Self {
        Self::new(UNKNOWN, 0, UNKNOWN)
    }

    /// Frame for a `#[track_caller]` location, without a function name.
    #[inline]
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line(), UNKNOWN)
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Returns `true` for the placeholder produced by [`Frame::unknown`].
    pub fn is_unknown(&self) -> bool {
        self.file == UNKNOWN && self.line == 0 && self.function == UNKNOWN
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.file, self.line, self.function)
    }
}

/// Ordered frames of one capture, caller's frame first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackTrace {
    frames: Vec<Frame>,
}

impl StackTrace {
    /// Captures the current stack with the [`DefaultCapture`] backend.
    ///
    /// When the caller's frame cannot be located by its source position, the
    /// unwinder's and this crate's frames are dropped by name, then `skip`
    /// more. Helpers that capture on behalf of their own caller pass `1`.
    #[track_caller]
    #[inline]
    pub fn capture(skip: usize) -> Self {
        Self::capture_with(&DefaultCapture::default(), skip)
    }

    /// Captures the current stack with an explicit backend.
    #[track_caller]
    #[inline]
    pub fn capture_with<C: StackCapture + ?Sized>(backend: &C, skip: usize) -> Self {
        backend.capture(skip, Location::caller())
    }

    /// Builds a trace from already resolved frames, truncated to [`MAX_DEPTH`].
    pub fn from_frames<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Frame>,
    {
        Self { frames: frames.into_iter().take(MAX_DEPTH).collect() }
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The caller's frame, if anything was recorded.
    #[inline]
    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a Frame;
    type IntoIter = core::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            Display::fmt(frame, f)?;
        }
        Ok(())
    }
}
