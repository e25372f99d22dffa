//! Rendering a [`TrailError`] chain.
//!
//! Three verbosity levels are available:
//!
//! - [`Verbosity::Simple`]: the externally safe single line. The accumulated
//!   message when one was appended, otherwise the underlying text.
//! - [`Verbosity::StackOnly`]: one `<file>:<line> (<function>)` line per frame of
//!   the merged stack, innermost node first.
//! - [`Verbosity::Structured`]: one [`LevelRecord`] per chain level followed by
//!   a single [`CallstackRecord`]. Log parsers depend on the field names and
//!   their order.
//!
//! # Examples
//!
//! ```
//! use error_trail::TrailError;
//!
//! let mut err = TrailError::new(100101, "connect failed");
//! err.with_message("Database error");
//!
//! assert_eq!(err.fmt().to_string(), "Database error");
//! assert_eq!(err.fmt().structured().records().len(), 2);
//! ```

use core::fmt::{self, Display, Write};

use crate::stack::Frame;
use crate::types::alloc_type::{String, Vec};
use crate::types::chain::ChainLevel;
use crate::types::TrailError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator between frames in [`CallstackRecord::callstack`].
pub const CALLSTACK_SEPARATOR: &str = ";";

/// How much of the chain a rendering shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Verbosity {
    #[default]
    Simple,
    StackOnly,
    Structured,
}

/// Order of the per-level records in structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LevelOrder {
    #[default]
    OuterFirst,
    InnerFirst,
}

/// Rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatConfig {
    pub verbosity: Verbosity,
    pub order: LevelOrder,
}

impl FormatConfig {
    #[inline]
    pub fn simple() -> Self {
        Self { verbosity: Verbosity::Simple, ..Default::default() }
    }

    #[inline]
    pub fn stack_only() -> Self {
        Self { verbosity: Verbosity::StackOnly, ..Default::default() }
    }

    #[inline]
    pub fn structured() -> Self {
        Self { verbosity: Verbosity::Structured, ..Default::default() }
    }
}

/// Structured record for one chain level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelRecord {
    /// `#<index> <file>:<line> (<function>)`
    pub caller: String,
    pub code: u32,
    /// Underlying text of the node.
    pub error: String,
    /// Accumulated message of the node.
    pub message: String,
}

impl LevelRecord {
    pub fn from_level(level: &ChainLevel<'_>) -> Self {
        let mut caller = String::new();
        let _ = match level.frame() {
            Some(frame) => write!(caller, "#{} {}", level.index(), frame),
            None => write!(caller, "#{} {}", level.index(), Frame::unknown()),
        };

        let mut error = String::new();
        let _ = write!(error, "{}", level.underlying());

        Self { caller, code: level.code(), error, message: level.message().into() }
    }
}

impl Display for LevelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "caller={:?} code={} error={:?} message={:?}",
            self.caller, self.code, self.error, self.message
        )
    }
}

/// Trailing structured record holding the merged stack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallstackRecord {
    /// Merged frames, innermost node first, joined by [`CALLSTACK_SEPARATOR`].
    pub callstack: String,
}

impl CallstackRecord {
    pub fn from_frames<'a, I>(frames: I) -> Self
    where
        I: IntoIterator<Item = &'a Frame>,
    {
        let mut callstack = String::new();
        for (i, frame) in frames.into_iter().enumerate() {
            if i > 0 {
                callstack.push_str(CALLSTACK_SEPARATOR);
            }
            let _ = write!(callstack, "{}", frame);
        }
        Self { callstack }
    }
}

impl Display for CallstackRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "callstack={:?}", self.callstack)
    }
}

/// One entry of structured output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Record {
    Level(LevelRecord),
    Callstack(CallstackRecord),
}

impl Record {
    #[inline]
    pub fn as_level(&self) -> Option<&LevelRecord> {
        match self {
            Self::Level(level) => Some(level),
            Self::Callstack(_) => None,
        }
    }

    #[inline]
    pub fn as_callstack(&self) -> Option<&CallstackRecord> {
        match self {
            Self::Level(_) => None,
            Self::Callstack(callstack) => Some(callstack),
        }
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(level) => Display::fmt(level, f),
            Self::Callstack(callstack) => Display::fmt(callstack, f),
        }
    }
}

/// Builder for choosing how a [`TrailError`] is rendered.
pub struct TrailFormatter<'a> {
    pub(crate) error: &'a TrailError,
    pub(crate) config: FormatConfig,
}

impl<'a> TrailFormatter<'a> {
    pub fn new(error: &'a TrailError) -> Self {
        Self { error, config: FormatConfig::default() }
    }

    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.config.verbosity = verbosity;
        self
    }

    pub fn simple(self) -> Self {
        self.verbosity(Verbosity::Simple)
    }

    pub fn stack_only(self) -> Self {
        self.verbosity(Verbosity::StackOnly)
    }

    pub fn structured(self) -> Self {
        self.verbosity(Verbosity::Structured)
    }

    pub fn order(mut self, order: LevelOrder) -> Self {
        self.config.order = order;
        self
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Structured records: levels in the configured order, then the callstack.
    ///
    /// Available regardless of the configured verbosity.
    pub fn records(&self) -> Vec<Record> {
        let chain = self.error.chain();
        let mut levels = chain.levels();
        if self.config.order == LevelOrder::OuterFirst {
            levels.reverse();
        }

        let mut records = Vec::with_capacity(levels.len() + 1);
        records.extend(levels.iter().map(|level| Record::Level(LevelRecord::from_level(level))));
        records.push(Record::Callstack(CallstackRecord::from_frames(chain.merged_stack())));
        records
    }

    fn write_simple(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.error.message();
        if message.is_empty() {
            Display::fmt(self.error.underlying(), f)
        } else {
            f.write_str(message)
        }
    }

    fn write_stack(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.error.merged_stack().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            Display::fmt(frame, f)?;
        }
        Ok(())
    }

    fn write_structured(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            Display::fmt(record, f)?;
        }
        Ok(())
    }
}

impl Display for TrailFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.config.verbosity {
            Verbosity::Simple => self.write_simple(f),
            Verbosity::StackOnly => self.write_stack(f),
            Verbosity::Structured => self.write_structured(f),
        }
    }
}
