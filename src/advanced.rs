//! Advanced API level for library authors and power users.
//!
//! This module exposes the low-level building blocks: stack capture backends,
//! the chain walker and the structured record types. Use these when you need a
//! custom rendering or a different symbolization strategy.

// Stack Capture
#[cfg(feature = "backtrace")]
pub use crate::stack::BacktraceCapture;
pub use crate::stack::{CallerOnly, DefaultCapture, Frame, StackCapture, StackTrace, MAX_DEPTH};

// Chain Walker
pub use crate::types::chain::{Chain, ChainIter, ChainLevel, LevelVec};

// Structured Records
pub use crate::types::error_formatter::{
    CallstackRecord, LevelRecord, Record, TrailFormatter, CALLSTACK_SEPARATOR,
};

// Node Internals
pub use crate::types::underlying::{AnyError, Underlying};

// Code Registry Contract
pub use crate::registry::{CodeRegistry, Coder};
