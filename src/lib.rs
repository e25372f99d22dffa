//! Coded error chains with call-site stacks and stable structured rendering.
//!
//! A [`TrailError`] carries an integer code, an appendable message, an optional
//! cause that is itself a `TrailError`, and the stack captured where the node
//! was created. The chain can be rendered as a single externally safe line, as
//! a merged stack, or as structured per-level records for log pipelines.
//!
//! # Examples
//!
//! ## Building a Chain
//!
//! ```
//! use error_trail::{trail, with_message, TrailError};
//!
//! let mut root = trail!(100101, "connect failed");
//! with_message!(&mut root, "Database error");
//! assert_eq!(root.to_string(), "Database error");
//!
//! let outer = root.spawn(100301, "error change err_code");
//! let levels = outer.levels();
//! assert_eq!(levels[0].code(), 100101);
//! assert_eq!(levels[1].code(), 100301);
//! ```
//!
//! ## Structured Rendering
//!
//! ```
//! use error_trail::TrailError;
//!
//! let outer = TrailError::new(100101, "connect failed").spawn(100301, "error change err_code");
//! let records = outer.fmt().structured().records();
//!
//! assert_eq!(records.len(), 3);
//! assert!(records[0].as_level().unwrap().caller.starts_with("#1 "));
//! assert!(records[1].as_level().unwrap().caller.starts_with("#0 "));
//! assert!(records[2].as_callstack().is_some());
//! ```
//!
//! ## Type-Erased Errors
//!
//! ```
//! use error_trail::{erased, registry, TrailError};
//!
//! let io = std::io::Error::other("disk full");
//! let node = erased::wrap(Some(io), 100401).unwrap();
//! assert_eq!(registry::code(&node), 100401);
//! assert!(erased::unwrap(&node).is_none());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Nil-aware operations on type-erased errors
pub mod erased;
/// Formatting macros for building chains
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Code registry contract and accessors
pub mod registry;
/// Call-stack capture
pub mod stack;
/// Capability probe and `Result` extensions
pub mod traits;
/// Error node, chain walker and formatter
pub mod types;

/// Low-level building blocks for library authors
pub mod advanced;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use registry::{Coder, MapRegistry, RegistryError, UNKNOWN_CODE};
pub use stack::{Frame, StackTrace};
pub use traits::*;
pub use types::{
    error_formatter::{FormatConfig, LevelOrder, Verbosity},
    AnyError, TrailError, TrailResult, Underlying,
};
