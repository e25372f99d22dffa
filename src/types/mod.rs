//! Error node, chain walker and formatter.
//!
//! # Examples
//!
//! ```
//! use error_trail::TrailError;
//!
//! let mut err = TrailError::new(100101, "connect failed");
//! err.with_message("Database error");
//! let outer = err.spawn(100301, "error change err_code");
//!
//! println!("{:#}", outer);
//! // caller="#1 src/main.rs:6 (app::main)" code=100301 error="error change err_code" message=""
//! // caller="#0 src/main.rs:3 (app::main)" code=100101 error="connect failed" message="Database error"
//! // callstack="src/main.rs:3 (app::main);...;src/main.rs:6 (app::main);..."
//! ```

pub mod alloc_type;
pub mod chain;
pub mod error_formatter;
pub mod trail_error;
pub mod underlying;

pub use chain::*;
pub use error_formatter::*;
pub use trail_error::*;
pub use underlying::*;

/// Result alias with [`TrailError`] as the failure type.
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type TrailResult<T> = Result<T, TrailError>;
