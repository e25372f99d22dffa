//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`trail!`], [`spawn!`], [`with_message!`]
//! - **Types**: [`TrailError`], [`TrailResult`], [`FormatConfig`], [`Verbosity`]
//! - **Traits**: [`ResultExt`], [`TrailResultExt`], [`ChainCapable`]
//!
//! # Examples
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn read_settings() -> TrailResult<String> {
//!     std::fs::read_to_string("settings.toml")
//!         .trail(100201)
//!         .message("loading settings")
//! }
//!
//! fn boot() -> TrailResult<()> {
//!     let _settings = read_settings().spawn_err(100301, "boot failed")?;
//!     Ok(())
//! }
//!
//! let err = boot().unwrap_err();
//! assert_eq!(err.to_string(), "boot failed");
//! assert_eq!(err.chain().depth(), 2);
//! ```

// Macros
pub use crate::{spawn, trail, with_message};

// Core types
pub use crate::types::error_formatter::{FormatConfig, LevelOrder, Verbosity};
pub use crate::types::{TrailError, TrailResult};

// Traits
pub use crate::traits::{ChainCapable, ResultExt, TrailResultExt};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{ResultLogExt, TrailLogExt};
