//! Core traits for building and probing error chains.
//!
//! - [`ChainCapable`]: probe for values that are [`TrailError`](crate::TrailError) nodes
//! - [`ResultExt`]: wrap foreign errors in `?` pipelines
//! - [`TrailResultExt`]: spawn and annotate errors already in the chain
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::{ChainCapable, ResultExt};
//!
//! let result: Result<(), std::io::Error> = Err(std::io::Error::other("disk full"));
//! let err = result.trail(100401).unwrap_err();
//! assert!(err.is_chain_capable());
//! assert_eq!(err.code(), 100401);
//! ```

pub mod chain_capable;
pub mod result_ext;

pub use chain_capable::ChainCapable;
pub use result_ext::{ResultExt, TrailResultExt};
