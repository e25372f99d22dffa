//! Mapping error codes to externally safe messages and transport statuses.
//!
//! The registry is an injected dependency: accessors take it by reference, so
//! there is no process-wide table and alternate registries can be substituted.
//!
//! # Examples
//!
//! ```
//! use error_trail::registry::{self, Coder, MapRegistry};
//! use error_trail::TrailError;
//!
//! let mut codes = MapRegistry::new();
//! codes.register(Coder::new(100101, 500, "Database error")).unwrap();
//! codes.register(Coder::new(100301, 400, "Invalid request")).unwrap();
//!
//! let err = TrailError::new(100101, "connect failed").spawn(100301, "error change err_code");
//! assert_eq!(registry::code(&err), 100301);
//! assert!(registry::is_code(&err, 100101));
//! assert_eq!(registry::http_status(&codes, &err), 400);
//! ```

use core::fmt::{self, Display};

use crate::traits::ChainCapable;
use crate::types::alloc_type::{BTreeMap, String};

mod error;

pub use error::RegistryError;

/// Code reported for values that are not [`TrailError`](crate::TrailError) nodes.
pub const UNKNOWN_CODE: u32 = 1;

/// Code that can never be registered.
pub const RESERVED_CODE: u32 = 0;

/// What a code means outside the process.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coder {
    code: u32,
    http_status: u16,
    external: String,
    reference: Option<String>,
}

impl Coder {
    #[inline]
    pub fn new(code: u32, http_status: u16, external: impl Into<String>) -> Self {
        Self { code, http_status, external: external.into(), reference: None }
    }

    /// Attaches a documentation link for the code.
    #[inline]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.code
    }

    #[inline]
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// Message safe to show to end users.
    #[inline]
    pub fn external(&self) -> &str {
        &self.external
    }

    #[inline]
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }
}

impl Display for Coder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.external)
    }
}

/// Coder used when a code is unknown or unregistered.
pub fn unknown_coder() -> Coder {
    Coder::new(UNKNOWN_CODE, 500, "An internal server error occurred")
}

/// Lookup contract consulted by the accessors in this module.
pub trait CodeRegistry {
    fn resolve(&self, code: u32) -> Option<&Coder>;
}

/// In-memory registry backed by a `BTreeMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapRegistry {
    coders: BTreeMap<u32, Coder>,
}

impl MapRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `coder`, returning the entry it replaced.
    pub fn register(&mut self, coder: Coder) -> Result<Option<Coder>, RegistryError> {
        if coder.code == RESERVED_CODE {
            return Err(RegistryError::Reserved);
        }
        Ok(self.coders.insert(coder.code, coder))
    }

    /// Registers `coder`, refusing to replace an existing entry.
    pub fn register_unique(&mut self, coder: Coder) -> Result<(), RegistryError> {
        if self.coders.contains_key(&coder.code) {
            return Err(RegistryError::Duplicate { code: coder.code });
        }
        self.register(coder).map(|_| ())
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool {
        self.coders.contains_key(&code)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coders.is_empty()
    }

    /// Registered coders in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &Coder> + '_ {
        self.coders.values()
    }
}

impl CodeRegistry for MapRegistry {
    #[inline]
    fn resolve(&self, code: u32) -> Option<&Coder> {
        self.coders.get(&code)
    }
}

/// Code of the outermost node, or [`UNKNOWN_CODE`] for other errors.
#[inline]
pub fn code<E: ChainCapable + ?Sized>(error: &E) -> u32 {
    error.as_trail().map_or(UNKNOWN_CODE, |node| node.code())
}

/// Returns `true` if `candidate` appears at any level of the chain.
#[inline]
pub fn is_code<E: ChainCapable + ?Sized>(error: &E, candidate: u32) -> bool {
    error.as_trail().is_some_and(|node| node.contains_code(candidate))
}

/// Resolves the outermost code, falling back to [`unknown_coder`].
pub fn coder_of<R, E>(registry: &R, error: &E) -> Coder
where
    R: CodeRegistry + ?Sized,
    E: ChainCapable + ?Sized,
{
    error
        .as_trail()
        .and_then(|node| registry.resolve(node.code()))
        .cloned()
        .unwrap_or_else(unknown_coder)
}

/// Transport status for the outermost code.
#[inline]
pub fn http_status<R, E>(registry: &R, error: &E) -> u16
where
    R: CodeRegistry + ?Sized,
    E: ChainCapable + ?Sized,
{
    coder_of(registry, error).http_status()
}
