use core::error::Error;
use core::fmt::{self, Display};

use crate::types::alloc_type::{Box, String};

/// Boxed foreign error accepted by [`TrailError::wrap`](crate::TrailError::wrap).
pub type AnyError = Box<dyn Error + Send + Sync + 'static>;

/// The diagnostic text a node was built from.
///
/// Either text formatted at the construction site or a foreign error kept
/// opaque. A foreign error is never treated as a cause.
#[derive(Debug)]
pub enum Underlying {
    Text(String),
    Foreign(AnyError),
}

impl Underlying {
    #[inline]
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::Text(text.into())
    }

    #[inline]
    pub fn foreign<E: Into<AnyError>>(error: E) -> Self {
        Self::Foreign(error.into())
    }

    #[inline]
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Foreign(_))
    }

    /// Returns the wrapped foreign error, if this node was built by `wrap`.
    #[inline]
    pub fn as_foreign(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Text(_) => None,
            Self::Foreign(err) => Some(err.as_ref()),
        }
    }
}

impl Display for Underlying {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Foreign(err) => Display::fmt(err, f),
        }
    }
}

impl From<String> for Underlying {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Underlying {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}
