use core::any::Any;
use core::error::Error;

use crate::types::alloc_type::{Arc, Box};
use crate::types::TrailError;

/// Probe for values that are [`TrailError`] nodes.
///
/// Implemented for every concrete error type and for `dyn Error` trait objects,
/// so callers holding a type-erased error can check it before treating it as a
/// chain node. A node behind `Box` or `Arc` is still a node; a shared `Arc`
/// only yields shared access.
///
/// # Examples
///
/// ```
/// use error_trail::traits::ChainCapable;
/// use error_trail::TrailError;
/// use std::error::Error;
///
/// let node: Box<dyn Error + Send + Sync> = Box::new(TrailError::new(100101, "connect failed"));
/// assert!(node.as_ref().is_chain_capable());
///
/// let io = std::io::Error::other("disk full");
/// assert!(!io.is_chain_capable());
/// ```
pub trait ChainCapable {
    fn as_trail(&self) -> Option<&TrailError>;

    fn as_trail_mut(&mut self) -> Option<&mut TrailError>;

    #[inline]
    fn is_chain_capable(&self) -> bool {
        self.as_trail().is_some()
    }
}

impl<E: Error + 'static> ChainCapable for E {
    #[inline]
    fn as_trail(&self) -> Option<&TrailError> {
        let any = self as &dyn Any;
        any.downcast_ref::<TrailError>()
            .or_else(|| any.downcast_ref::<Box<TrailError>>().map(|node| &**node))
            .or_else(|| any.downcast_ref::<Arc<TrailError>>().map(|node| &**node))
    }

    #[inline]
    fn as_trail_mut(&mut self) -> Option<&mut TrailError> {
        let any = self as &mut dyn Any;
        if any.is::<TrailError>() {
            return any.downcast_mut::<TrailError>();
        }
        if any.is::<Box<TrailError>>() {
            return any.downcast_mut::<Box<TrailError>>().map(|node| &mut **node);
        }
        any.downcast_mut::<Arc<TrailError>>().and_then(Arc::get_mut)
    }
}

macro_rules! impl_chain_capable_for_dyn {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ChainCapable for $ty {
                #[inline]
                fn as_trail(&self) -> Option<&TrailError> {
                    self.downcast_ref::<TrailError>()
                        .or_else(|| self.downcast_ref::<Box<TrailError>>().map(|node| &**node))
                        .or_else(|| self.downcast_ref::<Arc<TrailError>>().map(|node| &**node))
                }

                #[inline]
                fn as_trail_mut(&mut self) -> Option<&mut TrailError> {
                    if self.is::<TrailError>() {
                        return self.downcast_mut::<TrailError>();
                    }
                    if self.is::<Box<TrailError>>() {
                        return self.downcast_mut::<Box<TrailError>>().map(|node| &mut **node);
                    }
                    self.downcast_mut::<Arc<TrailError>>().and_then(Arc::get_mut)
                }
            }
        )+
    };
}

impl_chain_capable_for_dyn!(
    dyn Error + 'static,
    dyn Error + Send + 'static,
    dyn Error + Send + Sync + 'static,
);
