//! Walking the causal chain of a [`TrailError`].
//!
//! Levels are numbered from the innermost cause outward: the deepest cause is
//! `#0` and the head carries the highest index.
//!
//! # Examples
//!
//! ```
//! use error_trail::TrailError;
//!
//! let outer = TrailError::new(100101, "connect failed").spawn(100301, "error change err_code");
//! let levels = outer.levels();
//!
//! assert_eq!(levels[0].index(), 0);
//! assert_eq!(levels[0].code(), 100101);
//! assert_eq!(levels[1].index(), 1);
//! assert_eq!(levels[1].code(), 100301);
//! ```

use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::stack::Frame;
use crate::types::alloc_type::Vec;
use crate::types::underlying::Underlying;
use crate::types::TrailError;

/// SmallVec-backed collection for per-level data; most chains are shallow.
pub type LevelVec<T> = SmallVec<[T; 4]>;

/// One node's position in the chain.
#[derive(Debug, Clone, Copy)]
pub struct ChainLevel<'a> {
    index: usize,
    node: &'a TrailError,
}

impl<'a> ChainLevel<'a> {
    /// Position counted from the innermost cause (`#0`).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn code(&self) -> u32 {
        self.node.code()
    }

    #[inline]
    pub fn underlying(&self) -> &'a Underlying {
        self.node.underlying()
    }

    #[inline]
    pub fn message(&self) -> &'a str {
        self.node.message()
    }

    /// First frame of this node's own stack.
    #[inline]
    pub fn frame(&self) -> Option<&'a Frame> {
        self.node.stack().first()
    }

    #[inline]
    pub fn node(&self) -> &'a TrailError {
        self.node
    }
}

/// Borrowed view of a head node and everything it caused from.
#[derive(Debug, Clone, Copy)]
pub struct Chain<'a> {
    head: &'a TrailError,
}

impl<'a> Chain<'a> {
    #[inline]
    pub fn new(head: &'a TrailError) -> Self {
        Self { head }
    }

    #[inline]
    pub fn head(&self) -> &'a TrailError {
        self.head
    }

    /// Nodes from the head down to the innermost cause.
    #[inline]
    pub fn iter(&self) -> ChainIter<'a> {
        ChainIter { next: Some(self.head) }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    pub fn innermost(&self) -> &'a TrailError {
        let mut node = self.head;
        while let Some(cause) = node.cause() {
            node = cause;
        }
        node
    }

    /// One record per node, innermost first.
    pub fn levels(&self) -> LevelVec<ChainLevel<'a>> {
        let nodes: LevelVec<&'a TrailError> = self.iter().collect();
        nodes.into_iter().rev().enumerate().map(|(index, node)| ChainLevel { index, node }).collect()
    }

    /// Concatenation of every node's frames, innermost node first.
    pub fn merged_stack(&self) -> Vec<&'a Frame> {
        let nodes: LevelVec<&'a TrailError> = self.iter().collect();
        nodes.into_iter().rev().flat_map(|node: &'a TrailError| node.stack().iter()).collect()
    }
}

impl<'a> IntoIterator for Chain<'a> {
    type Item = &'a TrailError;
    type IntoIter = ChainIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a chain, outermost node first.
#[derive(Debug, Clone)]
pub struct ChainIter<'a> {
    next: Option<&'a TrailError>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a TrailError;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.cause();
        Some(node)
    }
}

impl FusedIterator for ChainIter<'_> {}
