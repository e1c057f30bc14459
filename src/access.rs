//! Deep vs. shallow access modes.
//!
//! The product view supports two element-access configurations, chosen at
//! construction time as a type parameter and never changeable afterwards:
//!
//! - [`Shallow`] (the default): elements keep the exposure their dimension
//!   naturally gives them. A dimension with interior-mutable elements (e.g.
//!   [`CellSlice`](crate::CellSlice)) still hands out mutable handles
//!   through a shared reference to the product.
//! - [`Deep`]: immutability propagates from the product into its elements;
//!   every dimension is read through its read-only projection
//!   ([`Sequence::ReadOnly`]).
//!
//! The mode is a zero-sized marker resolved entirely at compile time, the
//! same shape as a lazily applied element operation: it changes the element
//! type the view exposes, not how traversal works.

use crate::sequence::Sequence;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Shallow {}
    impl Sealed for super::Deep {}
}

/// Compile-time selection of how the product exposes elements.
///
/// Sealed: the two configurations are [`Shallow`] and [`Deep`].
pub trait AccessMode: sealed::Sealed + Copy + Default + 'static {
    /// Element type contributed by a dimension `S` under this mode.
    type Item<'a, S: Sequence + ?Sized + 'a>;

    /// Read the element under `cursor` according to this mode.
    fn read<'a, S: Sequence + ?Sized>(seq: &'a S, cursor: &S::Cursor) -> Self::Item<'a, S>;
}

/// Elements keep their natural (possibly interior-mutable) exposure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shallow;

/// Immutability propagates into every element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deep;

impl AccessMode for Shallow {
    type Item<'a, S: Sequence + ?Sized + 'a> = S::Item<'a>;

    #[inline]
    fn read<'a, S: Sequence + ?Sized>(seq: &'a S, cursor: &S::Cursor) -> Self::Item<'a, S> {
        seq.read(cursor)
    }
}

impl AccessMode for Deep {
    type Item<'a, S: Sequence + ?Sized + 'a> = S::ReadOnly<'a>;

    #[inline]
    fn read<'a, S: Sequence + ?Sized>(seq: &'a S, cursor: &S::Cursor) -> Self::Item<'a, S> {
        seq.read_only(cursor)
    }
}
