//! Adaptors that turn other shapes of data into product dimensions.
//!
//! - [`Multipass`]: any cloneable [`Iterator`] as a forward-only dimension.
//!   Covers sequences whose end is a sentinel discovered during traversal
//!   (filtered or truncated pipelines), which have no cheap `end()` and no
//!   way to step backwards.
//! - [`Retrace`]: marks a forward dimension bidirectional by re-walking from
//!   the front whenever a backwards step is needed. Slow but correct; useful
//!   when a truncated pipeline must still compose with `.rev()`.
//! - [`CellSlice`]: a dimension with interior-mutable elements, the one
//!   place where the shallow/deep access distinction is observable.

use std::cell::Cell;
use std::fmt;

use crate::sequence::{BidirectionalSequence, Sequence, SizedSequence};

// ---------------------------------------------------------------------------
// Multipass: cloneable iterator as a forward sequence
// ---------------------------------------------------------------------------

/// Adapts an `Iterator + Clone` into a forward-only [`Sequence`].
///
/// Multi-pass traversal comes from cloning the iterator, so the adaptor is
/// only as cheap as the iterator's `Clone`. The sequence is deliberately
/// neither [`BidirectionalSequence`] nor [`SizedSequence`]: wrap it in
/// [`Retrace`] if backwards traversal is required.
#[derive(Debug, Clone)]
pub struct Multipass<I> {
    iter: I,
}

/// Shorthand for [`Multipass::new`].
pub fn multipass<I: Iterator + Clone>(iter: I) -> Multipass<I> {
    Multipass::new(iter)
}

impl<I: Iterator + Clone> Multipass<I> {
    pub fn new(iter: I) -> Self {
        Multipass { iter }
    }
}

/// Cursor of a [`Multipass`] sequence.
///
/// Holds a clone of the underlying iterator positioned at the element, plus
/// the number of steps taken from the front; equality compares the step
/// count only, so cursors stay cheap to compare.
#[derive(Debug, Clone)]
pub struct MultipassCursor<I> {
    iter: I,
    pos: usize,
}

impl<I> PartialEq for MultipassCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<I: Iterator + Clone> Sequence for Multipass<I> {
    type Cursor = MultipassCursor<I>;
    type Item<'a>
        = I::Item
    where
        Self: 'a;
    type ReadOnly<'a>
        = I::Item
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor {
        MultipassCursor {
            iter: self.iter.clone(),
            pos: 0,
        }
    }

    fn end(&self) -> Self::Cursor {
        // The one-past-last position is only reachable by walking.
        let mut cursor = self.begin();
        while cursor.iter.next().is_some() {
            cursor.pos += 1;
        }
        cursor
    }

    fn advance(&self, cursor: &mut Self::Cursor) {
        let stepped = cursor.iter.next().is_some();
        debug_assert!(
            stepped,
            "cannot advance a cursor past the end of the sequence"
        );
        cursor.pos += 1;
    }

    fn read<'a>(&'a self, cursor: &Self::Cursor) -> I::Item {
        cursor
            .iter
            .clone()
            .next()
            .expect("cannot read a cursor at the end of the sequence")
    }

    fn read_only<'a>(&'a self, cursor: &Self::Cursor) -> I::Item {
        self.read(cursor)
    }

    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        cursor.iter.clone().next().is_none()
    }

    fn is_empty(&self) -> bool {
        self.iter.clone().next().is_none()
    }
}

// ---------------------------------------------------------------------------
// Retrace: walk-based bidirectionality
// ---------------------------------------------------------------------------

/// Marks a forward [`Sequence`] as bidirectional.
///
/// Backwards steps are emulated by advancing a fresh cursor from the front,
/// so `retreat` costs O(position) and `last` costs O(len). This is the
/// general fallback for sequences without a direct predecessor operation.
#[derive(Debug, Clone, Copy)]
pub struct Retrace<S> {
    inner: S,
}

/// Shorthand for [`Retrace::new`].
pub fn retrace<S: Sequence>(sequence: S) -> Retrace<S> {
    Retrace::new(sequence)
}

impl<S: Sequence> Retrace<S> {
    pub fn new(sequence: S) -> Self {
        Retrace { inner: sequence }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sequence> Sequence for Retrace<S> {
    type Cursor = S::Cursor;
    type Item<'a>
        = S::Item<'a>
    where
        Self: 'a;
    type ReadOnly<'a>
        = S::ReadOnly<'a>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor {
        self.inner.begin()
    }

    fn end(&self) -> Self::Cursor {
        self.inner.end()
    }

    fn advance(&self, cursor: &mut Self::Cursor) {
        self.inner.advance(cursor)
    }

    fn read<'a>(&'a self, cursor: &Self::Cursor) -> Self::Item<'a> {
        self.inner.read(cursor)
    }

    fn read_only<'a>(&'a self, cursor: &Self::Cursor) -> Self::ReadOnly<'a> {
        self.inner.read_only(cursor)
    }

    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        self.inner.is_end(cursor)
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// Walk-based `retreat` and `last` come from the trait defaults.
impl<S: Sequence> BidirectionalSequence for Retrace<S> {}

impl<S: SizedSequence> SizedSequence for Retrace<S> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// ---------------------------------------------------------------------------
// CellSlice: interior-mutable elements
// ---------------------------------------------------------------------------

/// A slice of [`Cell`]s as a product dimension.
///
/// Under shallow access the elements are `&Cell<T>`, so they can be mutated
/// through a shared handle to the product; under deep access the elements
/// are plain `T` copied out of the cells.
#[derive(Clone, Copy)]
pub struct CellSlice<'s, T> {
    cells: &'s [Cell<T>],
}

// Hand-written: `Cell<T>: Debug` needs `T: Copy`, which a derive would not
// put on its bound.
impl<T: Copy + fmt::Debug> fmt::Debug for CellSlice<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellSlice")
            .field("cells", &self.cells)
            .finish()
    }
}

impl<'s, T: Copy> CellSlice<'s, T> {
    pub fn new(cells: &'s [Cell<T>]) -> Self {
        CellSlice { cells }
    }
}

impl<'s, T: Copy> Sequence for CellSlice<'s, T> {
    type Cursor = usize;
    type Item<'a>
        = &'a Cell<T>
    where
        Self: 'a;
    type ReadOnly<'a>
        = T
    where
        Self: 'a;

    fn begin(&self) -> usize {
        0
    }

    fn end(&self) -> usize {
        self.cells.len()
    }

    fn advance(&self, cursor: &mut usize) {
        debug_assert!(
            *cursor < self.cells.len(),
            "cannot advance a cursor past the end of the sequence"
        );
        *cursor += 1;
    }

    fn read<'a>(&'a self, cursor: &usize) -> &'a Cell<T> {
        &self.cells[*cursor]
    }

    fn read_only<'a>(&'a self, cursor: &usize) -> T {
        self.cells[*cursor].get()
    }

    fn is_end(&self, cursor: &usize) -> bool {
        *cursor == self.cells.len()
    }
}

impl<'s, T: Copy> BidirectionalSequence for CellSlice<'s, T> {
    fn retreat(&self, cursor: &mut usize) {
        debug_assert!(
            *cursor > 0,
            "cannot retreat a cursor at the first position"
        );
        *cursor -= 1;
    }

    fn last(&self) -> usize {
        debug_assert!(
            !self.cells.is_empty(),
            "an empty sequence has no last position"
        );
        self.cells.len() - 1
    }
}

impl<'s, T: Copy> SizedSequence for CellSlice<'s, T> {
    fn len(&self) -> usize {
        self.cells.len()
    }
}
