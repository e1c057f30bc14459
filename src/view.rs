//! The product view, its cursors, and its iterator.
//!
//! [`CartesianProduct`] owns the adapted dimension tuple; [`Cursor`] and
//! [`Iter`] borrow it, so a view cannot be moved or dropped while cursors
//! derived from it are alive.
//!
//! Precondition violations (advancing past END, retreating past BEGIN,
//! reading at END or on an empty view, comparing cursors from different
//! view instances) are checked with `debug_assert!` only. Release builds
//! pay nothing for the checks and make no promises about the outcome.

use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use crate::access::{AccessMode, Deep, Shallow};
use crate::dimensions::{BidirectionalDimensions, Dimensions, SizedDimensions};

/// A lazily-evaluated view over the cartesian product of the sequences in
/// `D`, enumerated in odometer order (last dimension fastest).
///
/// `M` selects the element access mode at the type level; see
/// [`Shallow`] and [`Deep`]. The view is multi-pass: [`begin`],
/// [`end`] and [`iter`] can be called any number of times, each cursor or
/// iterator bound to this view instance.
///
/// [`begin`]: CartesianProduct::begin
/// [`end`]: CartesianProduct::end
/// [`iter`]: CartesianProduct::iter
#[derive(Debug)]
pub struct CartesianProduct<D, M: AccessMode = Shallow> {
    dims: D,
    mode: PhantomData<M>,
}

/// Builds a shallow-mode product view over a tuple of sequences.
///
/// Every member of the tuple must implement [`Sequence`]; pass a reference
/// to borrow a container into the view, or a value to move it in. Anything
/// that is not a multi-pass forward sequence fails the `Dimensions` bound
/// and is rejected at compile time.
///
/// [`Sequence`]: crate::Sequence
///
/// ```
/// use cartesian_view::cartesian_product;
///
/// let xs = [0, 1, 2];
/// let cs = ['0', '1', '2'];
/// let view = cartesian_product((&xs, &cs));
/// let pairs: Vec<_> = view.iter().collect();
/// assert_eq!(pairs.len(), 9);
/// assert_eq!(pairs[0], (&0, &'0'));
/// assert_eq!(pairs[8], (&2, &'2'));
/// ```
pub fn cartesian_product<D: Dimensions>(dims: D) -> CartesianProduct<D, Shallow> {
    CartesianProduct::new(dims)
}

/// Builds a deep-mode product view: immutability propagates into every
/// element. See [`Deep`].
pub fn cartesian_product_deep<D: Dimensions>(dims: D) -> CartesianProduct<D, Deep> {
    CartesianProduct::new(dims)
}

impl<D: Dimensions, M: AccessMode> CartesianProduct<D, M> {
    /// Wraps a dimension tuple in a view with access mode `M`.
    pub fn new(dims: D) -> Self {
        CartesianProduct {
            dims,
            mode: PhantomData,
        }
    }

    /// Cursor at the first tuple, or equal to [`end`](Self::end) if the
    /// product is empty.
    ///
    /// Emptiness is decided here once, not re-checked during traversal.
    pub fn begin(&self) -> Cursor<'_, D, M> {
        let sub = if self.dims.any_empty() {
            self.dims.end()
        } else {
            self.dims.begin()
        };
        Cursor {
            dims: &self.dims,
            sub,
            mode: PhantomData,
        }
    }

    /// Cursor one past the last tuple.
    pub fn end(&self) -> Cursor<'_, D, M> {
        Cursor {
            dims: &self.dims,
            sub: self.dims.end(),
            mode: PhantomData,
        }
    }

    /// Iterator over the element tuples.
    pub fn iter(&self) -> Iter<'_, D, M> {
        let front = if self.dims.any_empty() {
            self.dims.end()
        } else {
            self.dims.begin()
        };
        Iter {
            dims: &self.dims,
            back: self.dims.end(),
            front,
            mode: PhantomData,
        }
    }

    /// Whether the product holds no tuples.
    ///
    /// True exactly when any dimension is empty; the zero-arity product is
    /// never empty (it holds the one empty tuple).
    pub fn is_empty(&self) -> bool {
        self.dims.any_empty()
    }

    /// Number of dimensions.
    pub fn arity(&self) -> usize {
        D::ARITY
    }

    /// Number of tuples: the product of the dimension lengths, 1 for the
    /// zero-arity product.
    ///
    /// Only available when every dimension reports a length. The
    /// multiplication is unchecked; callers must keep the product inside
    /// `usize` range.
    pub fn len(&self) -> usize
    where
        D: SizedDimensions,
    {
        self.dims.total()
    }
}

impl<D: Dimensions + Clone, M: AccessMode> Clone for CartesianProduct<D, M> {
    fn clone(&self) -> Self {
        // The clone is a distinct view instance: its cursors and the
        // original's are not interchangeable.
        CartesianProduct::new(self.dims.clone())
    }
}

impl<'v, D: Dimensions + 'v, M: AccessMode> IntoIterator for &'v CartesianProduct<D, M> {
    type Item = D::Item<'v, M>;
    type IntoIter = Iter<'v, D, M>;

    fn into_iter(self) -> Iter<'v, D, M> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

/// A composite position inside a [`CartesianProduct`]: one sub-cursor per
/// dimension plus a back-reference to the view that produced it.
///
/// Cursors are cheap to clone and compare; they never own element data.
pub struct Cursor<'v, D: Dimensions, M: AccessMode = Shallow> {
    dims: &'v D,
    sub: D::Cursors,
    mode: PhantomData<M>,
}

impl<'v, D: Dimensions, M: AccessMode> Cursor<'v, D, M> {
    /// Element tuple under the cursor.
    ///
    /// The cursor must not be at END and the view must not be empty.
    pub fn get(&self) -> D::Item<'v, M> {
        let dims = self.dims;
        debug_assert!(
            !dims.any_empty(),
            "cannot read through a cursor over an empty product"
        );
        debug_assert!(
            !dims.at_end(&self.sub),
            "cannot read through a cursor past the last tuple"
        );
        dims.read::<M>(&self.sub)
    }

    /// Odometer increment: steps to the next tuple, or to END after the
    /// last one.
    ///
    /// The cursor must not already be at END and the view must not be
    /// empty.
    pub fn advance(&mut self) {
        debug_assert!(
            !self.dims.any_empty(),
            "cannot advance a cursor over an empty product"
        );
        debug_assert!(
            !self.dims.at_end(&self.sub),
            "cannot advance a cursor already past the last tuple"
        );
        self.dims.advance(&mut self.sub);
    }

    /// Odometer decrement: steps to the previous tuple; from END it steps
    /// to the last tuple.
    ///
    /// The cursor must not be at BEGIN and the view must not be empty.
    pub fn retreat(&mut self)
    where
        D: BidirectionalDimensions,
    {
        debug_assert!(
            !self.dims.any_empty(),
            "cannot retreat a cursor over an empty product"
        );
        if self.dims.at_end(&self.sub) {
            self.sub = self.dims.last();
        } else {
            let underflow = self.dims.retreat(&mut self.sub);
            debug_assert!(!underflow, "cannot retreat a cursor at the first tuple");
        }
    }

    /// Whether the cursor is at the END position.
    pub fn is_end(&self) -> bool {
        self.dims.at_end(&self.sub)
    }
}

impl<'v, D: Dimensions, M: AccessMode> Clone for Cursor<'v, D, M> {
    fn clone(&self) -> Self {
        Cursor {
            dims: self.dims,
            sub: self.sub.clone(),
            mode: PhantomData,
        }
    }
}

impl<'v, D: Dimensions, M: AccessMode> PartialEq for Cursor<'v, D, M> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            ptr::eq(self.dims, other.dims),
            "cannot compare cursors from different product views"
        );
        self.sub == other.sub
    }
}

impl<'v, D: Dimensions, M: AccessMode> fmt::Debug for Cursor<'v, D, M>
where
    D::Cursors: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("sub", &self.sub)
            .field("at_end", &self.is_end())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Iter
// ---------------------------------------------------------------------------

/// Iterator over a [`CartesianProduct`]'s element tuples.
///
/// Keeps a front and a back composite cursor; [`DoubleEndedIterator`] is
/// available when every dimension is bidirectional, so reversal is the
/// standard `.rev()` adaptor.
pub struct Iter<'v, D: Dimensions, M: AccessMode = Shallow> {
    dims: &'v D,
    front: D::Cursors,
    back: D::Cursors,
    mode: PhantomData<M>,
}

impl<'v, D: Dimensions, M: AccessMode> Clone for Iter<'v, D, M> {
    fn clone(&self) -> Self {
        Iter {
            dims: self.dims,
            front: self.front.clone(),
            back: self.back.clone(),
            mode: PhantomData,
        }
    }
}

impl<'v, D: Dimensions + 'v, M: AccessMode> Iterator for Iter<'v, D, M> {
    type Item = D::Item<'v, M>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let dims = self.dims;
        let item = dims.read::<M>(&self.front);
        dims.advance(&mut self.front);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.front == self.back {
            (0, Some(0))
        } else {
            (1, None)
        }
    }
}

impl<'v, D: BidirectionalDimensions + 'v, M: AccessMode> DoubleEndedIterator for Iter<'v, D, M> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let dims = self.dims;
        if dims.at_end(&self.back) {
            self.back = dims.last();
        } else {
            let underflow = dims.retreat(&mut self.back);
            debug_assert!(!underflow, "back cursor retreated past the first tuple");
        }
        Some(dims.read::<M>(&self.back))
    }
}

impl<'v, D: Dimensions + 'v, M: AccessMode> std::iter::FusedIterator for Iter<'v, D, M> {}
