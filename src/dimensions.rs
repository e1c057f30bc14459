//! Composition of per-dimension sequences into one odometer state machine.
//!
//! A tuple of [`Sequence`]s implements [`Dimensions`]: its composite cursor
//! is the tuple of per-dimension sub-cursors, and stepping it runs the
//! odometer algorithm: the last dimension varies fastest, and a dimension that
//! wraps past its end resets to its first position and carries one step
//! into the dimension to its left.
//!
//! The composite has exactly two distinguished states:
//!
//! - BEGIN: every sub-cursor at its dimension's first position;
//! - END: sub-cursor 0 at its dimension's one-past-last position, every
//!   other sub-cursor back at its first position.
//!
//! Mid-traversal only sub-cursor 0 may sit at its end position; a carry out
//! of dimension 0 therefore leaves the composite exactly in END state with
//! no extra bookkeeping.
//!
//! Capabilities are resolved by conjunction over the members: a tuple is
//! [`BidirectionalDimensions`] iff every member steps backwards, and
//! [`SizedDimensions`] iff every member knows its length. Nothing stronger
//! than bidirectional is ever exposed, even when every member would allow
//! it.
//!
//! Impls are generated for arities 1 through 12; the zero-arity impl is the
//! hand-written multiplicative identity: a product of no sequences holds
//! exactly one empty tuple, and its cursor is a single `bool` recording
//! whether that tuple has been passed.

use crate::access::AccessMode;
use crate::sequence::{BidirectionalSequence, Sequence, SizedSequence};

/// A fixed-arity tuple of sequences, traversable as one composite.
pub trait Dimensions {
    /// Tuple of per-dimension sub-cursors.
    type Cursors: Clone + PartialEq;

    /// Tuple of per-dimension elements under access mode `M`.
    type Item<'a, M: AccessMode>
    where
        Self: 'a;

    /// Number of dimensions.
    const ARITY: usize;

    /// Composite cursor in BEGIN state.
    fn begin(&self) -> Self::Cursors;

    /// Composite cursor in END state.
    fn end(&self) -> Self::Cursors;

    /// Whether any dimension is empty, which makes the whole product empty.
    fn any_empty(&self) -> bool;

    /// Whether the composite cursor is in END state.
    fn at_end(&self, cursors: &Self::Cursors) -> bool;

    /// Element tuple under the composite cursor, read left to right.
    ///
    /// The cursor must not be in END state and no dimension may be empty.
    fn read<'a, M: AccessMode>(&'a self, cursors: &Self::Cursors) -> Self::Item<'a, M>;

    /// Odometer increment.
    ///
    /// The cursor must not already be in END state and no dimension may be
    /// empty. A carry past dimension 0 leaves the cursor in END state.
    fn advance(&self, cursors: &mut Self::Cursors);
}

/// [`Dimensions`] whose members all support backwards steps.
pub trait BidirectionalDimensions: Dimensions {
    /// Odometer decrement of a cursor that is not in END state.
    ///
    /// Returns `true` on underflow past BEGIN, which is a contract
    /// violation on the caller's side; the cursor state is unspecified in
    /// that case.
    fn retreat(&self, cursors: &mut Self::Cursors) -> bool;

    /// Composite cursor with every sub-cursor at its dimension's last
    /// element: the predecessor of END. No dimension may be empty.
    fn last(&self) -> Self::Cursors;
}

/// [`Dimensions`] whose members all report a length.
pub trait SizedDimensions: Dimensions {
    /// Product of the member lengths; 1 for the empty product.
    ///
    /// The multiplication is unchecked: callers are responsible for keeping
    /// the product inside `usize` range.
    fn total(&self) -> usize;
}

// ---------------------------------------------------------------------------
// Arity 0: the multiplicative identity
// ---------------------------------------------------------------------------

impl Dimensions for () {
    // `false` before the one empty tuple, `true` past it.
    type Cursors = bool;
    type Item<'a, M: AccessMode>
        = ()
    where
        Self: 'a;

    const ARITY: usize = 0;

    fn begin(&self) -> bool {
        false
    }

    fn end(&self) -> bool {
        true
    }

    fn any_empty(&self) -> bool {
        false
    }

    fn at_end(&self, cursors: &bool) -> bool {
        *cursors
    }

    fn read<'a, M: AccessMode>(&'a self, _cursors: &bool) -> Self::Item<'a, M> {}

    fn advance(&self, cursors: &mut bool) {
        debug_assert!(
            !*cursors,
            "cannot advance a cursor already past the last tuple"
        );
        *cursors = true;
    }
}

impl BidirectionalDimensions for () {
    fn retreat(&self, cursors: &mut bool) -> bool {
        // Only reachable below END, i.e. at BEGIN: always an underflow.
        debug_assert!(!*cursors);
        true
    }

    fn last(&self) -> bool {
        false
    }
}

impl SizedDimensions for () {
    fn total(&self) -> usize {
        1
    }
}

// ---------------------------------------------------------------------------
// Arities 1..=12
// ---------------------------------------------------------------------------

// `all` lists the dimensions in order; `carry` lists every dimension except
// the first in reverse (fastest-varying first); `first` is dimension 0, the
// slowest-varying one, whose end position doubles as the END state.
macro_rules! impl_dimensions {
    (
        len: $len:expr,
        all: [$(($T:ident, $idx:tt)),+ $(,)?],
        carry: [$(($CT:ident, $cidx:tt)),* $(,)?],
        first: ($F:ident, $fidx:tt) $(,)?
    ) => {
        impl<$($T: Sequence),+> Dimensions for ($($T,)+) {
            type Cursors = ($($T::Cursor,)+);
            type Item<'a, M: AccessMode>
                = ($(<M as AccessMode>::Item<'a, $T>,)+)
            where
                Self: 'a;

            const ARITY: usize = $len;

            fn begin(&self) -> Self::Cursors {
                ($(self.$idx.begin(),)+)
            }

            fn end(&self) -> Self::Cursors {
                let mut cursors = self.begin();
                cursors.$fidx = self.$fidx.end();
                cursors
            }

            fn any_empty(&self) -> bool {
                $(self.$idx.is_empty())||+
            }

            fn at_end(&self, cursors: &Self::Cursors) -> bool {
                self.$fidx.is_end(&cursors.$fidx)
            }

            fn read<'a, M: AccessMode>(&'a self, cursors: &Self::Cursors) -> Self::Item<'a, M> {
                ($(M::read(&self.$idx, &cursors.$idx),)+)
            }

            fn advance(&self, cursors: &mut Self::Cursors) {
                $(
                    self.$cidx.advance(&mut cursors.$cidx);
                    if !self.$cidx.is_end(&cursors.$cidx) {
                        return;
                    }
                    cursors.$cidx = self.$cidx.begin();
                )*
                // Dimension 0 keeps its end position as the END state.
                self.$fidx.advance(&mut cursors.$fidx);
            }
        }

        impl<$($T: BidirectionalSequence),+> BidirectionalDimensions for ($($T,)+) {
            fn retreat(&self, cursors: &mut Self::Cursors) -> bool {
                $(
                    if cursors.$cidx != self.$cidx.begin() {
                        self.$cidx.retreat(&mut cursors.$cidx);
                        return false;
                    }
                    cursors.$cidx = self.$cidx.last();
                )*
                if cursors.$fidx == self.$fidx.begin() {
                    return true;
                }
                self.$fidx.retreat(&mut cursors.$fidx);
                false
            }

            fn last(&self) -> Self::Cursors {
                ($(self.$idx.last(),)+)
            }
        }

        impl<$($T: SizedSequence),+> SizedDimensions for ($($T,)+) {
            fn total(&self) -> usize {
                // Multiplication by zero short-circuits before the product
                // can wrap on other, nonzero lengths.
                if $(self.$idx.len() == 0)||+ {
                    return 0;
                }
                1usize $(* self.$idx.len())+
            }
        }
    };
}

impl_dimensions! {
    len: 1,
    all: [(A, 0)],
    carry: [],
    first: (A, 0),
}

impl_dimensions! {
    len: 2,
    all: [(A, 0), (B, 1)],
    carry: [(B, 1)],
    first: (A, 0),
}

impl_dimensions! {
    len: 3,
    all: [(A, 0), (B, 1), (C, 2)],
    carry: [(C, 2), (B, 1)],
    first: (A, 0),
}

impl_dimensions! {
    len: 4,
    all: [(A, 0), (B, 1), (C, 2), (D, 3)],
    carry: [(D, 3), (C, 2), (B, 1)],
    first: (A, 0),
}

impl_dimensions! {
    len: 5,
    all: [(A, 0), (B, 1), (C, 2), (D, 3), (E, 4)],
    carry: [(E, 4), (D, 3), (C, 2), (B, 1)],
    first: (A, 0),
}

impl_dimensions! {
    len: 6,
    all: [(A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5)],
    carry: [(F, 5), (E, 4), (D, 3), (C, 2), (B, 1)],
    first: (A, 0),
}

impl_dimensions! {
    len: 7,
    all: [(A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6)],
    carry: [(G, 6), (F, 5), (E, 4), (D, 3), (C, 2), (B, 1)],
    first: (A, 0),
}

impl_dimensions! {
    len: 8,
    all: [(A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6), (H, 7)],
    carry: [(H, 7), (G, 6), (F, 5), (E, 4), (D, 3), (C, 2), (B, 1)],
    first: (A, 0),
}

impl_dimensions! {
    len: 9,
    all: [(A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6), (H, 7), (I, 8)],
    carry: [(I, 8), (H, 7), (G, 6), (F, 5), (E, 4), (D, 3), (C, 2), (B, 1)],
    first: (A, 0),
}

impl_dimensions! {
    len: 10,
    all: [(A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6), (H, 7), (I, 8), (J, 9)],
    carry: [(J, 9), (I, 8), (H, 7), (G, 6), (F, 5), (E, 4), (D, 3), (C, 2), (B, 1)],
    first: (A, 0),
}

impl_dimensions! {
    len: 11,
    all: [(A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6), (H, 7), (I, 8), (J, 9), (K, 10)],
    carry: [(K, 10), (J, 9), (I, 8), (H, 7), (G, 6), (F, 5), (E, 4), (D, 3), (C, 2), (B, 1)],
    first: (A, 0),
}

impl_dimensions! {
    len: 12,
    all: [(A, 0), (B, 1), (C, 2), (D, 3), (E, 4), (F, 5), (G, 6), (H, 7), (I, 8), (J, 9), (K, 10), (L, 11)],
    carry: [(L, 11), (K, 10), (J, 9), (I, 8), (H, 7), (G, 6), (F, 5), (E, 4), (D, 3), (C, 2), (B, 1)],
    first: (A, 0),
}
