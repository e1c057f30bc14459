//! Per-dimension traversal capabilities.
//!
//! A dimension of a cartesian product is any multi-pass sequence that can
//! hand out independent position markers ([`Sequence::Cursor`]) and read
//! elements through them. The trait hierarchy mirrors the classic iterator
//! category ladder, restricted to the categories the product can actually
//! use:
//!
//! - [`Sequence`]: forward, multi-pass traversal (the minimum; single-pass
//!   inputs cannot satisfy the contract and are rejected at compile time)
//! - [`BidirectionalSequence`]: adds stepping backwards
//! - [`SizedSequence`]: adds a known element count
//!
//! Cursors never own sequence data; they are cheap markers valid only for
//! the sequence that produced them. Mixing cursors across sequences is a
//! contract violation with unspecified results.
//!
//! Passing a dimension by reference borrows it into the product view, while
//! passing it by value moves it in; the blanket `impl Sequence for &V` is
//! what makes both spellings work.

use std::collections::VecDeque;

/// A forward, multi-pass sequence traversed through an explicit cursor.
///
/// `begin()` may be called any number of times and every cursor obtained
/// from it traverses the same elements in the same order. `end()` is the
/// one-past-last sentinel position; for sequences that only know their end
/// lazily (e.g. a truncated iterator) it is computed by walking, which is
/// why hot paths should prefer [`Sequence::is_end`].
pub trait Sequence {
    /// Position marker. Comparing cursors from different sequences is
    /// unspecified.
    type Cursor: Clone + PartialEq;

    /// Element as naturally exposed (shallow access).
    type Item<'a>
    where
        Self: 'a;

    /// Element with immutability propagated (deep access).
    type ReadOnly<'a>
    where
        Self: 'a;

    /// Cursor at the first element.
    fn begin(&self) -> Self::Cursor;

    /// Cursor one past the last element.
    fn end(&self) -> Self::Cursor;

    /// Step the cursor forward by one position.
    ///
    /// The cursor must not be at [`Sequence::end`].
    fn advance(&self, cursor: &mut Self::Cursor);

    /// Read the element under the cursor.
    ///
    /// The cursor must not be at [`Sequence::end`].
    fn read<'a>(&'a self, cursor: &Self::Cursor) -> Self::Item<'a>;

    /// Read the element under the cursor through the read-only projection.
    ///
    /// The cursor must not be at [`Sequence::end`].
    fn read_only<'a>(&'a self, cursor: &Self::Cursor) -> Self::ReadOnly<'a>;

    /// Whether the cursor sits at the one-past-last position.
    ///
    /// Override when this can be answered without materializing `end()`.
    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        *cursor == self.end()
    }

    /// Whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.is_end(&self.begin())
    }
}

/// A [`Sequence`] whose cursors can also step backwards.
///
/// Both methods have default implementations that re-walk from `begin()`,
/// for sequences that expose only a one-past-last sentinel and no direct
/// predecessor operation. Sequences with O(1) position arithmetic override
/// them.
pub trait BidirectionalSequence: Sequence {
    /// Step the cursor back by one position.
    ///
    /// The cursor must not be at [`Sequence::begin`].
    fn retreat(&self, cursor: &mut Self::Cursor) {
        let mut prev = self.begin();
        debug_assert!(
            *cursor != prev,
            "cannot retreat a cursor at the first position"
        );
        loop {
            let mut next = prev.clone();
            self.advance(&mut next);
            if next == *cursor {
                *cursor = prev;
                return;
            }
            prev = next;
        }
    }

    /// Cursor at the last element.
    ///
    /// The sequence must not be empty.
    fn last(&self) -> Self::Cursor {
        debug_assert!(
            !self.is_empty(),
            "an empty sequence has no last position"
        );
        let mut cursor = self.begin();
        loop {
            let mut next = cursor.clone();
            self.advance(&mut next);
            if self.is_end(&next) {
                return cursor;
            }
            cursor = next;
        }
    }
}

/// A [`Sequence`] with a known element count.
pub trait SizedSequence: Sequence {
    /// Number of elements.
    fn len(&self) -> usize;
}

// ---------------------------------------------------------------------------
// Borrow adaptation: a reference to a sequence is a sequence
// ---------------------------------------------------------------------------

impl<'w, V: Sequence + ?Sized> Sequence for &'w V {
    type Cursor = V::Cursor;
    type Item<'a>
        = V::Item<'a>
    where
        Self: 'a;
    type ReadOnly<'a>
        = V::ReadOnly<'a>
    where
        Self: 'a;

    fn begin(&self) -> Self::Cursor {
        (**self).begin()
    }

    fn end(&self) -> Self::Cursor {
        (**self).end()
    }

    fn advance(&self, cursor: &mut Self::Cursor) {
        (**self).advance(cursor)
    }

    fn read<'a>(&'a self, cursor: &Self::Cursor) -> Self::Item<'a> {
        (**self).read(cursor)
    }

    fn read_only<'a>(&'a self, cursor: &Self::Cursor) -> Self::ReadOnly<'a> {
        (**self).read_only(cursor)
    }

    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        (**self).is_end(cursor)
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<'w, V: BidirectionalSequence + ?Sized> BidirectionalSequence for &'w V {
    fn retreat(&self, cursor: &mut Self::Cursor) {
        (**self).retreat(cursor)
    }

    fn last(&self) -> Self::Cursor {
        (**self).last()
    }
}

impl<'w, V: SizedSequence + ?Sized> SizedSequence for &'w V {
    fn len(&self) -> usize {
        (**self).len()
    }
}

// ---------------------------------------------------------------------------
// Standard containers with O(1) position arithmetic
// ---------------------------------------------------------------------------

macro_rules! indexed_sequence_body {
    () => {
        type Cursor = usize;
        type Item<'a>
            = &'a T
        where
            Self: 'a;
        type ReadOnly<'a>
            = &'a T
        where
            Self: 'a;

        fn begin(&self) -> usize {
            0
        }

        fn end(&self) -> usize {
            self.len()
        }

        fn advance(&self, cursor: &mut usize) {
            debug_assert!(
                *cursor < self.len(),
                "cannot advance a cursor past the end of the sequence"
            );
            *cursor += 1;
        }

        fn read<'a>(&'a self, cursor: &usize) -> &'a T {
            &self[*cursor]
        }

        fn read_only<'a>(&'a self, cursor: &usize) -> &'a T {
            &self[*cursor]
        }

        fn is_end(&self, cursor: &usize) -> bool {
            *cursor == self.len()
        }
    };
}

macro_rules! indexed_bidirectional_body {
    () => {
        fn retreat(&self, cursor: &mut usize) {
            debug_assert!(
                *cursor > 0,
                "cannot retreat a cursor at the first position"
            );
            *cursor -= 1;
        }

        fn last(&self) -> usize {
            debug_assert!(
                self.len() > 0,
                "an empty sequence has no last position"
            );
            self.len() - 1
        }
    };
}

impl<T> Sequence for [T] {
    indexed_sequence_body!();
}

impl<T> BidirectionalSequence for [T] {
    indexed_bidirectional_body!();
}

impl<T> SizedSequence for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    indexed_sequence_body!();
}

impl<T, const N: usize> BidirectionalSequence for [T; N] {
    indexed_bidirectional_body!();
}

impl<T, const N: usize> SizedSequence for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl<T> Sequence for Vec<T> {
    indexed_sequence_body!();
}

impl<T> BidirectionalSequence for Vec<T> {
    indexed_bidirectional_body!();
}

impl<T> SizedSequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Sequence for VecDeque<T> {
    indexed_sequence_body!();
}

impl<T> BidirectionalSequence for VecDeque<T> {
    indexed_bidirectional_body!();
}

impl<T> SizedSequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_forward() {
        let xs = [10, 20, 30];
        let seq: &[i32] = &xs;
        let mut cursor = seq.begin();
        let mut seen = Vec::new();
        while !seq.is_end(&cursor) {
            seen.push(*seq.read(&cursor));
            seq.advance(&mut cursor);
        }
        assert_eq!(seen, vec![10, 20, 30]);
        assert_eq!(cursor, seq.end());
    }

    #[test]
    fn slice_backward() {
        let xs = [1, 2, 3];
        let seq: &[i32] = &xs;
        // Disambiguate from the inherent slice method of the same name.
        let mut cursor = BidirectionalSequence::last(&seq);
        assert_eq!(*seq.read(&cursor), 3);
        seq.retreat(&mut cursor);
        seq.retreat(&mut cursor);
        assert_eq!(cursor, seq.begin());
        assert_eq!(*seq.read(&cursor), 1);
    }

    #[test]
    fn empty_slice() {
        let xs: [i32; 0] = [];
        let seq: &[i32] = &xs;
        assert!(Sequence::is_empty(&seq));
        assert_eq!(seq.begin(), seq.end());
    }

    #[test]
    fn borrowed_and_owned_agree() {
        let owned = vec!['a', 'b'];
        let borrowed: &[char] = &owned;
        assert_eq!(SizedSequence::len(&owned), SizedSequence::len(&borrowed));
        assert_eq!(owned.read(&0), borrowed.read(&0));
    }

    #[test]
    fn deque_round_trip() {
        let mut deque = VecDeque::new();
        deque.push_back(1);
        deque.push_back(2);
        let mut cursor = deque.begin();
        deque.advance(&mut cursor);
        assert_eq!(*deque.read(&cursor), 2);
        deque.retreat(&mut cursor);
        assert_eq!(*deque.read(&cursor), 1);
    }
}
