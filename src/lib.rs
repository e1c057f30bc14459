//! Lazy cartesian product views over heterogeneous multi-pass sequences.
//!
//! Given N independently traversable sequences, [`cartesian_product`]
//! builds a view whose traversal yields every combination of one element
//! from each sequence as an N-tuple, in odometer order (the last dimension
//! varies fastest, like the innermost loop of a nest) without ever
//! materializing the product.
//!
//! ```
//! use cartesian_view::cartesian_product;
//!
//! let suits = ["♠", "♥"];
//! let ranks = ["A", "K", "Q"];
//! let deck: Vec<_> = cartesian_product((&suits, &ranks))
//!     .iter()
//!     .map(|(s, r)| format!("{s}{r}"))
//!     .collect();
//! assert_eq!(deck, ["♠A", "♠K", "♠Q", "♥A", "♥K", "♥Q"]);
//! ```
//!
//! # Dimensions and capabilities
//!
//! A dimension is anything implementing [`Sequence`]: slices, arrays,
//! `Vec`, `VecDeque`, references to any of those (borrowed into the view
//! rather than moved), and any cloneable iterator through [`multipass`].
//! The view's own capabilities are the conjunction of its dimensions'
//! capabilities, resolved at compile time:
//!
//! - every dimension [`BidirectionalSequence`] ⇒ the iterator is
//!   double-ended, so `.rev()` works;
//! - every dimension [`SizedSequence`] ⇒ [`CartesianProduct::len`] is
//!   available (product of the lengths, unchecked).
//!
//! Random access is never exposed, even when every dimension would support
//! it. Single-pass inputs are rejected at compile time.
//!
//! If any one dimension is empty the whole product is empty. The product
//! of zero sequences is the multiplicative identity: it holds exactly one
//! empty tuple, never nothing.
//!
//! # Element access
//!
//! Construction fixes one of two access modes as a type parameter:
//! [`Shallow`] (the default) exposes each element the way its dimension
//! naturally does, while [`Deep`] ([`cartesian_product_deep`]) propagates
//! immutability into every element. See the [`access`] module docs.
//!
//! # Example: dice-sum distribution
//!
//! The number of ways three dice sum to each value, computed by walking
//! the 6³ product lazily:
//!
//! ```
//! use cartesian_view::cartesian_product;
//! use std::collections::BTreeMap;
//!
//! let die = [1u32, 2, 3, 4, 5, 6];
//! let rolls = cartesian_product((&die, &die, &die));
//!
//! let mut histogram = BTreeMap::new();
//! for (a, b, c) in rolls.iter() {
//!     *histogram.entry(a + b + c).or_insert(0u32) += 1;
//! }
//!
//! assert_eq!(rolls.len(), 216);
//! assert_eq!(histogram[&3], 1);
//! assert_eq!(histogram[&10], 27);
//! assert_eq!(histogram.values().sum::<u32>(), 216);
//! ```
//!
//! # Cursors
//!
//! Underneath the iterator sits an explicit cursor state machine:
//! [`CartesianProduct::begin`] and [`CartesianProduct::end`] hand out
//! [`Cursor`]s that can be stepped, compared and dereferenced directly.
//! Cursors borrow the view, so the view outliving its cursors is enforced
//! by the compiler, not by documentation. Contract violations (stepping
//! past END or BEGIN, reading at END, comparing cursors from different
//! views) are caught by `debug_assert!` and unchecked in release builds.

pub mod access;
pub mod adaptors;
pub mod dimensions;
pub mod sequence;
pub mod view;

pub use access::{AccessMode, Deep, Shallow};
pub use adaptors::{multipass, retrace, CellSlice, Multipass, MultipassCursor, Retrace};
pub use dimensions::{BidirectionalDimensions, Dimensions, SizedDimensions};
pub use sequence::{BidirectionalSequence, Sequence, SizedSequence};
pub use view::{cartesian_product, cartesian_product_deep, CartesianProduct, Cursor, Iter};
