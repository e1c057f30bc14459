//! Compile-time capability resolution checks.
//!
//! The product's traversal category is the conjunction of its dimensions'
//! categories; these tests pin that resolution down by demanding the
//! corresponding std iterator traits (and element types) from concrete
//! instantiations. A failure here is a compile failure, not an assertion.

use std::cell::Cell;

use cartesian_view::{
    cartesian_product, cartesian_product_deep, multipass, retrace, CartesianProduct, CellSlice,
    Dimensions, SizedDimensions,
};

fn require_iterator<I: Iterator>(iter: I) -> usize {
    iter.count()
}

fn require_double_ended<I: DoubleEndedIterator>(iter: I) -> usize {
    iter.rev().count()
}

fn require_sized<D: SizedDimensions>(view: &CartesianProduct<D>) -> usize {
    view.len()
}

fn require_fused<I: std::iter::FusedIterator>(_: &I) {}

#[test]
fn all_bidirectional_dimensions_make_a_double_ended_iterator() {
    let a = [1, 2];
    let b = vec!['x', 'y'];
    let view = cartesian_product((&a, &b));
    assert_eq!(require_double_ended(view.iter()), 4);
}

#[test]
fn one_forward_only_dimension_degrades_to_forward() {
    let a = [1, 2];
    let b = multipass("xy".chars());
    // `view.iter().rev()` would not compile here; forward iteration works.
    let view = cartesian_product((&a, b));
    assert_eq!(require_iterator(view.iter()), 4);
}

#[test]
fn retrace_restores_bidirectionality() {
    let a = [1, 2];
    let b = retrace(multipass("xy".chars()));
    let view = cartesian_product((&a, b));
    assert_eq!(require_double_ended(view.iter()), 4);
}

#[test]
fn all_sized_dimensions_expose_len() {
    let a = [0u8; 2];
    let b = vec![0u8; 3];
    let view = cartesian_product((&a, &b));
    assert_eq!(require_sized(&view), 6);
}

#[test]
fn iterators_are_fused() {
    let a = [1];
    let view = cartesian_product((&a,));
    let mut iter = view.iter();
    require_fused(&iter);
    iter.next();
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn zero_arity_is_bidirectional_and_sized() {
    let view = cartesian_product(());
    assert_eq!(require_double_ended(view.iter()), 1);
    assert_eq!(require_sized(&view), 1);
}

#[test]
fn access_mode_fixes_the_element_types() {
    let cells = [Cell::new(1i64)];
    let tags = ['t'];

    let shallow = cartesian_product((CellSlice::new(&cells), &tags));
    let (cell, tag): (&Cell<i64>, &char) = shallow.iter().next().unwrap();
    cell.set(2);
    assert_eq!(*tag, 't');

    let deep = cartesian_product_deep((CellSlice::new(&cells), &tags));
    let (value, tag): (i64, &char) = deep.iter().next().unwrap();
    assert_eq!(value, 2);
    assert_eq!(*tag, 't');
}

#[test]
fn arity_is_a_compile_time_constant() {
    fn arity_of<D: Dimensions>(_: &CartesianProduct<D>) -> usize {
        D::ARITY
    }
    let a = [0];
    assert_eq!(arity_of(&cartesian_product(())), 0);
    assert_eq!(arity_of(&cartesian_product((&a,))), 1);
    assert_eq!(arity_of(&cartesian_product((&a, &a, &a))), 3);
}
