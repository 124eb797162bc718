#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![doc = include_str!("../README.md")]

pub mod prelude {
    //! Import of useful traits and types from the crate

    pub use crate::{Duplicates, Tally, iter::*, num_traits::*};
}

pub mod iter;
pub mod num_traits;

/// A trait for counting occurrences of elements
///
/// This trait provides functionality to count the occurrences of each unique element in a
/// collection.
pub trait Tally<R> {
    /// Count how many times each unique element of an iterator appears
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use tally::prelude::*;
    ///
    /// let items = vec![1, 2, 1, 3];
    /// let counts: HashMap<i32, usize> = items.into_hash_iter().tally();
    /// assert_eq!(counts[&1], 2);
    /// assert_eq!(counts[&3], 1);
    /// ```
    fn tally(self) -> R;
}

/// A trait for finding elements which occur more than once
pub trait Duplicates<E> {
    /// Collect every element that occurs at least twice
    ///
    /// Each duplicated element is returned exactly once, at the position of its first
    /// occurrence. Later repeats are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use tally::prelude::*;
    ///
    /// let items = vec![1, 2, 2, 3, 1];
    /// assert_eq!(items.into_hash_iter().duplicates(), [1, 2]);
    /// ```
    fn duplicates(self) -> Vec<E>;
}
