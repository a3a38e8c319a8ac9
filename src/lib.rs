//! An insertion-ordered [`Container`] together with six read-only ways of walking it.
//!
//! The container only ever stores elements in the order they were added. Every other order is
//! produced on demand by a [`View`], which borrows the container and computes the order once:
//!
//! | alias | order |
//! |---|---|
//! | [`AscendingOrder`] | smallest to largest |
//! | [`DescendingOrder`] | largest to smallest |
//! | [`SideCrossOrder`] | smallest, largest, next smallest, next largest, ... |
//! | [`ReverseOrder`] | last added to first added |
//! | [`Order`] | first added to last added |
//! | [`MiddleOutOrder`] | middle element, then alternating left and right of it |
//!
//! ```
//! use orderly::{container, AscendingOrder, MiddleOutOrder};
//! let c = container![7, 15, 6, 1, 2];
//! assert_eq!(AscendingOrder::new(&c).to_vec(), vec![1, 2, 6, 7, 15]);
//! assert_eq!(MiddleOutOrder::new(&c).to_vec(), vec![6, 15, 1, 7, 2]);
//! assert_eq!(c.reverse().to_string(), "[2, 1, 6, 15, 7]");
//! ```
//!
//! The sorting orders need `T: Ord`; the rest work for any `T`.

pub mod container;
mod error;
pub mod settings;
pub mod view;

pub use container::Container;
pub use error::ContainerError;
pub use settings::*;
pub use view::{Cursor, Iter, View};

/// Smallest to largest.
pub type AscendingOrder<'a, T> = View<'a, T, Ascending>;
/// Largest to smallest.
pub type DescendingOrder<'a, T> = View<'a, T, Descending>;
/// Smallest, largest, next smallest, next largest.
pub type SideCrossOrder<'a, T> = View<'a, T, SideCross>;
/// Last added to first added.
pub type ReverseOrder<'a, T> = View<'a, T, Reverse>;
/// First added to last added.
pub type Order<'a, T> = View<'a, T, Insertion>;
/// Middle element first, then alternating left and right of it.
pub type MiddleOutOrder<'a, T> = View<'a, T, MiddleOut>;

#[cfg(test)]
mod property_tests;
