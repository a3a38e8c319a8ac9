//! Marker types selecting the order a [`View`](crate::View) walks a container in.

use std::fmt::Debug;

/// Runtime name of an [`Arrangement`], mostly useful for logging and display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrangementKind {
    Ascending,
    Descending,
    SideCross,
    Reverse,
    Insertion,
    MiddleOut,
}

impl std::fmt::Display for ArrangementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ArrangementKind::Ascending => "ascending",
            ArrangementKind::Descending => "descending",
            ArrangementKind::SideCross => "side-cross",
            ArrangementKind::Reverse => "reverse",
            ArrangementKind::Insertion => "insertion",
            ArrangementKind::MiddleOut => "middle-out",
        };
        f.write_str(name)
    }
}

/// Smallest to largest.
#[derive(Copy, Clone, Debug, Default)]
pub struct Ascending;

/// Largest to smallest.
#[derive(Copy, Clone, Debug, Default)]
pub struct Descending;

/// Smallest, largest, next smallest, next largest, and so on until the two ends meet.
#[derive(Copy, Clone, Debug, Default)]
pub struct SideCross;

/// Last inserted to first inserted.
#[derive(Copy, Clone, Debug, Default)]
pub struct Reverse;

/// First inserted to last inserted.
#[derive(Copy, Clone, Debug, Default)]
pub struct Insertion;

/// The element at `len / 2` first, then alternating one step left and one step right of it.
#[derive(Copy, Clone, Debug, Default)]
pub struct MiddleOut;

/// A strategy that turns the elements of a container into the index permutation a view walks.
///
/// Only the six markers in this module implement it. The ordering based ones
/// (`Ascending`, `Descending`, `SideCross`) are only available when `T: Ord`,
/// so a container of merely comparable-for-equality elements can still be
/// viewed in `Reverse`, `Insertion` and `MiddleOut` order.
pub trait Arrangement<T>: seal_arrangement::Sealed<T> + Debug + Copy + Default {
    const KIND: ArrangementKind;
}

pub(crate) mod seal_arrangement {
    pub trait Sealed<T> {
        /// Returns the positions of `elements` in the order they should be visited.
        /// The result is always a permutation of `0..elements.len()`.
        fn arrange(elements: &[T]) -> Vec<usize>;
    }
}

fn sorted_indices<T: Ord>(elements: &[T]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..elements.len()).collect();
    indices.sort_by(|&a, &b| elements[a].cmp(&elements[b]));
    indices
}

impl<T: Ord> seal_arrangement::Sealed<T> for Ascending {
    fn arrange(elements: &[T]) -> Vec<usize> {
        sorted_indices(elements)
    }
}
impl<T: Ord> Arrangement<T> for Ascending {
    const KIND: ArrangementKind = ArrangementKind::Ascending;
}

impl<T: Ord> seal_arrangement::Sealed<T> for Descending {
    fn arrange(elements: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..elements.len()).collect();
        indices.sort_by(|&a, &b| elements[b].cmp(&elements[a]));
        indices
    }
}
impl<T: Ord> Arrangement<T> for Descending {
    const KIND: ArrangementKind = ArrangementKind::Descending;
}

impl<T: Ord> seal_arrangement::Sealed<T> for SideCross {
    fn arrange(elements: &[T]) -> Vec<usize> {
        let mut sorted = sorted_indices(elements).into_iter();
        let mut indices = Vec::with_capacity(elements.len());
        // a double ended iterator stops cleanly once the two ends meet, so an
        // odd middle is only taken once and an empty input takes nothing
        while let Some(low) = sorted.next() {
            indices.push(low);
            match sorted.next_back() {
                Some(high) => indices.push(high),
                None => break,
            }
        }
        indices
    }
}
impl<T: Ord> Arrangement<T> for SideCross {
    const KIND: ArrangementKind = ArrangementKind::SideCross;
}

impl<T> seal_arrangement::Sealed<T> for Reverse {
    fn arrange(elements: &[T]) -> Vec<usize> {
        (0..elements.len()).rev().collect()
    }
}
impl<T> Arrangement<T> for Reverse {
    const KIND: ArrangementKind = ArrangementKind::Reverse;
}

impl<T> seal_arrangement::Sealed<T> for Insertion {
    fn arrange(elements: &[T]) -> Vec<usize> {
        (0..elements.len()).collect()
    }
}
impl<T> Arrangement<T> for Insertion {
    const KIND: ArrangementKind = ArrangementKind::Insertion;
}

impl<T> seal_arrangement::Sealed<T> for MiddleOut {
    fn arrange(elements: &[T]) -> Vec<usize> {
        let len = elements.len();
        if len == 0 {
            return Vec::new();
        }
        let middle = len / 2;
        let mut indices = Vec::with_capacity(len);
        indices.push(middle);

        let mut left = (0..middle).rev();
        let mut right = middle + 1..len;
        loop {
            match (left.next(), right.next()) {
                (None, None) => break,
                (l, r) => indices.extend(l.into_iter().chain(r)),
            }
        }
        indices
    }
}
impl<T> Arrangement<T> for MiddleOut {
    const KIND: ArrangementKind = ArrangementKind::MiddleOut;
}

#[cfg(test)]
mod tests {
    use super::seal_arrangement::Sealed;
    use super::*;

    #[test]
    fn ascending_sorts_positions() {
        let indices = <Ascending as Sealed<i32>>::arrange(&[7, 15, 6, 1, 2]);
        assert_eq!(indices, vec![3, 4, 2, 0, 1]);
    }

    #[test]
    fn descending_sorts_positions() {
        let indices = <Descending as Sealed<i32>>::arrange(&[7, 15, 6, 1, 2]);
        assert_eq!(indices, vec![1, 0, 2, 4, 3]);
    }

    #[test]
    fn side_cross_positions() {
        let indices = <SideCross as Sealed<i32>>::arrange(&[7, 15, 6, 1, 2]);
        // 1, 15, 2, 7, 6
        assert_eq!(indices, vec![3, 1, 4, 0, 2]);
    }

    #[test]
    fn side_cross_even_length() {
        let indices = <SideCross as Sealed<i32>>::arrange(&[4, 3, 2, 1]);
        // 1, 4, 2, 3
        assert_eq!(indices, vec![3, 0, 2, 1]);
    }

    #[test]
    fn middle_out_odd_length() {
        let indices = <MiddleOut as Sealed<i32>>::arrange(&[7, 15, 6, 1, 2]);
        assert_eq!(indices, vec![2, 1, 3, 0, 4]);
    }

    #[test]
    fn middle_out_even_length() {
        let indices = <MiddleOut as Sealed<i32>>::arrange(&[0; 6]);
        assert_eq!(indices, vec![3, 2, 4, 1, 5, 0]);
        let indices = <MiddleOut as Sealed<i32>>::arrange(&[0; 4]);
        assert_eq!(indices, vec![2, 1, 3, 0]);
        let indices = <MiddleOut as Sealed<i32>>::arrange(&[0; 2]);
        assert_eq!(indices, vec![1, 0]);
    }

    #[test]
    fn empty_inputs_arrange_to_nothing() {
        let empty: [i32; 0] = [];
        assert!(<Ascending as Sealed<i32>>::arrange(&empty).is_empty());
        assert!(<Descending as Sealed<i32>>::arrange(&empty).is_empty());
        assert!(<SideCross as Sealed<i32>>::arrange(&empty).is_empty());
        assert!(<Reverse as Sealed<i32>>::arrange(&empty).is_empty());
        assert!(<Insertion as Sealed<i32>>::arrange(&empty).is_empty());
        assert!(<MiddleOut as Sealed<i32>>::arrange(&empty).is_empty());
    }

    #[test]
    fn kind_names() {
        assert_eq!(ArrangementKind::SideCross.to_string(), "side-cross");
        assert_eq!(<MiddleOut as Arrangement<i32>>::KIND, ArrangementKind::MiddleOut);
    }
}
