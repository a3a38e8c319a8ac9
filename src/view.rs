//! Read-only orderings of a [`Container`].
//!
//! A [`View`] borrows a container and computes, once, the order its elements should be visited in.
//! The borrow keeps the container frozen for as long as the view lives, so every view reflects the
//! container exactly as it was when the view was built.
//!
//! Traversal goes through a pair of [`Cursor`]s, the same way for all six orderings, or through
//! the ordinary [`Iterator`] built on top of them.

use crate::container::write_list;
use crate::settings::seal_arrangement::Sealed;
use crate::{Arrangement, ArrangementKind, Container};
use std::fmt::{Debug, Display};
use std::marker::PhantomData;

/// An ordering of a container's elements, selected by the `Arrangement` marker.
///
/// Usually named through one of the aliases such as [`AscendingOrder`](crate::AscendingOrder).
///
/// # Examples
/// ```
/// use orderly::{Container, SideCrossOrder};
/// let container = Container::from([7, 15, 6, 1, 2]);
/// let view = SideCrossOrder::new(&container);
/// let seen: Vec<i32> = view.iter().copied().collect();
/// assert_eq!(seen, vec![1, 15, 2, 7, 6]);
/// ```
pub struct View<'a, T, A>
where
    A: Arrangement<T>,
{
    elements: &'a [T],
    order: Vec<usize>,
    arrangement: PhantomData<A>,
}

impl<'a, T, A> View<'a, T, A>
where
    A: Arrangement<T>,
{
    /// Builds the view over the container's current contents.
    pub fn new(container: &'a Container<T>) -> Self {
        let elements = container.as_slice();
        let order = <A as Sealed<T>>::arrange(elements);
        debug_assert_eq!(order.len(), elements.len());
        log::debug!("built {} view over {} elements", A::KIND, order.len());
        View {
            elements,
            order,
            arrangement: PhantomData,
        }
    }

    /// Which ordering this view produces.
    #[inline]
    pub fn kind(&self) -> ArrangementKind {
        A::KIND
    }

    /// Number of elements the view visits. Always the container's length.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the `n`th element in this view's order.
    #[inline]
    pub fn get(&self, n: usize) -> Option<&'a T> {
        let elements = self.elements;
        self.order.get(n).map(|&i| &elements[i])
    }

    /// The container positions in the order they are visited.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// A cursor on the first element of the ordering.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor {
            elements: self.elements,
            order: &self.order,
            position: 0,
        }
    }

    /// A cursor one past the last element of the ordering.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor {
            elements: self.elements,
            order: &self.order,
            position: self.order.len(),
        }
    }

    /// Iterates the elements in this view's order. Can be called any number of times.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            front: self.begin(),
            back: self.end(),
        }
    }

    /// Collects the ordering into an owned `Vec`.
    /// # Examples
    /// ```
    /// # use orderly::Container;
    /// let container = Container::from([7, 15, 6, 1, 2]);
    /// assert_eq!(container.middle_out().to_vec(), vec![6, 15, 1, 7, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T, A> Clone for View<'a, T, A>
where
    A: Arrangement<T>,
{
    fn clone(&self) -> Self {
        View {
            elements: self.elements,
            order: self.order.clone(),
            arrangement: PhantomData,
        }
    }
}

impl<'a, T: Debug, A> Debug for View<'a, T, A>
where
    A: Arrangement<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Display, A> Display for View<'a, T, A>
where
    A: Arrangement<T>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_list(f, self.iter())
    }
}

impl<'v, 'a, T, A> IntoIterator for &'v View<'a, T, A>
where
    A: Arrangement<T>,
{
    type Item = &'v T;
    type IntoIter = Iter<'v, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A> PartialEq<[T]> for View<'a, T, A>
where
    T: PartialEq,
    A: Arrangement<T>,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<'a, T, A> PartialEq<Vec<T>> for View<'a, T, A>
where
    T: PartialEq,
    A: Arrangement<T>,
{
    fn eq(&self, other: &Vec<T>) -> bool {
        self == other.as_slice()
    }
}

/// A position within a [`View`]'s ordering.
///
/// Cursors compare equal when they belong to the same view and sit at the same position, so a
/// traversal runs until the cursor obtained from [`View::begin`] equals the one from [`View::end`].
///
/// # Examples
/// ```
/// # use orderly::Container;
/// let container = Container::from([7, 15, 6, 1, 2]);
/// let view = container.reverse();
/// let mut seen = Vec::new();
/// let mut cursor = view.begin();
/// while cursor != view.end() {
///     seen.push(*cursor.get().unwrap());
///     cursor.advance();
/// }
/// assert_eq!(seen, vec![2, 1, 6, 15, 7]);
/// ```
pub struct Cursor<'v, T> {
    elements: &'v [T],
    // the view's own vec, so its address identifies the view even when empty
    order: &'v Vec<usize>,
    position: usize,
}

impl<'v, T> Cursor<'v, T> {
    /// The element under the cursor, or `None` once it has reached the end.
    #[inline]
    pub fn get(&self) -> Option<&'v T> {
        let elements = self.elements;
        self.order.get(self.position).map(|&i| &elements[i])
    }

    /// Moves one step forward. A cursor at the end stays there.
    #[inline]
    pub fn advance(&mut self) {
        if self.position < self.order.len() {
            self.position += 1;
        }
    }

    #[inline]
    fn retreat(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// How many steps from the start of the ordering this cursor is.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.position == self.order.len()
    }
}

impl<T> Clone for Cursor<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.order, other.order) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.order.len())
            .finish()
    }
}

/// An iterator over a [`View`], walking a begin cursor up to an end cursor.
/// This struct is created by [`View::iter`].
pub struct Iter<'v, T> {
    front: Cursor<'v, T>,
    back: Cursor<'v, T>,
}

impl<'v, T> Iterator for Iter<'v, T> {
    type Item = &'v T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.advance();
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.position - self.front.position;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        self.back.get()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[doc(hidden)]
pub(crate) mod serde_impls {
    use super::*;
    use serde::ser::SerializeSeq;
    use serde::{Serialize, Serializer};

    impl<'a, T, A> Serialize for View<'a, T, A>
    where
        T: Serialize,
        A: Arrangement<T>,
    {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for elem in self.iter() {
                seq.serialize_element(elem)?;
            }
            seq.end()
        }
    }

}
