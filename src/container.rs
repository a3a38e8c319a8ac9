//! A [`Container`] is an insertion-ordered bag of elements that never reorders its own storage.
//! Sorted, reversed and the other orderings are produced on demand by borrowing the container into a [`View`](crate::View).

use crate::{
    Ascending, AscendingOrder, ContainerError, Descending, DescendingOrder, Insertion,
    MiddleOut, MiddleOutOrder, Order, Reverse, ReverseOrder, SideCross, SideCrossOrder, View,
};
use std::fmt::{Debug, Display};
use std::ops::Deref;

/// An insertion-ordered sequence of elements. Duplicates are allowed.
///
/// Elements only enter through [`add`](Container::add) (or construction) and only leave through
/// [`remove`](Container::remove), so the storage order is always the order of the `add` calls
/// with removed values taken out.
///
/// # Examples
/// ```
/// use orderly::Container;
/// let mut container = Container::new();
/// container.add(7);
/// container.add(15);
/// container.add(6);
/// assert_eq!(container.len(), 3);
/// assert_eq!(container.to_string(), "[7, 15, 6]");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Container<T> {
    elements: Vec<T>,
}

impl<T: Debug> Debug for Container<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Display> Display for Container<T> {
    /// Renders the elements in insertion order as `[a, b, c]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_list(f, self.iter())
    }
}

pub(crate) fn write_list<'a, T, I>(f: &mut std::fmt::Formatter<'_>, items: I) -> std::fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        Display::fmt(item, f)?;
    }
    f.write_str("]")
}

impl<T> Container<T> {
    /// Creates a new, empty `Container`.
    /// # Examples
    /// ```
    /// # use orderly::Container;
    /// let container: Container<i32> = Container::new();
    /// assert!(container.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Container {
            elements: Vec::new(),
        }
    }

    /// Creates a new, empty `Container` with room for at least `cap` elements before reallocating.
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        Container {
            elements: Vec::with_capacity(cap),
        }
    }

    /// Appends an element after everything already in the container.
    /// # Examples
    /// ```
    /// # use orderly::Container;
    /// let mut container = Container::new();
    /// container.add(1);
    /// container.add(1);
    /// assert_eq!(container.as_slice(), &[1, 1]);
    /// ```
    #[inline]
    pub fn add(&mut self, elem: T) {
        self.elements.push(elem);
        log::trace!("add: len={}", self.elements.len());
    }

    /// Returns the number of elements in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, counting in insertion order.
    ///
    /// # Errors
    /// Returns [`ContainerError::OutOfRange`] when `index >= len`.
    /// # Examples
    /// ```
    /// # use orderly::{Container, ContainerError};
    /// let container = Container::from([5, 3, 8]);
    /// assert_eq!(container.at(1), Ok(&3));
    /// assert_eq!(container.at(3), Err(ContainerError::OutOfRange { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        self.elements.get(index).ok_or_else(|| {
            log::debug!("at: index {index} out of range for len {}", self.elements.len());
            ContainerError::OutOfRange {
                index,
                len: self.elements.len(),
            }
        })
    }

    /// Returns the elements as a slice in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an independent copy of the elements in insertion order.
    #[inline]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Consumes the container, returning its storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Views the container from its smallest to its largest element.
    #[inline]
    pub fn ascending(&self) -> AscendingOrder<'_, T>
    where
        T: Ord,
    {
        View::<T, Ascending>::new(self)
    }

    /// Views the container from its largest to its smallest element.
    #[inline]
    pub fn descending(&self) -> DescendingOrder<'_, T>
    where
        T: Ord,
    {
        View::<T, Descending>::new(self)
    }

    /// Views the container alternating between its smallest and largest remaining elements.
    #[inline]
    pub fn side_cross(&self) -> SideCrossOrder<'_, T>
    where
        T: Ord,
    {
        View::<T, SideCross>::new(self)
    }

    /// Views the container from the last added element to the first.
    #[inline]
    pub fn reverse(&self) -> ReverseOrder<'_, T> {
        View::<T, Reverse>::new(self)
    }

    /// Views the container in insertion order.
    #[inline]
    pub fn order(&self) -> Order<'_, T> {
        View::<T, Insertion>::new(self)
    }

    /// Views the container starting from its middle element and working outwards.
    #[inline]
    pub fn middle_out(&self) -> MiddleOutOrder<'_, T> {
        View::<T, MiddleOut>::new(self)
    }
}

impl<T: PartialEq> Container<T> {
    /// Returns `true` if any element equals `elem`.
    #[inline]
    pub fn contains(&self, elem: &T) -> bool {
        self.elements.contains(elem)
    }

    /// Removes every element equal to `elem`, keeping the survivors in their relative order.
    /// Returns how many elements were removed.
    ///
    /// # Errors
    /// Returns [`ContainerError::NotFound`] when no element equals `elem`. The container is left untouched.
    /// # Examples
    /// ```
    /// # use orderly::{Container, ContainerError};
    /// let mut container = Container::from([5, 3, 8, 3]);
    /// assert_eq!(container.remove(&3), Ok(2));
    /// assert_eq!(container.as_slice(), &[5, 8]);
    /// assert_eq!(container.remove(&10), Err(ContainerError::NotFound));
    /// assert_eq!(container.as_slice(), &[5, 8]);
    /// ```
    pub fn remove(&mut self, elem: &T) -> Result<usize, ContainerError> {
        // membership is checked before retain touches anything
        if !self.contains(elem) {
            log::debug!("remove: element not found among {} elements", self.elements.len());
            return Err(ContainerError::NotFound);
        }
        let before = self.elements.len();
        self.elements.retain(|e| e != elem);
        let removed = before - self.elements.len();
        log::trace!("remove: removed={removed} len={}", self.elements.len());
        Ok(removed)
    }
}

impl<T> Default for Container<T> {
    #[inline]
    fn default() -> Self {
        Container::new()
    }
}

impl<T> Deref for Container<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> AsRef<[T]> for Container<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> std::borrow::Borrow<[T]> for Container<T> {
    #[inline]
    fn borrow(&self) -> &[T] {
        &self.elements
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> FromIterator<T> for Container<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Container {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Container<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<T> From<Vec<T>> for Container<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Container { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for Container<T> {
    #[inline]
    fn from(array: [T; N]) -> Self {
        From::from(Vec::from(array))
    }
}

impl<T: Clone> From<&[T]> for Container<T> {
    #[inline]
    fn from(slice: &[T]) -> Self {
        From::from(slice.to_vec())
    }
}

impl<T> PartialEq<[T]> for Container<T>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T> PartialEq<Vec<T>> for Container<T>
where
    T: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[doc(hidden)]
pub(crate) mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T> Serialize for Container<T>
    where
        T: Serialize,
    {
        #[inline]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.as_slice().serialize(serializer)
        }
    }

    impl<'src, T> Deserialize<'src> for Container<T>
    where
        T: Deserialize<'src>,
    {
        #[inline]
        fn deserialize<D: Deserializer<'src>>(deserializer: D) -> Result<Self, D::Error> {
            let vec = <Vec<T> as Deserialize<'src>>::deserialize(deserializer)?;
            Ok(Container::from(vec))
        }
    }

}

/// Creates a [`Container`] holding the arguments in order, like `vec!`.
///
/// # Examples
/// ```
/// use orderly::container;
/// let c = container![7, 15, 6];
/// assert_eq!(c.as_slice(), &[7, 15, 6]);
/// let zeros = container![0; 3];
/// assert_eq!(zeros.len(), 3);
/// ```
#[macro_export]
macro_rules! container {
    () => {
        $crate::Container::<_>::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::Container::<_>::from(vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Container::<_>::from(vec![$($x),+])
    };
}
