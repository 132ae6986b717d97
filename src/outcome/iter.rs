use core::iter::FusedIterator;

use crate::outcome::core::Outcome;

/// Borrowing iterator over the value of an accepted outcome.
///
/// Yields at most one item; empty and rejected outcomes yield nothing.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: Option<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// Mutably borrowing iterator over the value of an accepted outcome.
#[derive(Debug)]
pub struct IterMut<'a, V> {
    inner: Option<&'a mut V>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> FusedIterator for IterMut<'_, V> {}

/// Owning iterator over the value of an accepted outcome.
#[derive(Debug, Clone)]
pub struct IntoIter<V> {
    inner: Option<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}

impl<V, E> IntoIterator for Outcome<V, E> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.ok() }
    }
}

impl<'a, V, E> IntoIterator for &'a Outcome<V, E> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, E> IntoIterator for &'a mut Outcome<V, E> {
    type Item = &'a mut V;
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V, E> Outcome<V, E> {
    /// Iterates over the value, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::accept(3);
    /// assert_eq!(outcome.iter().next(), Some(&3));
    /// assert_eq!(Outcome::<i32, &str>::empty().iter().next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        match self {
            Outcome::Accepted(value) => Iter { inner: Some(value) },
            _ => Iter { inner: None },
        }
    }

    /// Iterates mutably over the value, if present.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        match self {
            Outcome::Accepted(value) => IterMut { inner: Some(value) },
            _ => IterMut { inner: None },
        }
    }
}
