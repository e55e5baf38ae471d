use std::cmp;

use super::Comparator;

/// Inverts the ordering reported by the wrapped comparator. The result is
/// reversed, not the operands, so an asymmetric inner comparator still
/// reverses pair by pair.
pub struct ReverseComparator<C>
where
    C: Comparator,
{
    inner: C,
}

impl<C> ReverseComparator<C>
where
    C: Comparator,
{
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C> Default for ReverseComparator<C>
where
    C: Comparator + Default,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> Clone for ReverseComparator<C>
where
    C: Comparator + Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C> Comparator for ReverseComparator<C>
where
    C: Comparator,
{
    type Item = C::Item;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering {
        self.inner.compare(a, b).reverse()
    }
}
