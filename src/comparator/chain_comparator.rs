use std::cmp::{self, Ordering::*};

use super::Comparator;

/// Orders by `primary`; the secondary is consulted only on an exact tie.
pub struct ChainComparator<A, B>
where
    A: Comparator,
    B: Comparator<Item = A::Item>,
{
    primary: A,
    secondary: B,
}

impl<A, B> ChainComparator<A, B>
where
    A: Comparator,
    B: Comparator<Item = A::Item>,
{
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A, B> Default for ChainComparator<A, B>
where
    A: Comparator + Default,
    B: Comparator<Item = A::Item> + Default,
{
    fn default() -> Self {
        Self::new(A::default(), B::default())
    }
}

impl<A, B> Clone for ChainComparator<A, B>
where
    A: Comparator + Clone,
    B: Comparator<Item = A::Item> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            primary: self.primary.clone(),
            secondary: self.secondary.clone(),
        }
    }
}

impl<A, B> Comparator for ChainComparator<A, B>
where
    A: Comparator,
    B: Comparator<Item = A::Item>,
{
    type Item = A::Item;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering {
        match self.primary.compare(a, b) {
            Equal => self.secondary.compare(a, b),
            res => res,
        }
    }
}
