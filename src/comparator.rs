use std::cmp;

mod chain_comparator;
mod key_comparator;
mod natural_comparator;
mod reverse_comparator;

pub mod prelude {
    pub use super::{
        Comparator, ComparatorExt, chain_comparator::ChainComparator,
        key_comparator::{KeyComparator, compare_by},
        natural_comparator::{NaturalComparator, natural},
        reverse_comparator::ReverseComparator,
    };
}

use chain_comparator::ChainComparator;
use key_comparator::{KeyComparator, compare_by};
use reverse_comparator::ReverseComparator;

pub trait Comparator: Send + Sync {
    type Item;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> cmp::Ordering;
}

pub trait ComparatorExt: Comparator + Sized {
    /// Order by `self`, break exact ties with `secondary`.
    fn then_by<C>(self, secondary: C) -> ChainComparator<Self, C>
    where
        C: Comparator<Item = Self::Item>,
    {
        ChainComparator::new(self, secondary)
    }

    fn then_by_key<F, K>(self, extract: F) -> ChainComparator<Self, KeyComparator<F, Self::Item, K>>
    where
        F: Fn(&Self::Item) -> K + Send + Sync,
        K: Ord,
    {
        ChainComparator::new(self, compare_by(extract))
    }

    fn reversed(self) -> ReverseComparator<Self> {
        ReverseComparator::new(self)
    }
}

impl<C> ComparatorExt for C where C: Comparator {}
