use std::mem;

use crate::{
    comparator::Comparator,
    error::{Error, Result},
    predicate::Predicate,
};

/// Stable sort, so equal-ranked items keep their input order.
pub fn sort_in_place<C>(items: &mut [C::Item], cmp: &C)
where
    C: Comparator,
{
    items.sort_by(|a, b| cmp.compare(a, b));
}

pub fn sort_to_sequence<C>(items: &[C::Item], cmp: &C) -> Vec<C::Item>
where
    C: Comparator,
    C::Item: Clone,
{
    let mut out = items.to_vec();
    out.sort_by(|a, b| cmp.compare(a, b));
    out
}

/// Sorts by a fallible key extractor. Every key is extracted before any
/// item moves, so a failing extractor aborts with the sequence unchanged.
pub fn try_sort_in_place<T, F, K, E>(items: &mut Vec<T>, extract: F) -> Result<()>
where
    F: Fn(&T) -> std::result::Result<K, E>,
    K: Ord,
    E: std::error::Error + Send + Sync + 'static,
{
    let keys = items
        .iter()
        .map(&extract)
        .collect::<std::result::Result<Vec<_>, E>>()
        .map_err(|e| Error::KeyExtract(Box::new(e)))?;

    tracing::trace!("sorting {} items by extracted key", items.len());

    let mut pairs: Vec<(K, T)> = keys.into_iter().zip(mem::take(items)).collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    items.extend(pairs.into_iter().map(|(_, item)| item));

    Ok(())
}

pub fn try_sort_to_sequence<T, F, K, E>(items: &[T], extract: F) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> std::result::Result<K, E>,
    K: Ord,
    E: std::error::Error + Send + Sync + 'static,
{
    let mut out = items.to_vec();
    try_sort_in_place(&mut out, extract)?;
    Ok(out)
}

/// Removes the items matching `pred`, keeping the survivors in order.
/// Returns how many were removed.
pub fn filter_out<P>(items: &mut Vec<P::Item>, pred: &P) -> usize
where
    P: Predicate,
{
    let before = items.len();
    items.retain(|item| !pred.test(item));

    let removed = before - items.len();
    if removed > 0 {
        tracing::debug!("filtered out {} of {} items", removed, before);
    }
    removed
}

/// Fallible counterpart of [`filter_out`]: all decisions are made before
/// any removal, so a failing predicate leaves the sequence unchanged.
pub fn try_filter_out<T, F, E>(items: &mut Vec<T>, pred: F) -> Result<usize>
where
    F: Fn(&T) -> std::result::Result<bool, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    let hits = items
        .iter()
        .map(&pred)
        .collect::<std::result::Result<Vec<_>, E>>()
        .map_err(|e| Error::Predicate(Box::new(e)))?;

    let before = items.len();
    let mut idx = 0;
    items.retain(|_| {
        let keep = !hits[idx];
        idx += 1;
        keep
    });

    Ok(before - items.len())
}
