pub mod comparator;
pub mod error;
pub mod predicate;
pub mod record;
pub mod seq;

#[cfg(test)]
pub(crate) mod test_utils;

pub mod prelude {
    pub use crate::{
        comparator::prelude::*,
        error::{Error, Result},
        predicate::prelude::*,
        record::Record,
        seq::{
            filter_out, sort_in_place, sort_to_sequence, try_filter_out, try_sort_in_place,
            try_sort_to_sequence,
        },
    };
}
