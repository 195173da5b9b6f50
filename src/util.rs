//! Misc stuff.

use std::ops::RangeInclusive;

use crate::error::Error;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given range of values,
    /// both ends included.
    fn is_within(&self, range: RangeInclusive<Self>) -> bool where Self: Sized;
}

// Define RangeExt on *anything* that can be compared, though it’s only
// really ever used for numeric ranges...

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: RangeInclusive<Self>) -> bool {
        range.contains(self)
    }
}


/// Fails with `OutOfRange` if the value is present and outside the range.
/// An absent value always passes.
pub(crate) fn check_range(what: &'static str, value: Option<i32>, range: RangeInclusive<i32>) -> Result<(), Error> {
    match value {
        Some(v) if !v.is_within(range.clone()) => {
            Err(Error::out_of_range(what, v, *range.start(), *range.end()))
        },
        _ => Ok(()),
    }
}
