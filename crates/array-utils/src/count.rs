use core::hash::BuildHasher;
use std::collections::HashMap;

use tally::prelude::*;

use crate::{AsSequence, Result, Value};

/// Count the values of a sequence by their string form.
///
/// Each value is keyed by its [`Display`](std::fmt::Display) form, so `1` and `"1"` are counted
/// together, and so are all objects (`[object Object]`). The counts add up to the length of the
/// input.
///
/// # Errors
///
/// [`crate::Error::InvalidArgument`] if the input is not a sequence.
///
/// # Example
///
/// ```
/// use array_utils::{Value, count};
///
/// let values = [Value::from(1), Value::from(1), Value::from(2), Value::from("2")];
/// let counts = count(&values).unwrap();
/// assert_eq!(counts["1"], 2);
/// assert_eq!(counts["2"], 2);
/// ```
pub fn count<S: AsSequence + ?Sized>(input: &S) -> Result<HashMap<String, usize>> {
    count_with_hasher(input)
}

/// Same as [`count`], collecting into a map with a custom hasher.
pub fn count_with_hasher<H, S>(input: &S) -> Result<HashMap<String, usize, H>>
where
    H: BuildHasher + Default,
    S: AsSequence + ?Sized,
{
    let values = input.as_sequence()?;
    let counts: HashMap<String, usize, H> =
        values.iter().map(Value::to_string).into_hash_iter().tally();

    log::trace!("{} distinct keys in {} values", counts.len(), values.len());
    Ok(counts)
}
