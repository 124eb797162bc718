use tally::iter::duplicates_by_key;

use crate::{AsSequence, Result, Value};

/// Collect the values occurring at least twice in a sequence.
///
/// Each duplicated value appears once in the result, in the order of its first occurrence in the
/// input. Values are compared by [`Value::identity`]: primitives by value, arrays and objects by
/// allocation, so two separately built but equal objects are not duplicates of each other.
///
/// Applying this twice is usually not the same as applying it once, since a value occurring
/// exactly twice occurs only once in the result.
///
/// # Errors
///
/// [`crate::Error::InvalidArgument`] if the input is not a sequence.
///
/// # Example
///
/// ```
/// use array_utils::{Value, find_duplicates};
///
/// let values: Vec<Value> = [1, 2, 2, 3, 1].map(Value::from).into();
/// assert_eq!(find_duplicates(&values).unwrap(), [Value::from(1), Value::from(2)]);
/// ```
pub fn find_duplicates<S: AsSequence + ?Sized>(input: &S) -> Result<Vec<Value>> {
    let values = input.as_sequence()?;

    let duplicates: Vec<Value> = duplicates_by_key(values, Value::identity)
        .into_iter()
        .cloned()
        .collect();

    log::trace!(
        "found {} duplicated values in {}",
        duplicates.len(),
        values.len()
    );
    Ok(duplicates)
}
