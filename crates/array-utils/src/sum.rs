use crate::{AsSequence, Error, Result, Value, coerce::to_number};

/// Add up all values of a sequence, converting each to a number.
///
/// Values are added left to right, starting from `0`, so the result is exactly the `f64` sum in
/// index order. See [`crate::coerce`] for which values convert and to what.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if the input is not a sequence.
/// - [`Error::InvalidElement`] for the first value that does not convert to a number.
///
/// # Example
///
/// ```
/// use array_utils::{Value, sum};
///
/// let values = [Value::from(1), Value::from("2.5"), Value::from(true)];
/// assert_eq!(sum(&values).unwrap(), 4.5);
/// ```
pub fn sum<S: AsSequence + ?Sized>(input: &S) -> Result<f64> {
    let values = input.as_sequence()?;
    log::trace!("summing {} values", values.len());

    values
        .iter()
        .enumerate()
        .try_fold(0.0, |total, (index, value)| match to_number(value) {
            Some(n) => Ok(total + n),
            None => Err(invalid_element(index, value)),
        })
}

fn invalid_element(index: usize, value: &Value) -> Error {
    log::debug!("element #{index} of kind {} is not a number", value.kind());
    Error::InvalidElement {
        index,
        value: value.to_json(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_sum() -> Result<()> {
        assert_eq!(sum(&Vec::<Value>::new())?, 0.0);
        assert_eq!(sum(&Value::from(json!([1, 2, 3])))?, 6.0);
        assert_eq!(sum(&Value::from(json!(["1", "2.5", 3])))?, 6.5);
        assert_eq!(sum(&Value::from(json!([true, null, "", " 4 "])))?, 5.0);
        assert_eq!(sum(&Value::from(json!(["0x10", "1e2", -16])))?, 100.0);
        Ok(())
    }

    #[test]
    fn test_sum_is_left_to_right() -> Result<()> {
        let values = [Value::from(1e16), Value::from(1.0), Value::from(-1e16)];
        assert_eq!(sum(&values)?, 1e16 + 1.0 - 1e16);

        let values = [Value::from(0.1), Value::from(0.2), Value::from(0.3)];
        assert_eq!(sum(&values)?, 0.1 + 0.2 + 0.3);
        Ok(())
    }

    #[test]
    fn test_sum_infinities() -> Result<()> {
        assert_eq!(sum(&Value::from(json!(["Infinity", 1])))?, f64::INFINITY);

        // inf - inf is not an element conversion failure
        let total = sum(&Value::from(json!(["Infinity", "-Infinity"])))?;
        assert!(total.is_nan());
        Ok(())
    }

    #[test]
    fn test_invalid_element() {
        let err = sum(&Value::from(json!([1, "x", 3]))).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidElement {
                index: 1,
                value: r#""x""#.into()
            }
        );
        assert_eq!(
            err.to_string(),
            r#"Element #1 cannot be converted to a number: "x""#
        );
    }

    #[test]
    fn test_first_invalid_element_is_reported() {
        let values = [
            Value::from(1),
            Value::from(f64::NAN),
            Value::array([Value::from(2)]),
        ];
        assert!(matches!(
            sum(&values),
            Err(Error::InvalidElement { index: 1, ref value }) if value == "null"
        ));

        let values = [Value::from(1), Value::from(json!({"a": [1]}))];
        assert!(matches!(
            sum(&values),
            Err(Error::InvalidElement { index: 1, ref value }) if value == r#"{"a":[1]}"#
        ));
    }

    #[test]
    fn test_invalid_argument() {
        assert!(matches!(
            sum(&Value::from(3)),
            Err(Error::InvalidArgument { found: "number" })
        ));
        assert!(matches!(
            sum(&Value::Null),
            Err(Error::InvalidArgument { found: "null" })
        ));
    }
}
