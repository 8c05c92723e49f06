//! Argument checking for native functions.
//!
//! Argument positions are 1-based, as scripts count them.  A missing
//! argument is reported as `no value`.

use crate::domain::ScriptValue;
use crate::error::ScriptError;

fn bad(index: usize, expected: &'static str, got: Option<&ScriptValue>) -> ScriptError {
    ScriptError::BadArgument {
        index,
        expected,
        got: got.map_or("no value", ScriptValue::type_name),
    }
}

/// Returns argument `index` as a boolean.
pub fn check_bool(args: &[ScriptValue], index: usize) -> Result<bool, ScriptError> {
    let arg = args.get(index - 1);
    arg.and_then(ScriptValue::as_bool)
        .ok_or_else(|| bad(index, "boolean", arg))
}

/// Returns argument `index` as a number.
pub fn check_number(args: &[ScriptValue], index: usize) -> Result<f64, ScriptError> {
    let arg = args.get(index - 1);
    arg.and_then(ScriptValue::as_number)
        .ok_or_else(|| bad(index, "number", arg))
}

/// Returns argument `index` as a string.
pub fn check_str(args: &[ScriptValue], index: usize) -> Result<&str, ScriptError> {
    let arg = args.get(index - 1);
    arg.and_then(ScriptValue::as_str)
        .ok_or_else(|| bad(index, "string", arg))
}

/// Collects a list of names given either as separate string arguments or as
/// a single table of strings in the first position.
pub fn check_names(args: &[ScriptValue]) -> Result<Vec<&str>, ScriptError> {
    match args.first() {
        Some(ScriptValue::Table(items)) => items
            .iter()
            .map(|item| item.as_str().ok_or_else(|| bad(1, "string", Some(item))))
            .collect(),
        _ => (1..=args.len()).map(|i| check_str(args, i)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bool() {
        let args = [ScriptValue::from(true), ScriptValue::from("no")];

        assert_eq!(check_bool(&args, 1), Ok(true));
        assert_eq!(
            check_bool(&args, 2),
            Err(ScriptError::BadArgument { index: 2, expected: "boolean", got: "string" })
        );
        assert_eq!(
            check_bool(&args, 3),
            Err(ScriptError::BadArgument { index: 3, expected: "boolean", got: "no value" })
        );
    }

    #[test]
    fn test_check_number_and_str() {
        let args = [ScriptValue::from(4.5), ScriptValue::from("a"), ScriptValue::Nil];

        assert_eq!(check_number(&args, 1), Ok(4.5));
        assert_eq!(check_str(&args, 2), Ok("a"));
        assert_eq!(
            check_number(&args, 3),
            Err(ScriptError::BadArgument { index: 3, expected: "number", got: "nil" })
        );
    }

    #[test]
    fn test_names_from_varargs() {
        let args = [ScriptValue::from("a"), ScriptValue::from("b")];
        assert_eq!(check_names(&args), Ok(vec!["a", "b"]));
        assert_eq!(check_names(&[]), Ok(vec![]));
    }

    #[test]
    fn test_names_from_table() {
        // Arrange: anything after the table is ignored
        let args = [
            ScriptValue::Table(vec![ScriptValue::from("x"), ScriptValue::from("y")]),
            ScriptValue::from(1.0),
        ];

        // Act / Assert
        assert_eq!(check_names(&args), Ok(vec!["x", "y"]));
    }

    #[test]
    fn test_non_string_names_are_rejected() {
        let varargs = [ScriptValue::from("a"), ScriptValue::from(2.0)];
        let table = [ScriptValue::Table(vec![ScriptValue::from(false)])];

        assert_eq!(
            check_names(&varargs),
            Err(ScriptError::BadArgument { index: 2, expected: "string", got: "number" })
        );
        assert_eq!(
            check_names(&table),
            Err(ScriptError::BadArgument { index: 1, expected: "string", got: "boolean" })
        );
    }
}
