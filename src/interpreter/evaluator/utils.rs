use crate::{
    ast::VariadicOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Name of the built-in output function.
pub const PRINT: &str = "print";

/// Checks whether a name is reserved and cannot be declared as a function.
///
/// # Example
/// ```
/// use forest::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("print"));
/// assert!(!is_reserved_identifier("println"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    name == PRINT
}

/// Unwraps the value of an expression that must produce exactly one.
///
/// # Errors
/// `OperandCountMismatch` if `values` is empty or has more than one element.
pub fn single_value(values: Vec<Value>, line: usize) -> EvalResult<Value> {
    let found = values.len();
    let mut values = values.into_iter();

    match (values.next(), values.next()) {
        (Some(value), None) => Ok(value),
        _ => Err(RuntimeError::OperandCountMismatch { expected: 1,
                                                      found,
                                                      line }),
    }
}

/// Builds the error for an operator that does not accept its operands' kinds.
pub(in crate::interpreter::evaluator) fn type_mismatch(op: VariadicOperator,
                                                       left: &Value,
                                                       right: &Value,
                                                       line: usize)
                                                       -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                  left.kind_name(),
                                                  right.kind_name()),
                                 line }
}

/// Describes what an expression produced, for error messages.
pub(in crate::interpreter::evaluator) fn describe_values(values: &[Value]) -> String {
    match values {
        [] => "no value".to_string(),
        [value] => value.kind_name().to_string(),
        _ => format!("{} values", values.len()),
    }
}
