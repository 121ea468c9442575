use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::describe_values,
        },
        value::core::{ArrayRef, Value},
    },
    util::num::{checked_index, dimension_to_length},
};

/// Most slots a single array level, or all levels of a nested array at the
/// same depth together, may have.
pub const MAX_ARRAY_SLOTS: usize = 1 << 24;

impl Evaluator<'_> {
    /// Builds a zero-filled, possibly nested array.
    ///
    /// The first dimension is the length of the outer level, the next one the
    /// length of each inner level, and so on. Innermost slots hold the
    /// integer `0`. Every slot of an outer level holds its own inner array.
    ///
    /// # Parameters
    /// - `dimensions`: One non-negative integer per level.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `OperandCountMismatch` if no dimension is given.
    /// - `TypeMismatch` if a dimension is not a non-negative integer.
    /// - `ArrayTooLarge` if any depth would hold more than
    ///   [`MAX_ARRAY_SLOTS`] slots in total.
    ///
    /// # Example
    /// ```
    /// use forest::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let grid = Evaluator::create_array(&[Value::Integer(2), Value::Integer(3)], 1).unwrap();
    /// assert_eq!(grid.to_string(), "[[0, 0, 0], [0, 0, 0]]");
    /// ```
    pub fn create_array(dimensions: &[Value], line: usize) -> EvalResult<Value> {
        let lengths = dimensions.iter()
                                .map(|dimension| match dimension {
                                    Value::Integer(n) => dimension_to_length(*n).ok_or_else(|| {
                                        RuntimeError::TypeMismatch {
                                            details: format!("array dimension must not be negative, found {n}"),
                                            line,
                                        }
                                    }),
                                    other => Err(RuntimeError::TypeMismatch {
                                        details: format!("array dimension must be an integer, found {}",
                                                         other.kind_name()),
                                        line,
                                    }),
                                })
                                .collect::<EvalResult<Vec<usize>>>()?;

        if lengths.is_empty() {
            return Err(RuntimeError::OperandCountMismatch { expected: 1,
                                                            found: 0,
                                                            line });
        }

        lengths.iter()
               .try_fold(1_usize, |slots, &length| {
                   slots.checked_mul(length).filter(|&total| total <= MAX_ARRAY_SLOTS)
               })
               .ok_or(RuntimeError::ArrayTooLarge { limit: MAX_ARRAY_SLOTS,
                                                    line })?;

        Ok(build_level(&lengths))
    }

    /// Evaluates `array[i][j]...`.
    ///
    /// # Parameters
    /// - `array`: Expression producing the array; it must produce exactly one
    ///   value.
    /// - `indices`: One index expression per level walked.
    /// - `env`: Current scope.
    /// - `depth`: Number of enclosing function calls.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The element reached. Nested arrays are returned by reference, so
    /// assigning into them is visible through the outer array.
    pub(in crate::interpreter::evaluator) fn eval_array_access(&mut self,
                                                               array: &Expr,
                                                               indices: &[Expr],
                                                               env: &Environment<'_>,
                                                               depth: usize,
                                                               line: usize)
                                                               -> EvalResult<Value> {
        let values = self.eval_expression(array, env, depth)?;
        let found = values.len();
        let [base] =
            <[Value; 1]>::try_from(values).map_err(|_| RuntimeError::NotASingleVariable { found,
                                                                                        line })?;

        let positions = self.eval_indices(indices, env, depth, line)?;
        positions.iter()
                 .try_fold(base, |current, &index| Self::element_at(&current, index, line))
    }

    /// Evaluates index expressions, each of which must produce exactly one
    /// integer.
    pub(in crate::interpreter::evaluator) fn eval_indices(&mut self,
                                                          indices: &[Expr],
                                                          env: &Environment<'_>,
                                                          depth: usize,
                                                          line: usize)
                                                          -> EvalResult<Vec<i64>> {
        indices.iter()
               .map(|index| {
                   let values = self.eval_expression(index, env, depth)?;
                   match values.as_slice() {
                       [Value::Integer(n)] => Ok(*n),
                       other => Err(RuntimeError::IndexNotInteger { found: describe_values(other),
                                                                    line }),
                   }
               })
               .collect()
    }

    /// Returns the element of `value` at `index`.
    pub(in crate::interpreter::evaluator) fn element_at(value: &Value,
                                                        index: i64,
                                                        line: usize)
                                                        -> EvalResult<Value> {
        let slots = as_array(value, line)?;
        let elements = slots.borrow();
        let length = elements.len();

        checked_index(index, length).map(|i| elements[i].clone())
                                    .ok_or(RuntimeError::IndexOutOfBounds { length,
                                                                            index,
                                                                            line })
    }
}

/// Borrows the storage of an array value.
pub(in crate::interpreter::evaluator) fn as_array(value: &Value, line: usize) -> EvalResult<&ArrayRef> {
    match value {
        Value::Array(slots) => Ok(slots),
        other => Err(RuntimeError::NotAnArray { found: other.kind_name(),
                                                line }),
    }
}

fn build_level(lengths: &[usize]) -> Value {
    match lengths {
        [] => Value::Integer(0),
        [length] => Value::new_array(vec![Value::Integer(0); *length]),
        [length, inner @ ..] => Value::new_array((0..*length).map(|_| build_level(inner)).collect()),
    }
}
