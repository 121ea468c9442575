use crate::{
    ast::{OperatorStep, VariadicOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Folds `operands` through an operator chain.
    ///
    /// Every operator but the last consumes as many leading operands as its
    /// arity (two unless annotated) and puts its result back in front of the
    /// remaining ones. The last operator consumes everything left; an
    /// annotation on it is only checked. `[]` anywhere in the chain builds an
    /// array from the operands it is handed and ends the fold.
    ///
    /// # Parameters
    /// - `operators`: The chain, in application order.
    /// - `operands`: Operand values, already evaluated.
    /// - `line`: Line of the variadic expression, for error reporting.
    ///
    /// # Returns
    /// The single folded value.
    ///
    /// # Errors
    /// - `OperandCountMismatch` if an operator runs out of operands or the
    ///   last operator's annotation disagrees with what is left.
    /// - Any error of the binary operators, which aborts the whole chain.
    ///
    /// # Example
    /// ```
    /// use forest::{
    ///     ast::{OperatorStep, VariadicOperator},
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// // + $ * (2, 3, 4) is (2 + 3) * 4
    /// let chain = [OperatorStep { op: VariadicOperator::Plus, arity: None, line: 1 },
    ///              OperatorStep { op: VariadicOperator::Times, arity: None, line: 1 }];
    /// let operands = vec![Value::Integer(2), Value::Integer(3), Value::Integer(4)];
    ///
    /// assert_eq!(Evaluator::fold_chain(&chain, operands, 1).unwrap(), Value::Integer(20));
    /// ```
    pub fn fold_chain(operators: &[OperatorStep],
                      operands: Vec<Value>,
                      line: usize)
                      -> EvalResult<Value> {
        let Some((last, leading)) = operators.split_last() else {
            return Err(RuntimeError::MissingValue { line });
        };
        let mut operands = operands;

        for step in leading {
            if step.op == VariadicOperator::ArrayCreate {
                return Self::create_array(&operands, line);
            }

            let arity = step.arity.unwrap_or(2);
            if arity > operands.len() {
                return Err(RuntimeError::OperandCountMismatch { expected: arity,
                                                                found: operands.len(),
                                                                line });
            }

            let rest = operands.split_off(arity);
            let folded = Self::apply_step(step, &operands, line)?;
            tracing::trace!(operator = %step.op, arity, %folded, "folded operands");

            operands = std::iter::once(folded).chain(rest).collect();
        }

        if last.op == VariadicOperator::ArrayCreate {
            return Self::create_array(&operands, line);
        }
        if let Some(expected) = last.arity
           && expected != operands.len()
        {
            return Err(RuntimeError::OperandCountMismatch { expected,
                                                            found: operands.len(),
                                                            line });
        }

        Self::apply_step(last, &operands, line)
    }

    /// Applies one operator to exactly the operands it consumes.
    ///
    /// A single operand is returned unchanged, except under `-`, which
    /// negates it.
    fn apply_step(step: &OperatorStep, operands: &[Value], line: usize) -> EvalResult<Value> {
        match operands {
            [] => Err(RuntimeError::OperandCountMismatch { expected: step.arity.unwrap_or(1),
                                                           found: 0,
                                                           line }),
            [single] if step.op == VariadicOperator::Minus => Self::negate(single, line),
            [first, rest @ ..] => rest.iter().try_fold(first.clone(), |acc, next| {
                                                 Self::eval_binary(step.op, &acc, next, line)
                                             }),
        }
    }
}
