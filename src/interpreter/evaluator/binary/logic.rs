use crate::{
    ast::VariadicOperator,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::type_mismatch,
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates `&&` or `||` between two booleans.
    ///
    /// Both operands have already been evaluated, so there is no
    /// short-circuiting. Numbers are not accepted as truth values here.
    ///
    /// # Example
    /// ```
    /// use forest::{
    ///     ast::VariadicOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let a = Value::Boolean(true);
    /// let b = Value::Boolean(false);
    ///
    /// let result = Evaluator::eval_logic(VariadicOperator::Or, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// assert!(Evaluator::eval_logic(VariadicOperator::And, &a, &Value::Integer(1), 1).is_err());
    /// ```
    pub fn eval_logic(op: VariadicOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        match (op, left, right) {
            (VariadicOperator::And, Value::Boolean(a), Value::Boolean(b)) => {
                Ok(Value::Boolean(*a && *b))
            },
            (VariadicOperator::Or, Value::Boolean(a), Value::Boolean(b)) => {
                Ok(Value::Boolean(*a || *b))
            },
            _ => Err(type_mismatch(op, left, right, line)),
        }
    }
}
