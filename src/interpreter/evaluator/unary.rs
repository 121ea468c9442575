use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::single_value,
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation.
    ///
    /// - `!`: logical negation of a boolean.
    /// - `=`: identity; the operand is returned unchanged.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `expr`: The operand expression. It must produce exactly one value.
    /// - `env`: Current scope.
    /// - `depth`: Number of enclosing function calls.
    /// - `line`: Line number for error reporting.
    pub(in crate::interpreter::evaluator) fn eval_unary_op(&mut self,
                                                           op: UnaryOperator,
                                                           expr: &Expr,
                                                           env: &Environment<'_>,
                                                           depth: usize,
                                                           line: usize)
                                                           -> EvalResult<Value> {
        let value = single_value(self.eval_expression(expr, env, depth)?, line)?;

        match op {
            UnaryOperator::Not => match value {
                Value::Boolean(b) => Ok(Value::Boolean(!b)),
                other => Err(RuntimeError::TypeMismatch { details: format!("cannot apply '!' to {}",
                                                                           other.kind_name()),
                                                          line }),
            },
            UnaryOperator::Identity => Ok(value),
        }
    }

    /// Arithmetic negation, the single-operand form of `-`.
    ///
    /// Booleans and characters negate their numeric reading, so `-(true)` is
    /// `-1`.
    pub(in crate::interpreter::evaluator) fn negate(value: &Value,
                                                    line: usize)
                                                    -> EvalResult<Value> {
        match value {
            Value::Integer(n) => n.checked_neg()
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::Overflow { line }),
            Value::Float(x) => Ok(Value::Float(-x)),
            Value::Boolean(b) => Ok(Value::Integer(-i64::from(*b))),
            Value::Character(c) => Ok(Value::Integer(-i64::from(u32::from(*c)))),
            other => Err(RuntimeError::TypeMismatch { details: format!("cannot negate {}",
                                                                       other.kind_name()),
                                                      line }),
        }
    }
}
