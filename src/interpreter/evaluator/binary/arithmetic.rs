use crate::{
    ast::VariadicOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::type_mismatch,
        },
        value::{
            core::Value,
            numeric::{Number, NumericPair},
        },
    },
    util::num::i64_to_f64,
};

impl Evaluator<'_> {
    /// Evaluates `+`, `-`, `*` or `/` on two operands.
    ///
    /// A string on either side of `+` concatenates with the other operand's
    /// text. Everything else is numeric: integer pairs stay integers, except
    /// that a division which does not come out even produces a float.
    ///
    /// The zero check for `/` runs before any kind check, so `/("a", 0)` is a
    /// division by zero rather than a type mismatch.
    pub(in crate::interpreter::evaluator) fn eval_arithmetic(op: VariadicOperator,
                                                             left: &Value,
                                                             right: &Value,
                                                             line: usize)
                                                             -> EvalResult<Value> {
        if op == VariadicOperator::Plus
           && (matches!(left, Value::String(_)) || matches!(right, Value::String(_)))
        {
            if left.is_scalar() && right.is_scalar() {
                return Ok(Value::String(format!("{left}{right}")));
            }
            return Err(type_mismatch(op, left, right, line));
        }

        if op == VariadicOperator::Divide && Number::from_value(right).is_some_and(Number::is_zero) {
            return Err(RuntimeError::DivideByZero { line });
        }

        match NumericPair::promote(left, right) {
            Some(NumericPair::Integers(a, b)) => Self::integer_arithmetic(op, a, b, line),
            Some(NumericPair::Floats(a, b)) => {
                let result = match op {
                    VariadicOperator::Plus => a + b,
                    VariadicOperator::Minus => a - b,
                    VariadicOperator::Times => a * b,
                    _ => a / b,
                };
                Ok(Value::Float(result))
            },
            None => Err(type_mismatch(op, left, right, line)),
        }
    }

    fn integer_arithmetic(op: VariadicOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        let result = match op {
            VariadicOperator::Plus => a.checked_add(b),
            VariadicOperator::Minus => a.checked_sub(b),
            VariadicOperator::Times => a.checked_mul(b),
            _ => return Self::integer_division(a, b, line),
        };

        result.map(Value::Integer).ok_or(RuntimeError::Overflow { line })
    }

    /// Divides two integers; the divisor is known to be non-zero.
    ///
    /// Exact quotients stay integers (`6 / 2 = 3`), others become floats
    /// (`7 / 2 = 3.5`).
    fn integer_division(a: i64, b: i64, line: usize) -> EvalResult<Value> {
        match (a.checked_rem(b), a.checked_div(b)) {
            (Some(0), Some(quotient)) => Ok(Value::Integer(quotient)),
            (Some(_), _) => Ok(Value::Float(i64_to_f64(a) / i64_to_f64(b))),
            _ => Err(RuntimeError::Overflow { line }),
        }
    }
}
