use crate::{
    ast::VariadicOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::type_mismatch,
        },
        value::{core::Value, numeric::NumericPair},
    },
    util::num::i64_to_f64,
};

impl Evaluator<'_> {
    /// Evaluates an exponentiation operation.
    ///
    /// Integer–integer exponentiation uses checked arithmetic. Negative integer
    /// exponents are computed in floating-point form. In all other cases,
    /// operands are promoted to floats and evaluated with `powf`.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the result of `base ** exponent`.
    ///
    /// # Example
    /// ```
    /// use forest::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let b = Value::Integer(2);
    /// let e = Value::Integer(10);
    /// let line = 1;
    ///
    /// let result = Evaluator::eval_power(&b, &e, line).unwrap();
    /// assert_eq!(result, Value::Integer(1024));
    ///
    /// let result = Evaluator::eval_power(&b, &Value::Integer(-1), line).unwrap();
    /// assert_eq!(result, Value::Float(0.5));
    /// ```
    pub fn eval_power(base: &Value, exponent: &Value, line: usize) -> EvalResult<Value> {
        match NumericPair::promote(base, exponent) {
            Some(NumericPair::Integers(b, e)) if e < 0 => {
                Ok(Value::Float(i64_to_f64(b).powf(i64_to_f64(e))))
            },
            Some(NumericPair::Integers(b, e)) => match u32::try_from(e) {
                Ok(e) => b.checked_pow(e).map(Value::Integer).ok_or(RuntimeError::Overflow { line }),
                Err(_) => match b {
                    0 | 1 => Ok(Value::Integer(b)),
                    -1 => Ok(Value::Integer(if e % 2 == 0 { 1 } else { -1 })),
                    _ => Err(RuntimeError::Overflow { line }),
                },
            },
            Some(NumericPair::Floats(b, e)) => Ok(Value::Float(b.powf(e))),
            None => Err(type_mismatch(VariadicOperator::Power, base, exponent, line)),
        }
    }
}
