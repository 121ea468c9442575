use crate::{
    ast::VariadicOperator,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::type_mismatch,
        },
        value::{core::Value, numeric::NumericPair},
    },
};

impl Evaluator<'_> {
    /// Evaluates `<`, `>`, `<=` or `>=` after numeric promotion.
    pub(in crate::interpreter::evaluator) fn eval_comparison(op: VariadicOperator,
                                                             left: &Value,
                                                             right: &Value,
                                                             line: usize)
                                                             -> EvalResult<Value> {
        let result = match NumericPair::promote(left, right) {
            Some(NumericPair::Integers(a, b)) => compare(op, a, b),
            Some(NumericPair::Floats(a, b)) => compare(op, a, b),
            None => return Err(type_mismatch(op, left, right, line)),
        };

        Ok(Value::Boolean(result))
    }

    /// Evaluates `==` or `!=`.
    ///
    /// Two strings compare by content. Otherwise both operands must be
    /// numeric and are compared after promotion, so `==(1, true)` and
    /// `==('a', 97)` both hold.
    ///
    /// # Example
    /// ```
    /// use forest::{
    ///     ast::VariadicOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let eq = Evaluator::eval_equality(VariadicOperator::Equal,
    ///                                   &Value::Integer(1),
    ///                                   &Value::Float(1.0),
    ///                                   1);
    /// assert_eq!(eq.unwrap(), Value::Boolean(true));
    ///
    /// let mixed = Evaluator::eval_equality(VariadicOperator::Equal,
    ///                                      &Value::from("1"),
    ///                                      &Value::Integer(1),
    ///                                      1);
    /// assert!(mixed.is_err());
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_equality(op: VariadicOperator,
                         left: &Value,
                         right: &Value,
                         line: usize)
                         -> EvalResult<Value> {
        let equal = match (left, right) {
            (Value::String(a), Value::String(b)) => a == b,
            _ => match NumericPair::promote(left, right) {
                Some(NumericPair::Integers(a, b)) => a == b,
                Some(NumericPair::Floats(a, b)) => a == b,
                None => return Err(type_mismatch(op, left, right, line)),
            },
        };

        Ok(Value::Boolean(if op == VariadicOperator::NotEqual { !equal } else { equal }))
    }
}

fn compare<T: PartialOrd>(op: VariadicOperator, a: T, b: T) -> bool {
    match op {
        VariadicOperator::Less => a < b,
        VariadicOperator::Greater => a > b,
        VariadicOperator::LessEqual => a <= b,
        _ => a >= b,
    }
}
