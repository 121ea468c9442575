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
    /// Combines two operands under a variadic operator.
    ///
    /// This is one step of a variadic fold. Arithmetic, comparison and
    /// equality operators apply implicit numeric promotion: booleans count as
    /// `0`/`1`, characters as their code point, and a float on either side
    /// widens the other side to a float. `+` concatenates when either side is
    /// a string. `&&` and `||` accept booleans only.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Running value of the fold.
    /// - `right`: Next operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The combined value.
    ///
    /// # Errors
    /// - `TypeMismatch` for any operator and operand kinds without a rule.
    /// - `DivideByZero` when dividing by a numeric zero.
    /// - `Overflow` when integer arithmetic overflows.
    ///
    /// # Example
    /// ```
    /// use forest::{
    ///     ast::VariadicOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_binary(VariadicOperator::Plus, &Value::from('a'), &Value::from(1), 1);
    /// assert_eq!(sum.unwrap(), Value::Integer(98));
    ///
    /// let text = Evaluator::eval_binary(VariadicOperator::Plus, &Value::from("n="), &Value::from(2), 1);
    /// assert_eq!(text.unwrap(), Value::from("n=2"));
    /// ```
    pub fn eval_binary(op: VariadicOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use VariadicOperator::{
            And, ArrayCreate, Divide, Equal, Greater, GreaterEqual, Less, LessEqual, Minus,
            NotEqual, Or, Plus, Power, Times,
        };

        match op {
            Plus | Minus | Times | Divide => Self::eval_arithmetic(op, left, right, line),
            Power => Self::eval_power(left, right, line),
            Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            Equal | NotEqual => Self::eval_equality(op, left, right, line),
            And | Or => Self::eval_logic(op, left, right, line),
            ArrayCreate => Err(type_mismatch(op, left, right, line)),
        }
    }
}
