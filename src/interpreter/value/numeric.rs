use crate::{interpreter::value::core::Value, util::num::i64_to_f64};

/// Two operands after implicit numeric promotion.
///
/// Integers, booleans (`true` = 1, `false` = 0) and characters (their code
/// point) promote to integers. If either side is a float, both sides widen to
/// floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericPair {
    /// Both operands are integral.
    Integers(i64, i64),
    /// At least one operand was a float.
    Floats(f64, f64),
}

/// A single numeric operand, before pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An integral value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
}

impl Number {
    /// Reads `value` as a number, if its kind takes part in arithmetic.
    ///
    /// # Example
    /// ```
    /// use forest::interpreter::value::{core::Value, numeric::Number};
    ///
    /// assert_eq!(Number::from_value(&Value::Character('a')), Some(Number::Integer(97)));
    /// assert_eq!(Number::from_value(&Value::Boolean(true)), Some(Number::Integer(1)));
    /// assert_eq!(Number::from_value(&Value::from("1")), None);
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(Self::Integer(*n)),
            Value::Float(x) => Some(Self::Float(*x)),
            Value::Boolean(b) => Some(Self::Integer(i64::from(*b))),
            Value::Character(c) => Some(Self::Integer(i64::from(u32::from(*c)))),
            _ => None,
        }
    }

    /// Whether the number is zero, in either representation.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Float(x) => x == 0.0,
        }
    }

    /// The number as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Float(x) => x,
        }
    }
}

impl NumericPair {
    /// Promotes two values to a common numeric kind.
    ///
    /// # Returns
    /// `None` when either value is not numeric (strings, arrays, functions).
    ///
    /// # Example
    /// ```
    /// use forest::interpreter::value::{core::Value, numeric::NumericPair};
    ///
    /// let pair = NumericPair::promote(&Value::Integer(1), &Value::Float(2.0));
    /// assert_eq!(pair, Some(NumericPair::Floats(1.0, 2.0)));
    /// ```
    #[must_use]
    pub fn promote(left: &Value, right: &Value) -> Option<Self> {
        let pair = match (Number::from_value(left)?, Number::from_value(right)?) {
            (Number::Integer(a), Number::Integer(b)) => Self::Integers(a, b),
            (a, b) => Self::Floats(a.as_f64(), b.as_f64()),
        };
        Some(pair)
    }
}
