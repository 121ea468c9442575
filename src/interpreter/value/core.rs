use std::{cell::RefCell, rc::Rc};

use crate::ast::{LiteralValue, Statement};

/// Shared, mutable storage of one array level.
///
/// Every binding holding the same array sees element assignments made
/// through any other binding.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible kinds that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Clone)]
pub enum Value {
    /// A 64 bit integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Float(f64),
    /// A string value.
    String(String),
    /// A boolean value (`true` or `false`). Counts as `1` or `0` in
    /// arithmetic.
    Boolean(bool),
    /// A single character. Counts as its code point in arithmetic.
    Character(char),
    /// One level of a possibly nested array. Inner levels are arrays
    /// themselves.
    Array(ArrayRef),
    /// A function body, bound under the function's name. The parameter list
    /// lives on the binding's key, not here.
    Function(Rc<[Statement]>),
}

impl Value {
    /// Wraps `elements` into a new, unshared array.
    #[must_use]
    pub fn new_array(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(elements)))
    }

    /// A short, human readable name of this value's kind, used in error
    /// messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Character(_) => "character",
            Self::Array(_) => "array",
            Self::Function(_) => "function",
        }
    }

    /// Whether the value can be rendered as text by `print` and string
    /// concatenation.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::Array(_) | Self::Function(_))
    }
}

/// Identity of one array level, used to detect arrays that contain
/// themselves.
type ArrayId = *const RefCell<Vec<Value>>;

/// Values compare structurally, except functions, which are equal only when
/// they share the same body.
///
/// An array may hold itself, directly or through inner levels. A pair of
/// arrays met again while it is still being compared counts as equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        values_equal(self, other, &mut Vec::new())
    }
}

#[allow(clippy::float_cmp)]
fn values_equal(left: &Value, right: &Value, comparing: &mut Vec<(ArrayId, ArrayId)>) -> bool {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Character(a), Value::Character(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            let pair = (Rc::as_ptr(a), Rc::as_ptr(b));
            if Rc::ptr_eq(a, b) || comparing.contains(&pair) {
                return true;
            }

            let (a, b) = (a.borrow(), b.borrow());
            if a.len() != b.len() {
                return false;
            }

            comparing.push(pair);
            let equal = a.iter().zip(b.iter()).all(|(x, y)| values_equal(x, y, comparing));
            comparing.pop();
            equal
        },
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

/// Formats a float so that whole numbers keep one fractional digit (`3.0`).
pub(crate) fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Arrays render as `[a, b, c]`. An array met again inside itself renders
/// as `[...]`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_value(self, f, &mut Vec::new())
    }
}

impl std::fmt::Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Self::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Self::Character(c) => f.debug_tuple("Character").field(c).finish(),
            Self::Array(_) => f.debug_tuple("Array").field(&format_args!("{self}")).finish(),
            Self::Function(body) => f.debug_tuple("Function").field(body).finish(),
        }
    }
}

fn write_value(value: &Value,
               f: &mut std::fmt::Formatter<'_>,
               enclosing: &mut Vec<ArrayId>)
               -> std::fmt::Result {
    match value {
        Value::Integer(n) => write!(f, "{n}"),
        Value::Float(x) => write!(f, "{}", format_float(*x)),
        Value::String(s) => write!(f, "{s}"),
        Value::Boolean(b) => write!(f, "{b}"),
        Value::Character(c) => write!(f, "{c}"),
        Value::Array(elements) => {
            let id = Rc::as_ptr(elements);
            if enclosing.contains(&id) {
                return write!(f, "[...]");
            }

            enclosing.push(id);
            write!(f, "[")?;
            for (i, element) in elements.borrow().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write_value(element, f, enclosing)?;
            }
            enclosing.pop();
            write!(f, "]")
        },
        Value::Function(_) => write!(f, "<function>"),
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::String(s) => Self::String(s.clone()),
            LiteralValue::Boolean(b) => Self::Boolean(*b),
            LiteralValue::Character(c) => Self::Character(*c),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Self::Character(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::new_array(v)
    }
}
