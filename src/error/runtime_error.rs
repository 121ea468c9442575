#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the line of the node that triggered it. A runtime
/// error aborts only the statement it occurred in; the evaluator records it
/// and moves on to the next statement.
pub enum RuntimeError {
    /// Tried to read a variable that no enclosing scope binds.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that no enclosing scope binds.
    UndeclaredFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name whose bound value is not a function.
    NotAFunction {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to declare a function under a reserved name.
    ReservedName {
        /// The reserved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An assignment had a different number of values than targets.
    ArgumentCountMismatch {
        /// Number of targets.
        expected: usize,
        /// Number of values.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `return` was executed outside of any function body.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to values of unsupported kinds.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operator received a different number of operands than it needs.
    OperandCountMismatch {
        /// Number of operands the operator needs.
        expected: usize,
        /// Number of operands available.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivideByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assigned to an element of a name that is not bound.
    ArrayNotInstantiated {
        /// The name of the array.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Indexed into a value that is not an array.
    NotAnArray {
        /// Kind of the value that was indexed.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An index expression did not produce exactly one integer.
    IndexNotInteger {
        /// Description of what the index produced instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to access an array element outside the array.
    IndexOutOfBounds {
        /// Length of the indexed array level.
        length: usize,
        /// The index that was actually requested.
        index:  i64,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An array would have more slots than an array may hold.
    ArrayTooLarge {
        /// Largest number of slots an array may have.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The base of an array access did not produce exactly one value.
    NotASingleVariable {
        /// Number of values produced.
        found: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An expected value was missing (e.g. a guard that yields nothing).
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing program output failed.
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the line number the error was raised on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UndeclaredVariable { line, .. }
            | Self::UndeclaredFunction { line, .. }
            | Self::NotAFunction { line, .. }
            | Self::ReservedName { line, .. }
            | Self::ArityMismatch { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::ReturnOutsideFunction { line }
            | Self::TypeMismatch { line, .. }
            | Self::OperandCountMismatch { line, .. }
            | Self::DivideByZero { line }
            | Self::ArrayNotInstantiated { line, .. }
            | Self::NotAnArray { line, .. }
            | Self::IndexNotInteger { line, .. }
            | Self::IndexOutOfBounds { line, .. }
            | Self::ArrayTooLarge { line, .. }
            | Self::NotASingleVariable { line, .. }
            | Self::MissingValue { line }
            | Self::Overflow { line }
            | Self::Output { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is not declared.")
            },
            Self::UndeclaredFunction { name, line } => {
                write!(f, "Error on line {line}: Function '{name}' is not declared.")
            },
            Self::NotAFunction { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a function.")
            },
            Self::ReservedName { name, line } => write!(f,
                                                        "Error on line {line}: '{name}' is a reserved name and cannot be declared."),
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Function '{name}' expects {expected} argument(s), but found {found}."),
            Self::ArgumentCountMismatch { expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Assignment to {expected} target(s) received {found} value(s)."),
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: Return outside of a function.")
            },
            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },
            Self::OperandCountMismatch { expected,
                                         found,
                                         line, } => write!(f,
                                                           "Error on line {line}: Operator expects {expected} operand(s), but found {found}."),
            Self::DivideByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ArrayNotInstantiated { name, line } => write!(f,
                                                                "Error on line {line}: Array '{name}' has not been instantiated."),
            Self::NotAnArray { found, line } => {
                write!(f, "Error on line {line}: Cannot index into a value of kind {found}.")
            },
            Self::IndexNotInteger { found, line } => {
                write!(f, "Error on line {line}: Index must be a single integer, found {found}.")
            },
            Self::IndexOutOfBounds { length,
                                     index,
                                     line, } => write!(f,
                                                       "Error on line {line}: Index out of bounds. Length is {length}, but found {index} instead."),
            Self::ArrayTooLarge { limit, line } => write!(f,
                                                          "Error on line {line}: Array is too large. It may hold at most {limit} slots."),
            Self::NotASingleVariable { found, line } => write!(f,
                                                               "Error on line {line}: Indexed expression must produce one value, but produced {found}."),
            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
