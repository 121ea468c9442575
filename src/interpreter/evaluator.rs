/// Binary operator evaluation logic.
///
/// Combines two operands of a variadic fold: arithmetic with implicit numeric
/// promotion, string concatenation, comparisons, equality and boolean logic.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT, the identity operator, and arithmetic negation
/// (the single-operand form of `-`).
pub mod unary;

/// Core evaluation logic and session state.
///
/// Contains the `Evaluator`, the `Flow` signal that carries `return` values,
/// statement and expression dispatch, and diagnostics collection.
pub mod core;

/// Variadic operator chains.
///
/// Folds an operand list through a chain of operators, honoring explicit
/// arities and feeding each intermediate result into the next operator.
pub mod variadic;

/// `if`/`elif`/`else` and `while` evaluation.
///
/// Evaluates guards, opens branch and loop scopes, and propagates `return`.
pub mod control_flow;

/// Assignment to variables and array elements.
pub mod assign;

/// Array creation and element access.
pub mod array;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles function declaration, user-defined function calls, argument
/// checking, and the built-in `print`.
pub mod function;
