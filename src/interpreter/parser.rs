/// Parser entry points.
///
/// Defines the `ParseResult` alias and the program, expression and expression
/// list parsers every other parser module descends into.
pub mod core;

/// Unary expressions and primaries.
///
/// Handles `!(...)` and `=(...)`, literals, variable chains, function calls
/// and array indexing.
pub mod unary;

/// Variadic operator chains.
///
/// Parses `op N $ op N ... (operands)` into a single `Expr::Variadic` node.
pub mod variadic;

/// Blocks and control flow.
///
/// Parses brace-delimited statement lists, `while` loops and
/// `if`/`elif`/`else` chains.
pub mod block;

/// Utility functions for the parser.
///
/// Token expectations, identifier parsing and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Implements `return`, function declarations, expression statements and
/// assignments.
pub mod statement;
