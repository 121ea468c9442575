//! # forest
//!
//! forest is a tree-walking interpreter for Forest, a small dynamically typed
//! scripting language. Forest has functions stored as ordinary values, scoped
//! variables, `if`/`elif`/`else` and `while`, multi-dimensional arrays, and
//! prefix operators that take any number of operands and chain with `$`:
//!
//! ```text
//! func sum3(a, b, c) { return + $ + (a, b, c); }
//! sum3(1, 2, 3) -> total;
//! print("total", total);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Program,
    error::{ParseError, RuntimeError},
    interpreter::{
        environment::Environment, evaluator::core::Evaluator, lexer::tokenize,
        parser::core::parse_program, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Defines `Identifier`, which doubles as the key type of every scope.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Each error carries the source line it refers to and renders
/// as a one-line message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, evaluation and value
/// representations to provide a complete runtime for Forest programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator,
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64`, `usize`, and `f64` where the interpreter needs to.
pub mod util;

/// The outcome of running a program.
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    /// Values produced by the top-level statements, in order.
    pub values:      Vec<Value>,
    /// Errors of statements that failed, in the order they occurred.
    pub diagnostics: Vec<RuntimeError>,
}

/// Tokenizes and parses Forest source text.
///
/// # Errors
/// Returns the first lexical or grammatical error found.
///
/// # Examples
/// ```
/// use forest::parse;
///
/// assert_eq!(parse("+(1, 2); print(3);").unwrap().statements.len(), 2);
/// assert!(parse("+(1, 2)").is_err()); // missing ';'
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Evaluates a parsed program in a fresh global scope.
///
/// `print` writes to `output`. Runtime errors never stop the program: the
/// failing statement yields nothing and its error is listed in
/// [`Execution::diagnostics`].
pub fn execute(program: &Program, output: &mut dyn Write) -> Execution {
    let mut evaluator = Evaluator::new(output);
    let mut global = Environment::new();

    let values = evaluator.eval_program(program, &mut global);

    Execution { values,
                diagnostics: evaluator.take_diagnostics() }
}

/// Parses and runs Forest source text.
///
/// This is [`parse`] followed by [`execute`].
///
/// # Errors
/// Returns an error if the source does not parse. Runtime errors are reported
/// in the returned [`Execution`] instead.
///
/// # Examples
/// ```
/// use forest::{interpreter::value::core::Value, run};
///
/// let mut output = Vec::new();
///
/// // Simple program: the value is returned and nothing goes wrong.
/// let execution = run("2 -> x; *(x, 21);", &mut output).unwrap();
/// assert_eq!(execution.values, vec![Value::Integer(42)]);
/// assert!(execution.diagnostics.is_empty());
///
/// // An unknown variable fails only its own statement.
/// let execution = run("+(y, 1); print(\"still running\");", &mut output).unwrap();
/// assert_eq!(execution.diagnostics.len(), 1);
/// assert_eq!(String::from_utf8(output).unwrap(), "still running\n");
/// ```
pub fn run(source: &str, output: &mut dyn Write) -> Result<Execution, ParseError> {
    let program = parse(source)?;
    Ok(execute(&program, output))
}
