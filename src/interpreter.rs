/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements, folds
/// variadic operator chains, manages scopes for blocks, loops and function
/// calls, and records runtime errors without stopping the program. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, producing zero or more values per node.
/// - Handles variables, arrays, functions and control flow.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The environment module models lexical scopes.
///
/// An environment is a table of bindings linked to the environment it was
/// opened in. Lookups walk outward; definitions stay local.
///
/// # Responsibilities
/// - Defines, looks up and resolves bindings by name.
/// - Reports undeclared variables with their source line.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Handles numeric, string and character literals, identifiers, and
///   operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the program. This enables
/// the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports operator chains, function declarations, assignments, and more.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value kinds used during interpretation:
/// integers, floats, strings, booleans, characters, shared arrays and
/// function bodies. It also provides the numeric promotion rules used by
/// arithmetic and comparison.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Renders values as program output.
/// - Provides implicit promotion between numeric kinds.
pub mod value;
