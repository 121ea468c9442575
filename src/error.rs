/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: stray characters, unterminated strings, oversized literals and
/// grammar violations. A parse error stops the run before evaluation starts.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undeclared names, type mismatches, division by zero or out-of-bounds array
/// accesses. A runtime error aborts only the statement that raised it.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
