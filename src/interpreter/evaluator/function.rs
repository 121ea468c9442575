/// The built-in `print` function.
///
/// Writes its arguments, comma separated, as one line of program output.
pub mod print;

/// User-defined functions.
///
/// Declaration, lookup and invocation of functions bound in a scope.
pub mod core;
