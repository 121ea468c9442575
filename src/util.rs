/// Numeric conversion helpers.
///
/// This module provides the conversions the parser and evaluator share:
/// integer to float widening, operator annotations to operand counts, and
/// runtime integers to array indices and lengths.
///
/// Conversions that can fail return an `Option` so that each caller can raise
/// the error kind that fits its context.
pub mod num;
