/// Numeric promotion.
///
/// Defines how integers, floats, booleans and characters are read as numbers
/// and widened to a common kind before arithmetic or comparison.
pub mod numeric;

pub mod core;
