/// Binary operator dispatch.
pub mod core;

/// `+`, `-`, `*` and `/`, including string concatenation and exact integer
/// division.
pub mod arithmetic;

/// `**`.
pub mod power;

/// Ordering comparisons and (in)equality.
pub mod comparison;

/// `&&` and `||`.
pub mod logic;
