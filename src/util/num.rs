/// Converts an `i64` to `f64` for mixed integer/float arithmetic.
///
/// Integers beyond `2^53` lose precision, the same way an implicit widening
/// in a C-like language does.
///
/// ## Example
/// ```
/// use forest::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-3), -3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Turns an operator annotation into the number of operands consumed.
///
/// An annotation `N` applies the operator `N` times and therefore consumes
/// `N + 1` operands.
///
/// ## Parameters
/// - `count`: The annotation as written in source.
///
/// ## Returns
/// - `Some(usize)`: The operand count.
/// - `None`: If the annotation is negative or too large.
///
/// ## Example
/// ```
/// use forest::util::num::annotation_to_arity;
///
/// assert_eq!(annotation_to_arity(2), Some(3));
/// assert_eq!(annotation_to_arity(-1), None);
/// ```
#[must_use]
pub fn annotation_to_arity(count: i64) -> Option<usize> {
    usize::try_from(count).ok()?.checked_add(1)
}

/// Checks an index against the length of one array level.
///
/// ## Parameters
/// - `index`: The index produced at runtime, possibly negative.
/// - `length`: The number of elements in the indexed level.
///
/// ## Returns
/// - `Some(usize)`: The index, when `0 <= index < length`.
/// - `None`: Otherwise.
///
/// ## Example
/// ```
/// use forest::util::num::checked_index;
///
/// assert_eq!(checked_index(2, 3), Some(2));
/// assert_eq!(checked_index(3, 3), None);
/// assert_eq!(checked_index(-1, 3), None);
/// ```
#[must_use]
pub fn checked_index(index: i64, length: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < length)
}

/// Converts an array dimension to a length.
///
/// ## Returns
/// `None` if the dimension is negative or does not fit in memory indexing.
#[must_use]
pub fn dimension_to_length(dimension: i64) -> Option<usize> {
    usize::try_from(dimension).ok()
}
