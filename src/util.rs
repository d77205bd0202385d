/// Number rendering helpers.
///
/// This module turns evaluation results into the text shown to users, with a
/// fractional part on every finite value and spelled-out names for infinities
/// and NaN.
pub mod num;
