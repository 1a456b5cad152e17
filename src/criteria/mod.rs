//! Scoring criteria
//!
//! Each criterion inspects one aspect of the password and yields a small
//! ordinal sub-score. Criteria are independent; the evaluator sums them.

mod classes;
mod length;

pub use classes::{digits_score, lowercase_score, special_chars_score, uppercase_score};
pub use length::length_score;
