//! Length criterion - scores the password's length band.

use secrecy::{ExposeSecret, SecretString};

use crate::config::LengthBounds;

/// Scores the password length against the configured band.
///
/// Length is counted in characters, not bytes. Too-long input still scores
/// above too-short input; the band is not monotonic in length.
///
/// # Returns
/// - `0` if shorter than the minimum
/// - `1` if longer than the maximum
/// - `2` if within the inclusive band
pub fn length_score(password: &SecretString, bounds: &LengthBounds) -> u8 {
    let len = password.expose_secret().chars().count();
    if len < bounds.min() {
        0
    } else if len > bounds.max() {
        1
    } else {
        2
    }
}
