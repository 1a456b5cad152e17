//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::LengthBounds;
use crate::criteria::{
    digits_score, length_score, lowercase_score, special_chars_score, uppercase_score,
};
use crate::types::{StrengthLabel, StrengthReport};

/// Evaluates password strength and returns a per-criterion report.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `bounds` - Acceptable length band; `LengthBounds::default()` gives 8 to 64
///
/// # Returns
/// A `StrengthReport` with the five sub-scores, their sum, and the strength
/// label. Empty input yields the `NoPassword` sentinel. Never fails, whatever
/// the input.
pub fn evaluate_password_strength(
    password: &SecretString,
    bounds: &LengthBounds,
) -> StrengthReport {
    if password.expose_secret().is_empty() {
        return StrengthReport::no_password();
    }

    let length = length_score(password, bounds);
    let uppercase = uppercase_score(password);
    let lowercase = lowercase_score(password);
    let digits = digits_score(password);
    let special_chars = special_chars_score(password);

    let complexity_score = length + uppercase + lowercase + digits + special_chars;

    StrengthReport {
        length,
        uppercase,
        lowercase,
        digits,
        special_chars,
        complexity_score,
        label: StrengthLabel::from_score(complexity_score),
    }
}

/// Async version that sends the evaluation report via channel.
///
/// Debounces for 300ms so callers can re-issue on every keystroke; cancelling
/// the token during the debounce suppresses the send.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    bounds: LengthBounds,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled during debounce");
        return;
    }

    let report = evaluate_password_strength(password, &bounds);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
