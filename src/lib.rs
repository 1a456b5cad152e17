//! Password strength meter library
//!
//! Scores a password against five independent criteria (a length band plus
//! four character-class presence checks) and maps the aggregate score to a
//! qualitative strength label with a display color.
//!
//! # Features
//!
//! - `async` (default): Channel-based evaluation with debounce and cancellation
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the interactive terminal prompt binary
//!
//! # Environment Variables
//!
//! - `PWD_METER_MIN_LENGTH`: Minimum acceptable password length (default: 8)
//! - `PWD_METER_MAX_LENGTH`: Maximum acceptable password length (default: 64)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password_strength, LengthBounds, StrengthLabel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Passw0rd!".to_string().into());
//! let report = evaluate_password_strength(&password, &LengthBounds::default());
//!
//! assert_eq!(report.complexity_score, 6);
//! assert_eq!(report.label, StrengthLabel::Moderate);
//! assert_eq!(report.color(), "yellow");
//! ```

// Internal modules
mod config;
mod criteria;
mod evaluator;
mod types;

// Public API
pub use config::{ConfigError, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, LengthBounds};
pub use evaluator::evaluate_password_strength;
pub use types::{IMPROVEMENT_TIPS, StrengthLabel, StrengthReport};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
