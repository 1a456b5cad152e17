//! Character-class criteria - presence checks for uppercase, lowercase,
//! digit and special characters.

use secrecy::{ExposeSecret, SecretString};

/// The special characters that count toward the score. The set is closed:
/// anything outside it (underscore, hyphen, brackets, Unicode punctuation)
/// scores nothing.
const SPECIAL_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', ',', '.', '?', '"', ':', '{', '}', '|', '<',
    '>',
];

/// `1` if the password contains an uppercase letter A-Z, else `0`.
pub fn uppercase_score(password: &SecretString) -> u8 {
    score_if(password, |c| c.is_ascii_uppercase())
}

/// `1` if the password contains a lowercase letter a-z, else `0`.
pub fn lowercase_score(password: &SecretString) -> u8 {
    score_if(password, |c| c.is_ascii_lowercase())
}

/// `1` if the password contains a decimal digit, else `0`.
pub fn digits_score(password: &SecretString) -> u8 {
    score_if(password, |c| c.is_ascii_digit())
}

/// `1` if the password contains a character from the fixed special set, else `0`.
pub fn special_chars_score(password: &SecretString) -> u8 {
    score_if(password, |c| SPECIAL_CHARS.contains(&c))
}

fn score_if(password: &SecretString, pred: impl Fn(char) -> bool) -> u8 {
    if password.expose_secret().chars().any(pred) {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_uppercase_score_present() {
        assert_eq!(uppercase_score(&secret("aBc")), 1);
    }

    #[test]
    fn test_uppercase_score_absent() {
        assert_eq!(uppercase_score(&secret("abc123!")), 0);
    }

    #[test]
    fn test_uppercase_score_ascii_only() {
        // Non-ASCII uppercase letters do not count
        assert_eq!(uppercase_score(&secret("ÄÖÜ")), 0);
    }

    #[test]
    fn test_lowercase_score_present() {
        assert_eq!(lowercase_score(&secret("ABc")), 1);
    }

    #[test]
    fn test_lowercase_score_absent() {
        assert_eq!(lowercase_score(&secret("ABC123!")), 0);
    }

    #[test]
    fn test_digits_score_present() {
        assert_eq!(digits_score(&secret("abc1")), 1);
    }

    #[test]
    fn test_digits_score_absent() {
        assert_eq!(digits_score(&secret("abcdef!")), 0);
    }

    #[test]
    fn test_special_chars_score_present() {
        assert_eq!(special_chars_score(&secret("abc!def")), 1);
    }

    #[test]
    fn test_special_chars_score_absent() {
        assert_eq!(special_chars_score(&secret("abcdef123")), 0);
    }

    #[test]
    fn test_special_chars_set_is_closed() {
        // Underscore, hyphen and friends are outside the set
        assert_eq!(special_chars_score(&secret("abc_def")), 0);
        assert_eq!(special_chars_score(&secret("abc-def")), 0);
        assert_eq!(special_chars_score(&secret("abc+=~`[]def")), 0);
        // Unicode punctuation does not count either
        assert_eq!(special_chars_score(&secret("abc«»def")), 0);
    }

    #[test]
    fn test_special_chars_every_member_counts() {
        for &c in SPECIAL_CHARS {
            let pwd = secret(&format!("abc{c}"));
            assert_eq!(special_chars_score(&pwd), 1, "expected {c:?} to count");
        }
    }

    #[test]
    fn test_classes_are_independent() {
        let pwd = secret("aaaaaaaa");
        assert_eq!(lowercase_score(&pwd), 1);
        assert_eq!(uppercase_score(&pwd), 0);
        assert_eq!(digits_score(&pwd), 0);
        assert_eq!(special_chars_score(&pwd), 0);
    }
}
