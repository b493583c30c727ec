//! Advisory password strength meter.
//!
//! The score never gates submission; only the password rule in
//! [`evaluator`](super::evaluator) does.

use serde::Serialize;

use super::rules::PASSWORD_SYMBOLS;

/// Strength bucket shown next to the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub level: StrengthLevel,
    /// 0..=6, one point per satisfied criterion.
    pub score: u8,
}

pub(crate) fn has_symbol(password: &str) -> bool {
    password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Score a password: one point each for length ≥ 8, length ≥ 12, an
/// uppercase letter, a lowercase letter, a digit, and a symbol.
pub fn password_strength(password: &str) -> PasswordStrength {
    let len = password.chars().count();
    let criteria = [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        has_symbol(password),
    ];
    let score = criteria.iter().filter(|met| **met).count() as u8;

    let level = if score >= 6 {
        StrengthLevel::Strong
    } else if score >= 4 {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Weak
    };

    PasswordStrength { level, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero() {
        let s = password_strength("");
        assert_eq!(s.score, 0);
        assert_eq!(s.level, StrengthLevel::Weak);
    }

    #[test]
    fn short_lowercase_is_weak() {
        let s = password_strength("weak");
        assert!(s.score <= 3);
        assert_eq!(s.level, StrengthLevel::Weak);
    }

    #[test]
    fn long_password_with_all_classes_is_strong() {
        let s = password_strength("StrongerPass123!");
        assert_eq!(s.score, 6);
        assert_eq!(s.level, StrengthLevel::Strong);
    }

    #[test]
    fn eight_chars_with_all_classes_is_only_medium() {
        // Passes the submission rule but misses the length-12 point.
        let s = password_strength("Abcdef1!");
        assert_eq!(s.score, 5);
        assert_eq!(s.level, StrengthLevel::Medium);
    }

    #[test]
    fn medium_threshold_is_four() {
        assert_eq!(password_strength("abcdefgh1").score, 3);
        assert_eq!(password_strength("abcdefgh1").level, StrengthLevel::Weak);
        assert_eq!(password_strength("Abcdefgh1").level, StrengthLevel::Medium);
    }
}
