//! Password strength scoring.
//!
//! The score is additive over five independent factors and capped at 100:
//!
//! | factor                         | points |
//! |--------------------------------|--------|
//! | at least 8 characters          | 25     |
//! | at least 12 characters         | 25     |
//! | both lower- and upper-case     | 25     |
//! | an ASCII digit                 | 15     |
//! | a symbol from [`SYMBOLS`]      | 10     |

/// Punctuation that counts towards the symbol factor.
pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Score a password in `0..=100`.
pub fn score(password: &str) -> u8 {
    let len = password.chars().count();
    let mut strength: u32 = 0;
    if len >= 8 {
        strength += 25;
    }
    if len >= 12 {
        strength += 25;
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        strength += 25;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        strength += 15;
    }
    if password.chars().any(|c| SYMBOLS.contains(c)) {
        strength += 10;
    }
    strength.min(100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Strength::Weak,
            40..=69 => Strength::Medium,
            _ => Strength::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scores() {
        assert_eq!(score(""), 0);
        assert_eq!(score("abcdefgh"), 25);
        assert_eq!(score("Abcdefgh1!"), 75);
        assert_eq!(score("Abcdefghijk1!"), 100);
        assert_eq!(score("1"), 15);
        assert_eq!(score("aB"), 25);
    }

    #[test]
    fn test_score_is_capped_and_bounded() {
        for pw in ["", "a", "aaaaaaaaaaaaaaaaaaaaaaaa", "Aa1!Aa1!Aa1!Aa1!", "<>{}|\":?"] {
            let s = score(pw);
            assert!(s <= 100, "{pw} scored {s}");
        }
    }

    #[test]
    fn test_each_factor_is_monotonic() {
        let base = "abcdefg";
        let steps = [
            "abcdefgh",       // length 8
            "abcdefghijkl",   // length 12
            "Abcdefghijkl",   // mixed case
            "Abcdefghijk1",   // digit
            "Abcdefghij1!",   // symbol
        ];
        let mut prev = score(base);
        for pw in steps {
            let s = score(pw);
            assert!(s >= prev, "{pw}: {s} < {prev}");
            prev = s;
        }
        assert_eq!(prev, 100);
    }

    #[test]
    fn test_buckets() {
        assert_eq!(Strength::from_score(0), Strength::Weak);
        assert_eq!(Strength::from_score(39), Strength::Weak);
        assert_eq!(Strength::from_score(40), Strength::Medium);
        assert_eq!(Strength::from_score(69), Strength::Medium);
        assert_eq!(Strength::from_score(70), Strength::Strong);
        assert_eq!(Strength::from_score(score("Abcdefgh1!")).label(), "Strong");
    }
}
