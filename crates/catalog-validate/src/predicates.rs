//! Single-value format rules.
//!
//! Every predicate is a pure `fn(&str) -> bool`. The [`Predicate`] enum names
//! them so rule sets can be declared as data and diagnostics can say which
//! rule rejected a value.

/// Spreadsheet line-break artifact that must not leak into published text.
pub const LINE_BREAK_ARTIFACT: &str = "_x000a_";

pub const ACCESS_RULE_TOKENS: [&str; 3] = ["mandatory", "optional", "-"];
pub const ANNOUNCEMENT_TOKENS: [&str; 2] = ["mandatory", "-"];

/// `0x` followed by exactly two hex digits, e.g. `0x80`.
pub fn is_hex_byte_token(s: &str) -> bool {
    let Some(digits) = s.strip_prefix("0x") else {
        return false;
    };
    digits.len() == 2 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Units are accepted unconditionally for now.
pub fn is_unit_token(_s: &str) -> bool {
    true
}

/// Accepts `8`, `<= 100` and `or 1 2` (two or more sizes after `or`).
pub fn is_data_size_expression(s: &str) -> bool {
    if is_decimal(s) {
        return true;
    }
    let tokens: Vec<&str> = s.split(' ').collect();
    match tokens.as_slice() {
        ["<=", size] => is_decimal(size),
        ["or", sizes @ ..] => sizes.len() >= 2 && sizes.iter().all(|size| is_decimal(size)),
        _ => false,
    }
}

pub fn is_access_rule_token(s: &str) -> bool {
    ACCESS_RULE_TOKENS.contains(&s)
}

pub fn is_announcement_token(s: &str) -> bool {
    ANNOUNCEMENT_TOKENS.contains(&s)
}

pub fn is_clean_text(s: &str) -> bool {
    !s.contains(LINE_BREAK_ARTIFACT)
}

pub fn is_ascii_only(s: &str) -> bool {
    s.is_ascii()
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Named format rule attached to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    HexByte,
    Unit,
    DataSize,
    AccessRule,
    Announcement,
    CleanText,
    AsciiOnly,
    /// Column reserved for future rules.
    Unchecked,
}

impl Predicate {
    pub fn check(&self, value: &str) -> bool {
        match self {
            Self::HexByte => is_hex_byte_token(value),
            Self::Unit => is_unit_token(value),
            Self::DataSize => is_data_size_expression(value),
            Self::AccessRule => is_access_rule_token(value),
            Self::Announcement => is_announcement_token(value),
            Self::CleanText => is_clean_text(value),
            Self::AsciiOnly => is_ascii_only(value),
            Self::Unchecked => true,
        }
    }

    /// True for rules that can never reject a value, present or not.
    pub fn is_accepting(&self) -> bool {
        matches!(self, Self::Unit | Self::Unchecked)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HexByte => "hex byte token",
            Self::Unit => "unit token",
            Self::DataSize => "data size expression",
            Self::AccessRule => "access rule token",
            Self::Announcement => "announcement token",
            Self::CleanText => "clean text",
            Self::AsciiOnly => "ASCII only",
            Self::Unchecked => "unchecked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_byte_token() {
        assert!(is_hex_byte_token("0x1A"));
        assert!(is_hex_byte_token("0xff"));
        assert!(!is_hex_byte_token("0x1G"));
        assert!(!is_hex_byte_token("1x1A"));
        assert!(!is_hex_byte_token("0X1A"));
        assert!(!is_hex_byte_token("0x1"));
        assert!(!is_hex_byte_token("0x1AB"));
        assert!(!is_hex_byte_token(""));
    }

    #[test]
    fn hex_byte_token_rejects_multibyte_digits() {
        // four characters, but the "digits" are not ASCII
        assert!(!is_hex_byte_token("0x１２"));
    }

    #[test]
    fn data_size_expression() {
        assert!(is_data_size_expression("8"));
        assert!(is_data_size_expression("<= 100"));
        assert!(is_data_size_expression("or 1 2"));
        assert!(is_data_size_expression("or 1 2 4"));
        assert!(!is_data_size_expression("or 1"));
        assert!(!is_data_size_expression("<="));
        assert!(!is_data_size_expression("<= 1 2"));
        assert!(!is_data_size_expression("<=  100"));
        assert!(!is_data_size_expression(""));
        assert!(!is_data_size_expression("-1"));
        assert!(!is_data_size_expression("max 4"));
        assert!(!is_data_size_expression("or 1 x"));
    }

    #[test]
    fn data_size_rejects_non_ascii_digits() {
        assert!(!is_data_size_expression("\u{0968}"));
        assert!(!is_data_size_expression("８"));
        assert!(!is_data_size_expression("<= \u{0663}\u{0660}"));
        assert!(!is_data_size_expression("or 1 \u{0967}"));
    }

    #[test]
    fn access_and_announcement_tokens() {
        for token in ["mandatory", "optional", "-"] {
            assert!(is_access_rule_token(token));
        }
        assert!(!is_access_rule_token("Mandatory"));
        assert!(!is_access_rule_token(""));
        assert!(is_announcement_token("mandatory"));
        assert!(is_announcement_token("-"));
        assert!(!is_announcement_token("optional"));
    }

    #[test]
    fn text_rules() {
        assert!(!is_clean_text("a_x000a_b"));
        assert!(is_clean_text("ab"));
        assert!(is_ascii_only("Operation status"));
        assert!(!is_ascii_only("動作状態"));
        assert!(is_ascii_only(""));
    }

    #[test]
    fn accepting_predicates_never_fail() {
        for value in ["", "kWh", "動作状態", "_x000a_"] {
            assert!(Predicate::Unit.check(value));
            assert!(Predicate::Unchecked.check(value));
        }
        assert!(Predicate::Unit.is_accepting());
        assert!(!Predicate::HexByte.is_accepting());
    }
}
