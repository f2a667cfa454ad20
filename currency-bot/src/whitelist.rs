//! The fixed set of currency codes the bot accepts.

use std::fmt;

/// Ordered set of upper-case currency codes, read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CurrencyWhitelist {
    codes: Vec<String>,
}

impl CurrencyWhitelist {
    /// Builds from codes in order. Codes are trimmed and upper-cased; empty entries are dropped and
    /// a repeated code keeps its first position.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for code in codes {
            let code = code.as_ref().trim().to_uppercase();
            if !code.is_empty() && !unique.contains(&code) {
                unique.push(code);
            }
        }
        Self { codes: unique }
    }

    /// Parses a whitespace-separated list such as `"USD EUR RUB"`.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split_whitespace())
    }

    /// Case-insensitive membership.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c.eq_ignore_ascii_case(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes that are not three ASCII letters.
    pub fn malformed_codes(&self) -> Vec<&str> {
        self.iter()
            .filter(|c| c.len() != 3 || !c.chars().all(|ch| ch.is_ascii_alphabetic()))
            .collect()
    }
}

/// Comma-separated, in configured order.
impl fmt::Display for CurrencyWhitelist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.codes.join(", "))
    }
}
