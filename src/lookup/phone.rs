// src/lookup/phone.rs
use crate::lookup::LookupError;
use std::fmt;

/// A Vietnamese mobile number: `0` or `+84`, then one of 3/5/7/8/9, then
/// eight more digits. Stored exactly as entered (after trimming).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(input: &str) -> Result<Self, LookupError> {
        let trimmed = input.trim();

        let rest = if let Some(r) = trimmed.strip_prefix("+84") {
            r
        } else if let Some(r) = trimmed.strip_prefix('0') {
            r
        } else {
            return Err(LookupError::InvalidPhone(trimmed.to_string()));
        };

        let mut digits = rest.chars();
        let carrier_ok = matches!(digits.next(), Some('3' | '5' | '7' | '8' | '9'));
        let tail: Vec<char> = digits.collect();

        if !carrier_ok || tail.len() != 8 || !tail.iter().all(|c| c.is_ascii_digit()) {
            return Err(LookupError::InvalidPhone(trimmed.to_string()));
        }

        Ok(PhoneNumber(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// For logs: keeps the last three digits only.
    pub fn masked(&self) -> String {
        let n = self.0.chars().count();
        let tail: String = self.0.chars().skip(n.saturating_sub(3)).collect();
        format!("***{tail}")
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
