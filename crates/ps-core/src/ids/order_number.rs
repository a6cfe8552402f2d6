use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Human-facing order identifier: a short letter prefix followed by six digits,
/// e.g. `PS483920`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderNumber(String);

impl OrderNumber {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate order number format (`<prefix><6 digits>`).
    pub fn is_valid_for_prefix(&self, prefix: &str) -> bool {
        match self.0.strip_prefix(prefix) {
            Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_digit()),
            None => false,
        }
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_order_number_is_valid() {
        let id = OrderNumber::new("PS483920".to_string());
        assert!(id.is_valid_for_prefix("PS"));
    }

    #[test]
    fn wrong_prefix_or_short_suffix_is_invalid() {
        assert!(!OrderNumber::new("XX483920".to_string()).is_valid_for_prefix("PS"));
        assert!(!OrderNumber::new("PS4839".to_string()).is_valid_for_prefix("PS"));
        assert!(!OrderNumber::new("PS4839AB".to_string()).is_valid_for_prefix("PS"));
    }
}
