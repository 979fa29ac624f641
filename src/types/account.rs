//! Account types.
//!
//! Provides the account selector for the `/accounts/{type}` endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account selected by the `/accounts/{type}` path parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// The primary account. Requested when no type is supplied.
    #[default]
    Primary,
    /// The auto-invest account.
    AutoInvest,
}

impl AccountType {
    /// Returns the path segment for this account type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::AutoInvest => "auto_invest",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_default_is_primary() {
        assert_eq!(AccountType::default(), AccountType::Primary);
    }

    #[test]
    fn test_account_type_path_segments() {
        assert_eq!(AccountType::Primary.as_str(), "primary");
        assert_eq!(AccountType::AutoInvest.as_str(), "auto_invest");
    }

    #[test]
    fn test_account_type_serde() {
        assert_eq!(
            serde_json::to_string(&AccountType::AutoInvest).expect("json"),
            r#""auto_invest""#
        );
        let parsed: AccountType = serde_json::from_str(r#""primary""#).expect("json");
        assert_eq!(parsed, AccountType::Primary);
    }

    #[test]
    fn test_account_type_display() {
        assert_eq!(AccountType::AutoInvest.to_string(), "auto_invest");
    }
}
