//! Account model and related types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::money::Money;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Minimum accepted length for an account owner name
pub const MIN_OWNER_NAME_LEN: usize = 2;

/// Account tier, a closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum AccountTier {
    Black,
    Gold,
    Platinum,
}

impl fmt::Display for AccountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountTier::Black => write!(f, "BLACK"),
            AccountTier::Gold => write!(f, "GOLD"),
            AccountTier::Platinum => write!(f, "PLATINUM"),
        }
    }
}

impl FromStr for AccountTier {
    type Err = Error;

    /// Membership check against the enumerated set
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BLACK" => Ok(AccountTier::Black),
            "GOLD" => Ok(AccountTier::Gold),
            "PLATINUM" => Ok(AccountTier::Platinum),
            other => Err(Error::InvalidArgument(format!(
                "'type' must be one of BLACK, GOLD or PLATINUM, got '{}'",
                other
            ))),
        }
    }
}

/// Account model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Account {
    /// Unique account ID, must begin with the letter 'a'
    pub id: String,
    /// Owner name, at least two characters
    #[serde(rename = "ownerName")]
    pub owner_name: String,
    /// Current balance, never negative
    pub balance: Money,
    /// Account tier
    #[serde(rename = "type")]
    pub tier: AccountTier,
}

impl Account {
    /// Create a new account
    pub fn new(
        id: impl Into<String>,
        owner_name: impl Into<String>,
        balance: Money,
        tier: AccountTier,
    ) -> Self {
        Self {
            id: id.into(),
            owner_name: owner_name.into(),
            balance,
            tier,
        }
    }

    /// Check the account id convention: non-empty, begins with 'a'
    pub fn is_valid_id(id: &str) -> bool {
        id.starts_with('a')
    }
}
