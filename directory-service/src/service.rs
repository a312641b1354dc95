//! Directory service implementation

use std::sync::Arc;

use common::error::{Error, Result};
use common::model::account::{Account, AccountTier, MIN_OWNER_NAME_LEN};
use common::money::Money;
use tracing::{debug, info};

use crate::repository::{AccountDirectory, InMemoryAccountDirectory};

/// Partial update for an account
///
/// Each field is `Some` only when the client supplied it, so a supplied zero
/// balance or empty owner name is distinguishable from an omitted field. The
/// tier arrives as the raw string and is validated against the enumeration.
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    /// New account ID
    pub id: Option<String>,
    /// New owner name
    pub owner_name: Option<String>,
    /// New balance
    pub balance: Option<Money>,
    /// New tier, unparsed
    pub tier: Option<String>,
}

/// Directory service exposing the account CRUD operations
pub struct DirectoryService {
    /// Repository holding the account collection
    directory: Arc<dyn AccountDirectory>,
}

impl DirectoryService {
    /// Create a new directory service over an empty in-memory directory
    pub fn new() -> Self {
        Self {
            directory: Arc::new(InMemoryAccountDirectory::new()),
        }
    }

    /// Create a new directory service seeded with the given accounts
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            directory: Arc::new(InMemoryAccountDirectory::with_accounts(accounts)),
        }
    }

    /// Create a new directory service over a specific directory
    pub fn with_directory(directory: Arc<dyn AccountDirectory>) -> Self {
        Self { directory }
    }

    /// Get all accounts, in directory order
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.directory.list().await
    }

    /// Get an account by ID
    pub async fn get_account(&self, id: &str) -> Result<Account> {
        self.directory
            .get(id)
            .await?
            .ok_or_else(|| Error::AccountNotFound(format!("no account with id '{}', check the 'id'", id)))
    }

    /// Delete an account by ID
    ///
    /// The id must follow the directory convention; deleting an absent id is
    /// an error, matching the lookup behavior.
    pub async fn delete_account(&self, id: &str) -> Result<()> {
        if !Account::is_valid_id(id) {
            return Err(Error::InvalidArgument(
                "'id' is invalid, it must start with the letter 'a'".to_string(),
            ));
        }

        let removed = self.directory.remove(id).await?;
        if !removed {
            return Err(Error::AccountNotFound(format!(
                "no account with id '{}', check the 'id'",
                id
            )));
        }

        info!("Deleted account {}", id);
        Ok(())
    }

    /// Update an account by ID
    ///
    /// Supplied fields are validated before the lookup, so an invalid field is
    /// reported even when the id has no match. Every supplied, valid field
    /// overwrites the account's field; omitted fields are left unchanged.
    pub async fn update_account(&self, id: &str, patch: AccountPatch) -> Result<Account> {
        let tier = validate_patch(&patch)?;

        let mut account = self
            .directory
            .get(id)
            .await?
            .ok_or_else(|| Error::AccountNotFound(format!("no account with id '{}', check the 'id'", id)))?;

        if let Some(new_id) = patch.id {
            account.id = new_id;
        }
        if let Some(owner_name) = patch.owner_name {
            account.owner_name = owner_name;
        }
        if let Some(balance) = patch.balance {
            account.balance = balance;
        }
        if let Some(tier) = tier {
            account.tier = tier;
        }

        debug!("Updating account {}: {:?}", id, account);

        let replaced = self.directory.replace(id, account.clone()).await?;
        if !replaced {
            return Err(Error::AccountNotFound(format!(
                "no account with id '{}', check the 'id'",
                id
            )));
        }

        info!("Updated account {}", id);
        Ok(account)
    }
}

impl Default for DirectoryService {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the supplied fields of a patch, parsing the tier when present
fn validate_patch(patch: &AccountPatch) -> Result<Option<AccountTier>> {
    if let Some(id) = &patch.id {
        if !Account::is_valid_id(id) {
            return Err(Error::InvalidArgument(
                "'id' is invalid, it must start with the letter 'a'".to_string(),
            ));
        }
    }

    if let Some(owner_name) = &patch.owner_name {
        if owner_name.chars().count() < MIN_OWNER_NAME_LEN {
            return Err(Error::InvalidArgument(format!(
                "'ownerName' must be at least {} characters long",
                MIN_OWNER_NAME_LEN
            )));
        }
    }

    if let Some(balance) = patch.balance {
        if balance < Money::ZERO {
            return Err(Error::InvalidArgument(
                "'balance' must be a number greater than or equal to zero".to_string(),
            ));
        }
    }

    patch.tier.as_deref().map(str::parse).transpose()
}
