//! Repository for the account directory

use async_trait::async_trait;
use common::error::Result;
use common::model::account::Account;
use tokio::sync::RwLock;

/// Account directory trait defining the interface for the account collection
///
/// The directory is an ordered sequence: `list` returns accounts in insertion
/// order and `remove` preserves the relative order of the remaining records.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// Get all accounts, in order
    async fn list(&self) -> Result<Vec<Account>>;

    /// Get an account by ID
    async fn get(&self, id: &str) -> Result<Option<Account>>;

    /// Remove the account with the given ID, returning whether one was removed
    async fn remove(&self, id: &str) -> Result<bool>;

    /// Replace the account with the given ID, returning whether one was replaced
    async fn replace(&self, id: &str, account: Account) -> Result<bool>;
}

/// In-memory account directory
///
/// Holds the only reference to each account; callers receive clones and write
/// back through `replace`.
pub struct InMemoryAccountDirectory {
    /// Accounts in seed order
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
        }
    }

    /// Create a directory seeded with the given accounts
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }
}

impl Default for InMemoryAccountDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn list(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|account| account.id == id).cloned())
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        let mut accounts = self.accounts.write().await;
        match accounts.iter().position(|account| account.id == id) {
            Some(index) => {
                // Vec::remove shifts the tail left, keeping relative order
                accounts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn replace(&self, id: &str, account: Account) -> Result<bool> {
        let mut accounts = self.accounts.write().await;
        match accounts.iter().position(|existing| existing.id == id) {
            Some(index) => {
                accounts[index] = account;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
