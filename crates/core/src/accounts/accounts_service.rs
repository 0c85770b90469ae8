use std::sync::Arc;

use super::accounts_model::{Account, NewAccount};
use super::accounts_repository::AccountRepository;
use crate::errors::Result;

/// Service for managing accounts
pub struct AccountService {
    repository: Arc<AccountRepository>,
}

impl AccountService {
    pub fn new(repository: Arc<AccountRepository>) -> Self {
        Self { repository }
    }

    pub fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        self.repository.create(new_account)
    }

    pub fn get_account(&self, account_id: i32) -> Result<Account> {
        self.repository.get_by_id(account_id)
    }

    /// Lists all accounts, flagged state included
    pub fn get_all_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list()
    }

    /// Lists accounts the activity monitor has flagged
    pub fn get_flagged_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list_flagged()
    }
}
