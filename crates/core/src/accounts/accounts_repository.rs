use diesel::prelude::*;
use std::sync::Arc;

use super::accounts_model::{Account, AccountDB, NewAccount, NewAccountDB};
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::accounts;

/// Repository for managing account data in the database
pub struct AccountRepository {
    pool: Arc<DbPool>,
}

impl AccountRepository {
    /// Creates a new AccountRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Creates a new account
    pub fn create(&self, new_account: NewAccount) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        new_account.validate()?;
        let account_db: NewAccountDB = new_account.into();

        diesel::insert_into(accounts::table)
            .values(&account_db)
            .get_result::<AccountDB>(&mut conn)
            .map(Account::from)
            .map_err(Error::from)
    }

    /// Retrieves an account by its ID
    pub fn get_by_id(&self, account_id: i32) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;

        accounts::table
            .find(account_id)
            .first::<AccountDB>(&mut conn)
            .optional()?
            .map(Account::from)
            .ok_or_else(|| Error::NotFound(format!("Account {}", account_id)))
    }

    /// Lists all accounts
    pub fn list(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        accounts::table
            .order(accounts::id.asc())
            .load::<AccountDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Account::from).collect())
            .map_err(Error::from)
    }

    /// Lists only accounts the monitor has flagged
    pub fn list_flagged(&self) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        accounts::table
            .filter(accounts::is_flagged.eq(true))
            .order(accounts::id.asc())
            .load::<AccountDB>(&mut conn)
            .map(|rows| rows.into_iter().map(Account::from).collect())
            .map_err(Error::from)
    }

    /// Marks an account as flagged. The transition is one-way; there is no
    /// corresponding clear operation.
    pub fn set_flagged(&self, account_id: i32) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        let updated = diesel::update(accounts::table.find(account_id))
            .set(accounts::is_flagged.eq(true))
            .execute(&mut conn)?;

        if updated == 0 {
            return Err(Error::NotFound(format!("Account {}", account_id)));
        }
        Ok(())
    }
}
