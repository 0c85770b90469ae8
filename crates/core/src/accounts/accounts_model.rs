use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

pub const ROLE_REGULAR: &str = "regular";
pub const ROLE_ADMIN: &str = "admin";

/// Domain model representing an account in the catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub is_flagged: bool,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    pub username: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    ROLE_REGULAR.to_string()
}

impl NewAccount {
    /// Validates the new account data
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Username cannot be empty".to_string(),
            )));
        }
        if self.role != ROLE_REGULAR && self.role != ROLE_ADMIN {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown role '{}'",
                self.role
            ))));
        }
        Ok(())
    }
}

/// Database model for accounts
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDB {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub is_flagged: bool,
    pub created_at: NaiveDateTime,
}

/// Insertable model for accounts; the id is assigned by the database
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::accounts)]
pub struct NewAccountDB {
    pub username: String,
    pub role: String,
    pub created_at: NaiveDateTime,
}

// Conversion implementations
impl From<AccountDB> for Account {
    fn from(db: AccountDB) -> Self {
        Self {
            id: db.id,
            username: db.username,
            role: db.role,
            is_flagged: db.is_flagged,
            created_at: db.created_at,
        }
    }
}

impl From<NewAccount> for NewAccountDB {
    fn from(domain: NewAccount) -> Self {
        Self {
            username: domain.username,
            role: domain.role,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
