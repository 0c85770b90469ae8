use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

pub const ACTION_CREATE: &str = "CREATE";
pub const ACTION_READ: &str = "READ";
pub const ACTION_UPDATE: &str = "UPDATE";
pub const ACTION_DELETE: &str = "DELETE";

const ACTIONS: [&str; 4] = [ACTION_CREATE, ACTION_READ, ACTION_UPDATE, ACTION_DELETE];

/// Domain model representing one recorded account action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: i32,
    pub account_id: i32,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub timestamp: NaiveDateTime,
    pub details: Option<String>,
}

/// Input model for appending a ledger entry. When `timestamp` is omitted the
/// record is stamped with the current time on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivityLog {
    pub account_id: i32,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub timestamp: Option<NaiveDateTime>,
    pub details: Option<String>,
}

impl NewActivityLog {
    /// Validates the ledger entry data
    pub fn validate(&self) -> Result<()> {
        if !ACTIONS.contains(&self.action.as_str()) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown action '{}'",
                self.action
            ))));
        }
        if self.entity_type.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "entity_type".to_string(),
            )));
        }
        Ok(())
    }
}

/// Database model for activity log entries
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::activity_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ActivityLogDB {
    pub id: i32,
    pub account_id: i32,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub timestamp: NaiveDateTime,
    pub details: Option<String>,
}

/// Insertable model for activity log entries
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::activity_logs)]
pub struct NewActivityLogDB {
    pub account_id: i32,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<i32>,
    pub timestamp: NaiveDateTime,
    pub details: Option<String>,
}

// Conversion implementations
impl From<ActivityLogDB> for ActivityLog {
    fn from(db: ActivityLogDB) -> Self {
        Self {
            id: db.id,
            account_id: db.account_id,
            action: db.action,
            entity_type: db.entity_type,
            entity_id: db.entity_id,
            timestamp: db.timestamp,
            details: db.details,
        }
    }
}

impl From<NewActivityLog> for NewActivityLogDB {
    fn from(domain: NewActivityLog) -> Self {
        Self {
            account_id: domain.account_id,
            action: domain.action,
            entity_type: domain.entity_type,
            entity_id: domain.entity_id,
            timestamp: domain
                .timestamp
                .unwrap_or_else(|| chrono::Utc::now().naive_utc()),
            details: domain.details,
        }
    }
}
