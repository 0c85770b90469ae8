use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::sync::Arc;

use super::activity_logs_model::{ActivityLog, ActivityLogDB, NewActivityLog, NewActivityLogDB};
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::activity_logs;

/// Repository for the append-only activity ledger
pub struct ActivityLogRepository {
    pool: Arc<DbPool>,
}

impl ActivityLogRepository {
    /// Creates a new ActivityLogRepository instance
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }

    /// Appends one ledger entry. Entries are immutable once written.
    pub fn append(&self, new_log: NewActivityLog) -> Result<ActivityLog> {
        let mut conn = get_connection(&self.pool)?;

        new_log.validate()?;
        let log_db: NewActivityLogDB = new_log.into();

        diesel::insert_into(activity_logs::table)
            .values(&log_db)
            .get_result::<ActivityLogDB>(&mut conn)
            .map(ActivityLog::from)
            .map_err(Error::from)
    }

    /// Counts entries for an account whose timestamp lies in `[from, to]`.
    /// Both bounds are inclusive.
    pub fn count_for_account_in_window(
        &self,
        account_id: i32,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;

        activity_logs::table
            .filter(activity_logs::account_id.eq(account_id))
            .filter(activity_logs::timestamp.ge(from))
            .filter(activity_logs::timestamp.le(to))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(Error::from)
    }

    /// Lists the most recent entries for an account, newest first
    pub fn list_for_account(&self, account_id: i32, limit: i64) -> Result<Vec<ActivityLog>> {
        let mut conn = get_connection(&self.pool)?;

        activity_logs::table
            .filter(activity_logs::account_id.eq(account_id))
            .order(activity_logs::timestamp.desc())
            .limit(limit)
            .load::<ActivityLogDB>(&mut conn)
            .map(|rows| rows.into_iter().map(ActivityLog::from).collect())
            .map_err(Error::from)
    }
}
