use std::sync::Arc;

use super::activity_logs_model::{ActivityLog, NewActivityLog};
use super::activity_logs_repository::ActivityLogRepository;
use crate::errors::Result;

/// Service seam the request-handling layer records actions through. The
/// caller supplies the authenticated account id.
pub struct ActivityLogService {
    repository: Arc<ActivityLogRepository>,
}

impl ActivityLogService {
    pub fn new(repository: Arc<ActivityLogRepository>) -> Self {
        Self { repository }
    }

    /// Records one action against an account, stamped with the current time
    pub fn record(
        &self,
        account_id: i32,
        action: &str,
        entity_type: &str,
        entity_id: Option<i32>,
        details: Option<String>,
    ) -> Result<ActivityLog> {
        self.repository.append(NewActivityLog {
            account_id,
            action: action.to_string(),
            entity_type: entity_type.to_string(),
            entity_id,
            timestamp: None,
            details,
        })
    }

    pub fn recent_for_account(&self, account_id: i32, limit: i64) -> Result<Vec<ActivityLog>> {
        self.repository.list_for_account(account_id, limit)
    }
}
