//! Append-only ledger of account actions. Written by request handlers,
//! read by the activity monitor; entries are never updated or deleted.

mod activity_logs_model;
mod activity_logs_repository;
mod activity_logs_service;

pub use activity_logs_model::{
    ActivityLog, NewActivityLog, ACTION_CREATE, ACTION_DELETE, ACTION_READ, ACTION_UPDATE,
};
pub use activity_logs_repository::ActivityLogRepository;
pub use activity_logs_service::ActivityLogService;
