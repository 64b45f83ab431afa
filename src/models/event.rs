use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SAVE_EMPLOYEE_SUBJECT: &str = "Save Employee";
pub const SAVE_EMPLOYEE_EVENT_TYPE: &str = "Save Employee";
pub const SAVE_EMPLOYEE_DATA_VERSION: &str = "1.0";

/// Event Grid schema envelope. `data` carries the raw request body as a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeEvent {
    pub id: String,
    pub subject: String,
    pub event_type: String,
    pub event_time: DateTime<Utc>,
    pub data: String,
    pub data_version: String,
}

impl EmployeeEvent {
    pub fn new(subject: &str, event_type: &str, data_version: &str, payload: &str) -> Self {
        EmployeeEvent {
            id: Uuid::new_v4().to_string(),
            subject: subject.to_string(),
            event_type: event_type.to_string(),
            event_time: Utc::now(),
            data: payload.to_string(),
            data_version: data_version.to_string(),
        }
    }
}
