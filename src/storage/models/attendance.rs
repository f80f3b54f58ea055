use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

/// One attendance fact. The ledger guarantees at most one record per
/// (employee, date) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub is_overtime: bool,
}

impl AttendanceRecord {
    pub fn new(employee_id: &str, date: NaiveDate, status: AttendanceStatus) -> Self {
        AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: employee_id.to_string(),
            date,
            status,
            is_overtime: false,
        }
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AttendanceStatus {
        Present => "Present",
        Absent => "Absent",
        HalfDay => "Half-Day",
        Holiday => "Holiday",
    }
}

impl AttendanceStatus {
    /// Absent and Holiday days cannot also be overtime days.
    pub fn excludes_overtime(self) -> bool {
        matches!(self, AttendanceStatus::Absent | AttendanceStatus::Holiday)
    }
}
