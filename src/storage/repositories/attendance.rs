use chrono::{Datelike, NaiveDate};
use std::sync::Arc;

use crate::error::Result;
use crate::storage::kv::{ATTENDANCE_KEY, KeyValueStore};
use crate::storage::models::{AttendanceRecord, AttendanceStatus};

/// Daily attendance ledger: at most one record per (employee, date), with
/// toggle semantics on the status buttons and a policy-coupled overtime
/// flag. The coupling rules live here, in the write path, regardless of
/// caller.
#[derive(Clone)]
pub struct AttendanceLedger {
    store: Arc<dyn KeyValueStore>,
    records: Vec<AttendanceRecord>,
}

impl AttendanceLedger {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let records = match store.get(ATTENDANCE_KEY)? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };
        Ok(AttendanceLedger { store, records })
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub fn record_for(&self, employee_id: &str, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.records
            .iter()
            .find(|r| r.employee_id == employee_id && r.date == date)
    }

    pub fn records_on(&self, date: NaiveDate) -> Vec<&AttendanceRecord> {
        self.records.iter().filter(|r| r.date == date).collect()
    }

    /// All records falling inside one calendar month.
    pub fn records_in_month(&self, year: i32, month: u32) -> Vec<&AttendanceRecord> {
        self.records
            .iter()
            .filter(|r| r.date.year() == year && r.date.month() == month)
            .collect()
    }

    pub fn employee_records_in_month(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> Vec<&AttendanceRecord> {
        self.records
            .iter()
            .filter(|r| {
                r.employee_id == employee_id && r.date.year() == year && r.date.month() == month
            })
            .collect()
    }

    /// Log a status for (employee, date).
    ///
    /// Applying a record's own current status deletes it (explicit
    /// "turn off"); a different status updates in place, dropping the
    /// overtime flag when the new status excludes it; otherwise a fresh
    /// record is created. Returns the resulting record, or `None` after a
    /// toggle-off.
    pub fn set_status(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>> {
        let existing = self
            .records
            .iter()
            .position(|r| r.employee_id == employee_id && r.date == date);

        let outcome = match existing {
            Some(index) if self.records[index].status == status => {
                let removed = self.records.remove(index);
                log::debug!(
                    "Unlogged {} for employee {} on {}",
                    removed.status,
                    employee_id,
                    date
                );
                None
            }
            Some(index) => {
                let record = &mut self.records[index];
                record.status = status;
                if status.excludes_overtime() {
                    record.is_overtime = false;
                }
                Some(record.clone())
            }
            None => {
                let record = AttendanceRecord::new(employee_id, date, status);
                self.records.push(record.clone());
                Some(record)
            }
        };

        self.save()?;
        Ok(outcome)
    }

    /// Toggle the overtime flag for (employee, date).
    ///
    /// Turning overtime on forces the day to Present; turning it on for an
    /// unlogged day creates the Present record. Turning it off with no
    /// record present is a no-op.
    pub fn set_overtime(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        on: bool,
    ) -> Result<Option<AttendanceRecord>> {
        let existing = self
            .records
            .iter_mut()
            .find(|r| r.employee_id == employee_id && r.date == date);

        let outcome = match existing {
            Some(record) => {
                record.is_overtime = on;
                if on {
                    record.status = AttendanceStatus::Present;
                }
                Some(record.clone())
            }
            None if on => {
                let mut record =
                    AttendanceRecord::new(employee_id, date, AttendanceStatus::Present);
                record.is_overtime = true;
                self.records.push(record.clone());
                Some(record)
            }
            None => return Ok(None), // nothing to turn off
        };

        self.save()?;
        Ok(outcome)
    }

    fn save(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.records)?;
        self.store.put(ATTENDANCE_KEY, &blob)?;
        Ok(())
    }
}
