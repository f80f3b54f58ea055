pub mod config;
pub mod error;
pub mod services;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

pub use config::Config;
pub use error::{AppError, Result};
pub use services::reports::{Report, ReportKind};
pub use storage::{AttendanceLedger, EmployeeRoster, JsonFileStore, KeyValueStore, MemoryStore,
    PayrollBook};

use services::{aggregate, calculator, calendar, reports::ReportProjector};
use storage::models::{
    AttendanceRecord, AttendanceStatus, ConfirmedPayroll, DashboardStats, EmployeeStatus,
    PayrollInput, PayrollResult,
};

/// Top-level application state: the roster and attendance ledger shared by
/// every derived view, the independently persisted payroll book, and the
/// policy configuration. All operations run to completion synchronously.
pub struct StaffDesk {
    config: Config,
    roster: EmployeeRoster,
    ledger: AttendanceLedger,
    payroll: PayrollBook,
}

impl StaffDesk {
    /// Load all stores from one shared key-value handle.
    pub fn open(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        Ok(StaffDesk {
            roster: EmployeeRoster::load(store.clone())?,
            ledger: AttendanceLedger::load(store.clone())?,
            payroll: PayrollBook::load(store)?,
            config,
        })
    }

    /// Environment-configured instance over the file-backed store.
    pub fn open_from_env() -> Result<Self> {
        let config = Config::from_env()?;
        let store = Arc::new(JsonFileStore::open(&config.data_dir)?);
        Self::open(config, store)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn roster(&self) -> &EmployeeRoster {
        &self.roster
    }

    /// Roster CRUD goes through the repository directly.
    pub fn roster_mut(&mut self) -> &mut EmployeeRoster {
        &mut self.roster
    }

    pub fn ledger(&self) -> &AttendanceLedger {
        &self.ledger
    }

    pub fn payroll(&self) -> &PayrollBook {
        &self.payroll
    }

    /// Log (or toggle off) an attendance status. Dates before the first of
    /// the current month are refused, not clamped.
    pub fn log_status(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>> {
        calendar::ensure_loggable(date, today())?;
        self.ledger.set_status(employee_id, date, status)
    }

    /// Toggle the overtime flag, under the same historical-locking bound.
    pub fn log_overtime(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        on: bool,
    ) -> Result<Option<AttendanceRecord>> {
        calendar::ensure_loggable(date, today())?;
        self.ledger.set_overtime(employee_id, date, on)
    }

    /// Working set for the payroll calculator: the confirmed entry when one
    /// exists, otherwise a fresh seed from the attendance ledger.
    pub fn payroll_draft(&self, year: i32, month: u32, employee_id: &str) -> Result<PayrollInput> {
        calendar::validate_month(month)?;
        if let Some(confirmed) = self.payroll.get(year, month, employee_id) {
            return Ok(confirmed.input.clone());
        }
        let employee = self
            .roster
            .get(employee_id)
            .ok_or_else(|| AppError::not_found(format!("employee {employee_id}")))?;
        Ok(aggregate::seed_payroll_input(
            employee,
            &self.ledger,
            year,
            month,
            &self.config,
        ))
    }

    /// Derive payout figures under the configured extra-pay policy.
    pub fn review(&self, input: &PayrollInput) -> PayrollResult {
        calculator::compute(input, self.config.extra_pay_policy)
    }

    /// Compute and freeze a payroll for (year, month, employee). Refused when
    /// the month is locked.
    pub fn confirm(
        &mut self,
        year: i32,
        month: u32,
        employee_id: &str,
        input: PayrollInput,
    ) -> Result<ConfirmedPayroll> {
        let result = self.review(&input);
        self.payroll.confirm(year, month, employee_id, input, result)
    }

    /// Permanently lock a fully elapsed month against payroll mutation.
    pub fn lock_month(&mut self, year: i32, month: u32) -> Result<()> {
        self.payroll.lock_month(year, month, today())
    }

    pub fn is_locked(&self, year: i32, month: u32) -> bool {
        self.payroll.is_locked(year, month)
    }

    /// Read-only report rows for the selected period.
    pub fn report(&self, kind: ReportKind, year: i32, month: u32) -> Result<Report> {
        ReportProjector {
            roster: &self.roster,
            ledger: &self.ledger,
            payroll: &self.payroll,
            config: &self.config,
        }
        .generate(kind, year, month)
    }

    pub fn dashboard(&self) -> DashboardStats {
        aggregate::dashboard_stats(&self.roster, &self.ledger, today())
    }

    /// Computed roster status for today: Active when a Present or Half-Day
    /// record exists, Inactive otherwise.
    pub fn status_today(&self, employee_id: &str) -> EmployeeStatus {
        aggregate::status_today(&self.ledger, employee_id, today())
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
