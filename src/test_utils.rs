use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::Config;
use crate::storage::kv::{KeyValueStore, MemoryStore};
use crate::storage::models::{AttendanceStatus, EmployeeInput, EmployeeStatus, Role};
use crate::storage::repositories::{AttendanceLedger, EmployeeRoster, PayrollBook};

pub fn mem_store() -> Arc<dyn KeyValueStore> {
    Arc::new(MemoryStore::new())
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn employee_input(name: &str, role: Role, salary: f64) -> EmployeeInput {
    EmployeeInput {
        name: name.to_string(),
        role,
        salary,
        status: EmployeeStatus::Active,
        join_date: date(2023, 1, 15),
    }
}

/// The café roster the console ships with.
pub fn seeded_roster(store: Arc<dyn KeyValueStore>) -> EmployeeRoster {
    let mut roster = EmployeeRoster::load(store).expect("load roster");
    for (name, role, salary) in [
        ("James Wilson", Role::Barista, 3200.0),
        ("Sarah Parker", Role::Manager, 4500.0),
        ("Michael Chen", Role::Chef, 3800.0),
        ("Emily Davis", Role::Waiter, 2800.0),
        ("Robert Brown", Role::Cleaner, 2500.0),
    ] {
        roster
            .add(employee_input(name, role, salary))
            .expect("seed employee");
    }
    roster
}

pub fn empty_ledger(store: Arc<dyn KeyValueStore>) -> AttendanceLedger {
    AttendanceLedger::load(store).expect("load ledger")
}

pub fn empty_payroll(store: Arc<dyn KeyValueStore>) -> PayrollBook {
    PayrollBook::load(store).expect("load payroll book")
}

/// Log a run of statuses for one employee starting at `first_day`.
pub fn log_run(
    ledger: &mut AttendanceLedger,
    employee_id: &str,
    first_day: NaiveDate,
    statuses: &[AttendanceStatus],
) {
    for (offset, status) in statuses.iter().enumerate() {
        let day = first_day + chrono::Days::new(offset as u64);
        ledger
            .set_status(employee_id, day, *status)
            .expect("log status");
    }
}

pub fn test_config() -> Config {
    Config::default()
}
