use std::sync::{Arc, Once};

use chrono::{Datelike, Months, NaiveDate, Utc};
use fake::Fake;
use fake::faker::name::en::Name;

use staffdesk::storage::models::{EmployeeInput, EmployeeStatus, Role};
use staffdesk::{Config, KeyValueStore, MemoryStore, StaffDesk};

static INIT: Once = Once::new();

pub fn setup_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
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

pub fn random_employee_input(role: Role, salary: f64) -> EmployeeInput {
    let name: String = Name().fake();
    employee_input(&name, role, salary)
}

/// Console over an in-memory store, seeded with the stock café roster
/// (ids "1" through "5").
pub fn seeded_desk() -> StaffDesk {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    seeded_desk_on(store)
}

pub fn seeded_desk_on(store: Arc<dyn KeyValueStore>) -> StaffDesk {
    let mut desk = StaffDesk::open(Config::default(), store).expect("open desk");
    for (name, role, salary) in [
        ("James Wilson", Role::Barista, 3200.0),
        ("Sarah Parker", Role::Manager, 4500.0),
        ("Michael Chen", Role::Chef, 3800.0),
        ("Emily Davis", Role::Waiter, 2800.0),
        ("Robert Brown", Role::Cleaner, 2500.0),
    ] {
        desk.roster_mut()
            .add(employee_input(name, role, salary))
            .expect("seed employee");
    }
    desk
}

/// (year, month) of the month `n` months before the current one; always
/// fully elapsed for n >= 1.
pub fn months_ago(n: u32) -> (i32, u32) {
    let then = Utc::now()
        .date_naive()
        .checked_sub_months(Months::new(n))
        .expect("valid month arithmetic");
    (then.year(), then.month())
}

/// A date inside the current calendar month (always loggable).
pub fn current_month_day() -> NaiveDate {
    Utc::now().date_naive()
}
