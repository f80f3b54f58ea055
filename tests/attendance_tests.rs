use chrono::Months;
use pretty_assertions::assert_eq;

use staffdesk::storage::models::AttendanceStatus;

mod common;

#[test]
fn test_logging_same_status_twice_toggles_off() {
    // Arrange
    common::setup_test_env();
    let mut desk = common::seeded_desk();
    let day = common::current_month_day();

    // Act
    let first = desk
        .log_status("1", day, AttendanceStatus::Present)
        .unwrap();
    let second = desk
        .log_status("1", day, AttendanceStatus::Present)
        .unwrap();

    // Assert: second call removed the record rather than duplicating it
    assert!(first.is_some());
    assert_eq!(second, None);
    assert!(desk.ledger().record_for("1", day).is_none());
    assert_eq!(desk.ledger().records().len(), 0);
}

#[test]
fn test_one_record_per_employee_and_day() {
    common::setup_test_env();
    let mut desk = common::seeded_desk();
    let day = common::current_month_day();

    desk.log_status("1", day, AttendanceStatus::Present).unwrap();
    desk.log_status("1", day, AttendanceStatus::HalfDay).unwrap();
    desk.log_status("1", day, AttendanceStatus::Absent).unwrap();

    assert_eq!(desk.ledger().records().len(), 1);
    let record = desk.ledger().record_for("1", day).unwrap();
    assert_eq!(record.status, AttendanceStatus::Absent);
}

#[test]
fn test_absent_and_holiday_drop_the_overtime_flag() {
    common::setup_test_env();
    let mut desk = common::seeded_desk();
    let day = common::current_month_day();

    desk.log_overtime("1", day, true).unwrap();
    assert!(desk.ledger().record_for("1", day).unwrap().is_overtime);

    let record = desk
        .log_status("1", day, AttendanceStatus::Absent)
        .unwrap()
        .unwrap();

    assert_eq!(record.status, AttendanceStatus::Absent);
    assert!(!record.is_overtime);
}

#[test]
fn test_overtime_on_unlogged_day_creates_present_record() {
    common::setup_test_env();
    let mut desk = common::seeded_desk();
    let day = common::current_month_day();

    let record = desk.log_overtime("1", day, true).unwrap().unwrap();

    assert_eq!(record.status, AttendanceStatus::Present);
    assert!(record.is_overtime);
}

#[test]
fn test_overtime_forces_present_on_existing_record() {
    common::setup_test_env();
    let mut desk = common::seeded_desk();
    let day = common::current_month_day();
    desk.log_status("1", day, AttendanceStatus::HalfDay).unwrap();

    let record = desk.log_overtime("1", day, true).unwrap().unwrap();

    assert_eq!(record.status, AttendanceStatus::Present);
    assert!(record.is_overtime);
}

#[test]
fn test_overtime_off_without_record_is_a_no_op() {
    common::setup_test_env();
    let mut desk = common::seeded_desk();
    let day = common::current_month_day();

    let outcome = desk.log_overtime("1", day, false).unwrap();

    assert_eq!(outcome, None);
    assert!(desk.ledger().records().is_empty());
}

#[test]
fn test_historical_dates_are_rejected_not_clamped() {
    common::setup_test_env();
    let mut desk = common::seeded_desk();
    let last_month = common::current_month_day()
        .checked_sub_months(Months::new(1))
        .unwrap();

    let err = desk
        .log_status("1", last_month, AttendanceStatus::Present)
        .unwrap_err();

    assert!(err.is_policy_denied());
    assert!(desk.ledger().records().is_empty());

    let err = desk.log_overtime("1", last_month, true).unwrap_err();
    assert!(err.is_policy_denied());
}

#[test]
fn test_status_today_follows_the_ledger() {
    common::setup_test_env();
    let mut desk = common::seeded_desk();
    let day = common::current_month_day();
    use staffdesk::storage::models::EmployeeStatus;

    assert_eq!(desk.status_today("1"), EmployeeStatus::Inactive);

    desk.log_status("1", day, AttendanceStatus::HalfDay).unwrap();
    assert_eq!(desk.status_today("1"), EmployeeStatus::Active);

    desk.log_status("1", day, AttendanceStatus::Absent).unwrap();
    assert_eq!(desk.status_today("1"), EmployeeStatus::Inactive);
}

#[test]
fn test_unknown_employee_ids_are_not_referentially_enforced() {
    common::setup_test_env();
    let mut desk = common::seeded_desk();
    let day = common::current_month_day();

    // Ledger accepts facts for ids missing from the roster
    let record = desk
        .log_status("42", day, AttendanceStatus::Present)
        .unwrap();

    assert!(record.is_some());
}
