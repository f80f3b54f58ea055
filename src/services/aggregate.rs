use chrono::NaiveDate;

use crate::config::Config;
use crate::storage::models::{
    AttendanceRecord, AttendanceStatus, DashboardStats, Employee, EmployeeStatus, MonthlyActivity,
    PayrollInput,
};
use crate::storage::repositories::{AttendanceLedger, EmployeeRoster};

/// Reduce one employee's records over one (year, month) window into
/// attendance counters. Pure; callers must prefer a confirmed payroll over
/// these figures whenever one exists for the same key.
pub fn monthly_activity(
    ledger: &AttendanceLedger,
    employee_id: &str,
    year: i32,
    month: u32,
) -> MonthlyActivity {
    reduce(&ledger.employee_records_in_month(employee_id, year, month))
}

fn reduce(records: &[&AttendanceRecord]) -> MonthlyActivity {
    let mut activity = MonthlyActivity::default();
    for record in records {
        match record.status {
            AttendanceStatus::Present => activity.present_days += 1,
            AttendanceStatus::Absent => activity.absent_days += 1,
            AttendanceStatus::HalfDay => activity.half_days += 1,
            AttendanceStatus::Holiday => activity.holiday_worked_days += 1,
        }
        if record.is_overtime {
            activity.overtime_shifts += 1;
        }
    }
    activity
}

/// Seed a payroll working set from the ledger under the configured
/// conventions. The overtime-hours figure is a convenience default
/// (`overtime shifts * Config::overtime_unit_hours`); the calculator accepts
/// any explicit override.
pub fn seed_payroll_input(
    employee: &Employee,
    ledger: &AttendanceLedger,
    year: i32,
    month: u32,
    config: &Config,
) -> PayrollInput {
    let activity = monthly_activity(ledger, &employee.id, year, month);
    PayrollInput {
        employee_id: employee.id.clone(),
        monthly_salary: employee.salary,
        leave_days: activity.leave_days(),
        holiday_worked_days: activity.holiday_worked_days as f64,
        extra_hours: activity.overtime_hours(config.overtime_unit_hours),
        standard_hours: config.standard_hours,
    }
}

/// Today's computed roster status: an employee counts as active when a
/// Present or Half-Day record exists for today.
pub fn status_today(
    ledger: &AttendanceLedger,
    employee_id: &str,
    today: NaiveDate,
) -> EmployeeStatus {
    match ledger.record_for(employee_id, today) {
        Some(record)
            if matches!(
                record.status,
                AttendanceStatus::Present | AttendanceStatus::HalfDay
            ) =>
        {
            EmployeeStatus::Active
        }
        _ => EmployeeStatus::Inactive,
    }
}

/// Headline console figures for `today` and its month. Half-days count half
/// toward presence and half toward absence.
pub fn dashboard_stats(
    roster: &EmployeeRoster,
    ledger: &AttendanceLedger,
    today: NaiveDate,
) -> DashboardStats {
    use chrono::Datelike;

    let today_records = ledger.records_on(today);
    let count = |status: AttendanceStatus| {
        today_records.iter().filter(|r| r.status == status).count()
    };
    let present = count(AttendanceStatus::Present);
    let absent = count(AttendanceStatus::Absent);
    let half_day = count(AttendanceStatus::HalfDay);
    let overtime = today_records.iter().filter(|r| r.is_overtime).count();

    let monthly = reduce(&ledger.records_in_month(today.year(), today.month()));

    DashboardStats {
        total_employees: roster.list().len(),
        present_today: present as f64 + half_day as f64 * 0.5,
        absent_today: absent as f64 + half_day as f64 * 0.5,
        overtime_today: overtime,
        leaves_this_month: monthly.leave_days(),
        salary_this_month: roster.total_base_salary(),
    }
}
