use crate::storage::models::{ExtraPayPolicy, PayrollInput, PayrollResult};

/// Fixed 30-day month basis: salary is normalized to the same divisor in
/// every month regardless of actual month length.
pub const MONTH_BASIS_DAYS: f64 = 30.0;

/// Derive payout figures from a payroll working set.
///
/// Deterministic and pure. Inputs pass through the clamping boundary first,
/// so negative entries and non-positive divisors never reach the formula.
/// Holiday-worked days and overtime hours are both converted to
/// day-equivalents and paid at the base per-day rate; how the two combine is
/// the caller's configured `ExtraPayPolicy`.
pub fn compute(input: &PayrollInput, policy: ExtraPayPolicy) -> PayrollResult {
    let input = input.clamped();

    let per_day_salary = input.monthly_salary / MONTH_BASIS_DAYS;
    let payable_days = (MONTH_BASIS_DAYS - input.leave_days).max(0.0);

    let holiday_days = input.holiday_worked_days;
    let overtime_days = input.extra_hours / input.standard_hours;
    let extra_days = match policy {
        ExtraPayPolicy::Additive => holiday_days + overtime_days,
        ExtraPayPolicy::HolidayPrecedence => {
            if holiday_days > 0.0 {
                holiday_days
            } else {
                overtime_days
            }
        }
    };

    let extra_pay = extra_days * per_day_salary;
    let final_total = payable_days * per_day_salary + extra_pay;

    PayrollResult {
        per_day_salary,
        payable_days,
        extra_days,
        extra_pay,
        final_total,
    }
}
