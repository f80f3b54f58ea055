use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

/// Per-employee-per-month working set for the payroll calculator. Values are
/// seeded from the attendance ledger but remain freely editable until the
/// payroll is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollInput {
    pub employee_id: String,
    pub monthly_salary: f64,
    /// Half-day granularity.
    pub leave_days: f64,
    pub holiday_worked_days: f64,
    pub extra_hours: f64,
    /// Divisor converting overtime hours into day-equivalents.
    pub standard_hours: f64,
}

impl PayrollInput {
    /// Input-boundary guardrails: negative entries never reach the formula,
    /// and the hour divisor is kept positive.
    pub fn clamped(&self) -> PayrollInput {
        PayrollInput {
            employee_id: self.employee_id.clone(),
            monthly_salary: self.monthly_salary.max(0.0),
            leave_days: self.leave_days.max(0.0),
            holiday_worked_days: self.holiday_worked_days.max(0.0),
            extra_hours: self.extra_hours.max(0.0),
            standard_hours: if self.standard_hours > 0.0 {
                self.standard_hours
            } else {
                1.0
            },
        }
    }
}

/// Figures derived from a `PayrollInput` on the fixed 30-day month basis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PayrollResult {
    pub per_day_salary: f64,
    pub payable_days: f64,
    pub extra_days: f64,
    pub extra_pay: f64,
    pub final_total: f64,
}

/// A frozen payroll computation. Takes precedence over automatic
/// recomputation from live attendance data for its (year, month, employee)
/// key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedPayroll {
    #[serde(flatten)]
    pub input: PayrollInput,
    #[serde(flatten)]
    pub result: PayrollResult,
    pub confirmed_at: DateTime<Utc>,
}

string_enum! {
    /// The source console shipped two divergent extra-pay rules; the policy
    /// is explicit configuration here rather than a silent pick.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ExtraPayPolicy {
        /// Holiday-worked days and overtime day-equivalents both pay out.
        Additive => "additive",
        /// Only one rule applies; holiday-worked days win when non-zero.
        HolidayPrecedence => "holiday_precedence",
    }
}
