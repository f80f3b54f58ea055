use serde::Serialize;

/// Headline numbers for the console landing view. Half-days count as half a
/// presence and half an absence.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_employees: usize,
    pub present_today: f64,
    pub absent_today: f64,
    pub overtime_today: usize,
    pub leaves_this_month: f64,
    pub salary_this_month: f64,
}

/// Monthly attendance counters for one employee, reduced from the ledger.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MonthlyActivity {
    pub present_days: usize,
    pub absent_days: usize,
    pub half_days: usize,
    pub holiday_worked_days: usize,
    pub overtime_shifts: usize,
}

impl MonthlyActivity {
    /// Leave days at half-day granularity: full absences plus half of each
    /// half-day.
    pub fn leave_days(&self) -> f64 {
        self.absent_days as f64 + self.half_days as f64 * 0.5
    }

    /// Overtime hours under the given hours-per-overtime-shift convention.
    pub fn overtime_hours(&self, unit_hours: f64) -> f64 {
        self.overtime_shifts as f64 * unit_hours
    }
}
