use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::services::aggregate::{monthly_activity, seed_payroll_input};
use crate::services::calculator::compute;
use crate::services::calendar::validate_month;
use crate::storage::models::macros::string_enum;
use crate::storage::repositories::{AttendanceLedger, EmployeeRoster, PayrollBook};

// Statutory rates applied to the roster's base-salary sum.
pub const PROFESSIONAL_TAX_RATE: f64 = 0.02;
pub const EMPLOYER_PF_RATE: f64 = 0.12;
pub const SERVICE_TAX_RATE: f64 = 0.18;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ReportKind {
        AttendanceSummary => "attendance",
        SalaryExpenditure => "salary",
        LeavePattern => "leaves",
        StaffLedger => "ledger",
        TaxLiability => "tax",
    }
}

/// Row field names double as export column headers, so the serde renames
/// carry the human-facing titles and the struct order carries the column
/// order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttendanceSummaryRow {
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Present Days")]
    pub present_days: usize,
    #[serde(rename = "Absent Days")]
    pub absent_days: usize,
    #[serde(rename = "Half-Days")]
    pub half_days: usize,
    #[serde(rename = "Overtime Shifts")]
    pub overtime_shifts: usize,
    #[serde(rename = "Holidays Worked")]
    pub holidays_worked: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SalaryExpenditureRow {
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    #[serde(rename = "Base Salary")]
    pub base_salary: f64,
    #[serde(rename = "Leaves")]
    pub leaves: f64,
    #[serde(rename = "Payable Days")]
    pub payable_days: f64,
    #[serde(rename = "Extra Pay")]
    pub extra_pay: f64,
    #[serde(rename = "Total Payout")]
    pub total_payout: f64,
    #[serde(rename = "Status")]
    pub status: PayoutStatus,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeavePatternRow {
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    #[serde(rename = "Total Leaves")]
    pub total_leaves: f64,
    #[serde(rename = "Status")]
    pub status: LeavePatternFlag,
}

/// Ledger rows only carry figures once a payroll is confirmed; drafts leave
/// the derived columns empty rather than guessing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StaffLedgerRow {
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    #[serde(rename = "Monthly Base")]
    pub monthly_base: f64,
    #[serde(rename = "Leaves")]
    pub leaves: Option<f64>,
    #[serde(rename = "Extra Days Eq")]
    pub extra_days: Option<f64>,
    #[serde(rename = "Final Disbursement")]
    pub final_disbursement: Option<f64>,
    #[serde(rename = "Ref")]
    pub reference: LedgerRef,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaxLiabilityRow {
    #[serde(rename = "Tax Category")]
    pub category: String,
    #[serde(rename = "Rate")]
    pub rate: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PayoutStatus {
        Confirmed => "Confirmed",
        Estimated => "Estimated",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LeavePatternFlag {
        HighAbsenteeism => "High Absenteeism",
        Moderate => "Moderate",
        Regular => "Regular",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum LedgerRef {
        LockedLedger => "Locked Ledger",
        Draft => "Draft",
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Report {
    AttendanceSummary(Vec<AttendanceSummaryRow>),
    SalaryExpenditure(Vec<SalaryExpenditureRow>),
    LeavePattern(Vec<LeavePatternRow>),
    StaffLedger(Vec<StaffLedgerRow>),
    TaxLiability(Vec<TaxLiabilityRow>),
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Report::AttendanceSummary(_) => ReportKind::AttendanceSummary,
            Report::SalaryExpenditure(_) => ReportKind::SalaryExpenditure,
            Report::LeavePattern(_) => ReportKind::LeavePattern,
            Report::StaffLedger(_) => ReportKind::StaffLedger,
            Report::TaxLiability(_) => ReportKind::TaxLiability,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Report::AttendanceSummary(rows) => rows.len(),
            Report::SalaryExpenditure(rows) => rows.len(),
            Report::LeavePattern(rows) => rows.len(),
            Report::StaffLedger(rows) => rows.len(),
            Report::TaxLiability(rows) => rows.len(),
        }
    }
}

/// Read-only projection of the stores into export-ready rows; generation
/// never mutates anything.
pub struct ReportProjector<'a> {
    pub roster: &'a EmployeeRoster,
    pub ledger: &'a AttendanceLedger,
    pub payroll: &'a PayrollBook,
    pub config: &'a Config,
}

impl ReportProjector<'_> {
    pub fn generate(&self, kind: ReportKind, year: i32, month: u32) -> Result<Report> {
        validate_month(month)?;
        let report = match kind {
            ReportKind::AttendanceSummary => {
                Report::AttendanceSummary(self.attendance_summary(year, month))
            }
            ReportKind::SalaryExpenditure => {
                Report::SalaryExpenditure(self.salary_expenditure(year, month))
            }
            ReportKind::LeavePattern => Report::LeavePattern(self.leave_pattern(year, month)),
            ReportKind::StaffLedger => Report::StaffLedger(self.staff_ledger(year, month)),
            ReportKind::TaxLiability => Report::TaxLiability(self.tax_liability()),
        };
        Ok(report)
    }

    fn attendance_summary(&self, year: i32, month: u32) -> Vec<AttendanceSummaryRow> {
        self.roster
            .list()
            .iter()
            .map(|emp| {
                let activity = monthly_activity(self.ledger, &emp.id, year, month);
                AttendanceSummaryRow {
                    employee_name: emp.name.clone(),
                    role: emp.role.to_string(),
                    present_days: activity.present_days,
                    absent_days: activity.absent_days,
                    half_days: activity.half_days,
                    overtime_shifts: activity.overtime_shifts,
                    holidays_worked: activity.holiday_worked_days,
                }
            })
            .collect()
    }

    fn salary_expenditure(&self, year: i32, month: u32) -> Vec<SalaryExpenditureRow> {
        self.roster
            .list()
            .iter()
            .map(|emp| match self.payroll.get(year, month, &emp.id) {
                Some(confirmed) => SalaryExpenditureRow {
                    employee_name: emp.name.clone(),
                    base_salary: confirmed.input.monthly_salary,
                    leaves: confirmed.input.leave_days,
                    payable_days: confirmed.result.payable_days,
                    extra_pay: confirmed.result.extra_pay,
                    total_payout: confirmed.result.final_total,
                    status: PayoutStatus::Confirmed,
                },
                None => {
                    // No confirmed payroll: estimate through the same
                    // aggregation + calculator pipeline the console uses.
                    let input = seed_payroll_input(emp, self.ledger, year, month, self.config);
                    let result = compute(&input, self.config.extra_pay_policy);
                    SalaryExpenditureRow {
                        employee_name: emp.name.clone(),
                        base_salary: emp.salary,
                        leaves: input.leave_days,
                        payable_days: result.payable_days,
                        extra_pay: result.extra_pay,
                        total_payout: result.final_total,
                        status: PayoutStatus::Estimated,
                    }
                }
            })
            .collect()
    }

    fn leave_pattern(&self, year: i32, month: u32) -> Vec<LeavePatternRow> {
        self.roster
            .list()
            .iter()
            .map(|emp| {
                let leaves = monthly_activity(self.ledger, &emp.id, year, month).leave_days();
                let status = if leaves > 4.0 {
                    LeavePatternFlag::HighAbsenteeism
                } else if leaves > 2.0 {
                    LeavePatternFlag::Moderate
                } else {
                    LeavePatternFlag::Regular
                };
                LeavePatternRow {
                    employee_name: emp.name.clone(),
                    total_leaves: leaves,
                    status,
                }
            })
            .collect()
    }

    fn staff_ledger(&self, year: i32, month: u32) -> Vec<StaffLedgerRow> {
        self.roster
            .list()
            .iter()
            .map(|emp| match self.payroll.get(year, month, &emp.id) {
                Some(confirmed) => StaffLedgerRow {
                    employee_name: emp.name.clone(),
                    monthly_base: confirmed.input.monthly_salary,
                    leaves: Some(confirmed.input.leave_days),
                    extra_days: Some(confirmed.result.extra_days),
                    final_disbursement: Some(confirmed.result.final_total),
                    reference: LedgerRef::LockedLedger,
                },
                None => StaffLedgerRow {
                    employee_name: emp.name.clone(),
                    monthly_base: emp.salary,
                    leaves: None,
                    extra_days: None,
                    final_disbursement: None,
                    reference: LedgerRef::Draft,
                },
            })
            .collect()
    }

    fn tax_liability(&self) -> Vec<TaxLiabilityRow> {
        let total_base = self.roster.total_base_salary();
        let row = |category: &str, rate_label: &str, rate: f64| TaxLiabilityRow {
            category: category.to_string(),
            rate: rate_label.to_string(),
            amount: total_base * rate,
        };
        vec![
            row("Professional Tax", "2%", PROFESSIONAL_TAX_RATE),
            row("Employer PF", "12%", EMPLOYER_PF_RATE),
            row("Service Tax", "18%", SERVICE_TAX_RATE),
            row(
                "Total Liability",
                "Total",
                PROFESSIONAL_TAX_RATE + EMPLOYER_PF_RATE + SERVICE_TAX_RATE,
            ),
        ]
    }
}
