pub mod attendance;
pub mod employee;
pub mod payroll;

pub use attendance::AttendanceLedger;
pub use employee::EmployeeRoster;
pub use payroll::PayrollBook;
