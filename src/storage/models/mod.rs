pub mod attendance;
pub mod employee;
pub mod payroll;
pub mod stats;

pub(crate) mod macros;

// Re-export all models for easy importing
pub use attendance::*;
pub use employee::*;
pub use payroll::*;
pub use stats::*;
