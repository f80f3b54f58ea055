pub mod kv;
pub mod models;
pub mod repositories;

pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use repositories::{AttendanceLedger, EmployeeRoster, PayrollBook};
