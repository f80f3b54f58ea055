pub mod aggregate;
pub mod calculator;
pub mod calendar;
pub mod reports;
