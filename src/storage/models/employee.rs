use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String, // stable string id, assigned by the roster
    pub name: String,
    pub role: Role,
    pub salary: f64, // monthly base
    pub status: EmployeeStatus,
    pub join_date: NaiveDate,
}

/// Fields supplied when registering or editing an employee; the roster owns
/// id assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: String,
    pub role: Role,
    pub salary: f64,
    pub status: EmployeeStatus,
    pub join_date: NaiveDate,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Role {
        Barista => "Barista",
        Chef => "Chef",
        Waiter => "Waiter",
        Manager => "Manager",
        Cleaner => "Cleaner",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum EmployeeStatus {
        Active => "Active",
        Inactive => "Inactive",
    }
}
