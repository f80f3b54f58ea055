use chrono::{Datelike, NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::services::calendar::validate_month;
use crate::storage::kv::{CONFIRMED_PAYROLLS_KEY, KeyValueStore, LOCKED_PAYROLLS_KEY};
use crate::storage::models::{ConfirmedPayroll, PayrollInput, PayrollResult};

/// Finalized payroll computations keyed by `"{year}-{month}-{employee_id}"`,
/// plus the month-level lock map. Confirmed entries take precedence over
/// recomputation; a locked month refuses further mutation.
#[derive(Clone)]
pub struct PayrollBook {
    store: Arc<dyn KeyValueStore>,
    confirmed: HashMap<String, ConfirmedPayroll>,
    locked: HashMap<String, bool>,
}

pub fn month_key(year: i32, month: u32) -> String {
    format!("{year}-{month}")
}

pub fn entry_key(year: i32, month: u32, employee_id: &str) -> String {
    format!("{year}-{month}-{employee_id}")
}

impl PayrollBook {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let confirmed = match store.get(CONFIRMED_PAYROLLS_KEY)? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => HashMap::new(),
        };
        let locked = match store.get(LOCKED_PAYROLLS_KEY)? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => HashMap::new(),
        };
        Ok(PayrollBook {
            store,
            confirmed,
            locked,
        })
    }

    pub fn get(&self, year: i32, month: u32, employee_id: &str) -> Option<&ConfirmedPayroll> {
        self.confirmed.get(&entry_key(year, month, employee_id))
    }

    pub fn is_locked(&self, year: i32, month: u32) -> bool {
        self.locked
            .get(&month_key(year, month))
            .copied()
            .unwrap_or(false)
    }

    /// Write (or overwrite) the confirmed payroll for the key with a fresh
    /// `confirmed_at` timestamp. Rejected without mutation when the month is
    /// locked.
    pub fn confirm(
        &mut self,
        year: i32,
        month: u32,
        employee_id: &str,
        input: PayrollInput,
        result: PayrollResult,
    ) -> Result<ConfirmedPayroll> {
        validate_month(month)?;
        if self.is_locked(year, month) {
            return Err(AppError::policy_denied(format!(
                "payroll for {} is locked",
                month_key(year, month)
            )));
        }

        let entry = ConfirmedPayroll {
            input,
            result,
            confirmed_at: Utc::now(),
        };
        log::info!(
            "Confirmed payroll {} (final total {:.2})",
            entry_key(year, month, employee_id),
            entry.result.final_total
        );
        self.confirmed
            .insert(entry_key(year, month, employee_id), entry.clone());
        self.save_confirmed()?;
        Ok(entry)
    }

    /// Permanently lock a fully elapsed month against payroll edits. The
    /// current calendar month (or anything later, relative to `today`) is
    /// refused.
    pub fn lock_month(&mut self, year: i32, month: u32, today: NaiveDate) -> Result<()> {
        validate_month(month)?;
        if (year, month) >= (today.year(), today.month()) {
            return Err(AppError::policy_denied(format!(
                "cannot lock {}: month has not fully elapsed",
                month_key(year, month)
            )));
        }

        log::info!("Locking payroll month {}", month_key(year, month));
        self.locked.insert(month_key(year, month), true);
        self.save_locked()?;
        Ok(())
    }

    fn save_confirmed(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.confirmed)?;
        self.store.put(CONFIRMED_PAYROLLS_KEY, &blob)?;
        Ok(())
    }

    fn save_locked(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.locked)?;
        self.store.put(LOCKED_PAYROLLS_KEY, &blob)?;
        Ok(())
    }
}
