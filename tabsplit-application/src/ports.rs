use crate::error::ExpenseStoreError;
use tabsplit_domain::{ExpenseId, ExpenseRecord};

/// Supplies the full, current expense collection.
pub trait ExpenseSource: Send + Sync {
    fn load_expenses(&self) -> Result<Vec<ExpenseRecord>, ExpenseStoreError>;
}

pub trait ExpenseStore: ExpenseSource {
    fn add_expense(&self, record: ExpenseRecord) -> Result<(), ExpenseStoreError>;

    /// Returns `false` when no record had the given id.
    fn remove_expense(&self, id: &ExpenseId) -> Result<bool, ExpenseStoreError>;

    fn clear_expenses(&self) -> Result<(), ExpenseStoreError>;
}

impl ExpenseSource for Vec<ExpenseRecord> {
    fn load_expenses(&self) -> Result<Vec<ExpenseRecord>, ExpenseStoreError> {
        Ok(self.clone())
    }
}
