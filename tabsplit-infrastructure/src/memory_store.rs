use std::sync::{Mutex, MutexGuard};
use tabsplit_application::{ExpenseSource, ExpenseStore, ExpenseStoreError};
use tabsplit_domain::{ExpenseId, ExpenseRecord};

#[derive(Debug, Default)]
pub struct InMemoryExpenseStore {
    records: Mutex<Vec<ExpenseRecord>>,
}

impl InMemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ExpenseRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<ExpenseRecord>>, ExpenseStoreError> {
        self.records.lock().map_err(|_| ExpenseStoreError::Poisoned)
    }
}

impl ExpenseSource for InMemoryExpenseStore {
    fn load_expenses(&self) -> Result<Vec<ExpenseRecord>, ExpenseStoreError> {
        Ok(self.lock()?.clone())
    }
}

impl ExpenseStore for InMemoryExpenseStore {
    fn add_expense(&self, record: ExpenseRecord) -> Result<(), ExpenseStoreError> {
        self.lock()?.push(record);
        Ok(())
    }

    fn remove_expense(&self, id: &ExpenseId) -> Result<bool, ExpenseStoreError> {
        let mut records = self.lock()?;
        let before = records.len();
        records.retain(|record| record.id != *id);
        Ok(records.len() != before)
    }

    fn clear_expenses(&self) -> Result<(), ExpenseStoreError> {
        self.lock()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use tabsplit_domain::Money;

    fn expense(id: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            id,
            "coffee",
            Money::new(350, 2),
            "A",
            ["A", "B"],
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        )
    }

    #[rstest]
    fn add_remove_clear_round_trip() {
        let store = InMemoryExpenseStore::new();
        store.add_expense(expense("1")).unwrap();
        store.add_expense(expense("2")).unwrap();

        assert!(store.remove_expense(&ExpenseId::from("1")).unwrap());
        assert!(!store.remove_expense(&ExpenseId::from("1")).unwrap());
        assert_eq!(store.load_expenses().unwrap(), vec![expense("2")]);

        store.clear_expenses().unwrap();
        assert!(store.load_expenses().unwrap().is_empty());
    }
}
