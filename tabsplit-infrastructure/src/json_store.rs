use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tabsplit_application::{ExpenseSource, ExpenseStore, ExpenseStoreError};
use tabsplit_domain::{ExpenseId, ExpenseRecord};

/// Expense collection persisted as a JSON array in a single file.
///
/// A missing or blank file reads as an empty collection. Writes go to a
/// sibling temp file that is then renamed over the original.
#[derive(Debug)]
pub struct JsonExpenseStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonExpenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling of the store file with `.tmp` appended to its full name.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> ExpenseStoreError {
        ExpenseStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, err: serde_json::Error) -> ExpenseStoreError {
        ExpenseStoreError::Corrupt {
            path: self.path.clone(),
            detail: err.to_string(),
        }
    }

    fn read_all(&self) -> Result<Vec<ExpenseRecord>, ExpenseStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(self.io_error(err)),
        };
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&contents).map_err(|err| {
            tracing::error!(
                path = %self.path.display(),
                error = %err,
                "Expense store contents could not be parsed"
            );
            self.corrupt(err)
        })
    }

    fn write_all(&self, records: &[ExpenseRecord]) -> Result<(), ExpenseStoreError> {
        let json = serde_json::to_string_pretty(records).map_err(|err| self.corrupt(err))?;

        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let staging = self.staging_path();
        fs::write(&staging, json).map_err(|err| self.io_error(err))?;
        if let Err(err) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(self.io_error(err));
        }

        tracing::debug!(
            path = %self.path.display(),
            record_count = records.len(),
            "Expense store written"
        );
        Ok(())
    }

    fn modify<T>(
        &self,
        update: impl FnOnce(&mut Vec<ExpenseRecord>) -> T,
    ) -> Result<T, ExpenseStoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ExpenseStoreError::Poisoned)?;
        let mut records = self.read_all()?;
        let outcome = update(&mut records);
        self.write_all(&records)?;
        Ok(outcome)
    }
}

impl ExpenseSource for JsonExpenseStore {
    fn load_expenses(&self) -> Result<Vec<ExpenseRecord>, ExpenseStoreError> {
        self.read_all()
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn add_expense(&self, record: ExpenseRecord) -> Result<(), ExpenseStoreError> {
        self.modify(|records| records.push(record))
    }

    fn remove_expense(&self, id: &ExpenseId) -> Result<bool, ExpenseStoreError> {
        self.modify(|records| {
            let before = records.len();
            records.retain(|record| record.id != *id);
            records.len() != before
        })
    }

    fn clear_expenses(&self) -> Result<(), ExpenseStoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ExpenseStoreError::Poisoned)?;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};
    use tabsplit_domain::{Money, ReceiptRef};
    use tempfile::TempDir;

    #[fixture]
    fn dir() -> TempDir {
        tempfile::tempdir().expect("tempdir")
    }

    fn expense(id: &str, amount: i64) -> ExpenseRecord {
        ExpenseRecord::new(
            id,
            format!("expense {id}"),
            Money::from_i64(amount),
            "A",
            ["A", "B", "C"],
            Utc.with_ymd_and_hms(2024, 8, 1, 19, 30, 0).unwrap(),
        )
    }

    #[rstest]
    fn missing_file_reads_as_empty(dir: TempDir) {
        let store = JsonExpenseStore::new(dir.path().join("expenses.json"));

        assert!(store.load_expenses().unwrap().is_empty());
    }

    #[rstest]
    fn persists_records_across_instances(dir: TempDir) {
        let path = dir.path().join("nested").join("expenses.json");
        let store = JsonExpenseStore::new(&path);
        let with_receipt = expense("2", 45).with_receipt(ReceiptRef::new("file:///r/2.jpg"));

        store.add_expense(expense("1", 90)).unwrap();
        store.add_expense(with_receipt.clone()).unwrap();

        let reopened = JsonExpenseStore::new(&path);
        assert_eq!(
            reopened.load_expenses().unwrap(),
            vec![expense("1", 90), with_receipt]
        );
        assert!(!reopened.staging_path().exists());
    }

    #[rstest]
    fn removes_by_id(dir: TempDir) {
        let store = JsonExpenseStore::new(dir.path().join("expenses.json"));
        store.add_expense(expense("1", 90)).unwrap();
        store.add_expense(expense("2", 30)).unwrap();

        assert!(store.remove_expense(&ExpenseId::from("1")).unwrap());
        assert!(!store.remove_expense(&ExpenseId::from("missing")).unwrap());

        assert_eq!(store.load_expenses().unwrap(), vec![expense("2", 30)]);
    }

    #[rstest]
    fn clear_removes_file(dir: TempDir) {
        let path = dir.path().join("expenses.json");
        let store = JsonExpenseStore::new(&path);
        store.add_expense(expense("1", 90)).unwrap();

        store.clear_expenses().unwrap();
        store.clear_expenses().unwrap();

        assert!(!path.exists());
        assert!(store.load_expenses().unwrap().is_empty());
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::wrong_shape(r#"{"id":"1"}"#)]
    fn corrupt_file_is_reported(dir: TempDir, #[case] contents: &str) {
        let path = dir.path().join("expenses.json");
        fs::write(&path, contents).unwrap();

        let err = JsonExpenseStore::new(&path).load_expenses().unwrap_err();

        assert!(matches!(err, ExpenseStoreError::Corrupt { .. }));
    }

    #[rstest]
    fn blank_file_reads_as_empty(dir: TempDir) {
        let path = dir.path().join("expenses.json");
        fs::write(&path, "  \n").unwrap();

        assert!(JsonExpenseStore::new(&path).load_expenses().unwrap().is_empty());
    }

    #[rstest]
    #[case::json("expenses.json", "expenses.json.tmp")]
    #[case::already_tmp("expenses.tmp", "expenses.tmp.tmp")]
    #[case::no_extension("expenses", "expenses.tmp")]
    fn staging_file_is_a_distinct_sibling(
        dir: TempDir,
        #[case] name: &str,
        #[case] staging: &str,
    ) {
        let store = JsonExpenseStore::new(dir.path().join(name));

        assert_eq!(store.staging_path(), dir.path().join(staging));

        store.add_expense(expense("1", 90)).unwrap();
        assert_eq!(store.load_expenses().unwrap(), vec![expense("1", 90)]);
        assert!(!store.staging_path().exists());
    }

    #[rstest]
    fn failed_rename_removes_staging_file(dir: TempDir) {
        let path = dir.path().join("expenses.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "").unwrap();
        let store = JsonExpenseStore::new(&path);

        let err = store.write_all(&[expense("1", 90)]).unwrap_err();

        assert!(matches!(err, ExpenseStoreError::Io { .. }));
        assert!(!store.staging_path().exists());
    }
}
