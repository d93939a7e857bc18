use tabsplit_application::{DraftError, ExpenseStoreError, LedgerError, StatisticsError};
use tabsplit_domain::ExpenseValidationError;

pub fn format_ledger_error(error: &LedgerError) -> String {
    match error {
        LedgerError::Source(source) => format_store_error(source),
        LedgerError::Validation(validation) => format!(
            "{}: {}",
            tabsplit_i18n::LEDGER_CALCULATION_FAILED,
            format_validation_error(validation)
        ),
        LedgerError::Statistics(statistics) => format!(
            "{}: {}",
            tabsplit_i18n::LEDGER_CALCULATION_FAILED,
            format_statistics_error(statistics)
        ),
    }
}

pub fn format_statistics_error(error: &StatisticsError) -> String {
    match error {
        StatisticsError::TotalOverflow => tabsplit_i18n::TOTAL_SPENT_OVERFLOW.to_owned(),
        StatisticsError::PayerTotalOverflow { payer } => tabsplit_i18n::paid_total_overflow(payer),
    }
}

pub fn format_store_error(error: &ExpenseStoreError) -> String {
    format!("{}: {error}", tabsplit_i18n::STORE_UNAVAILABLE)
}

pub fn format_validation_error(error: &ExpenseValidationError) -> String {
    match error {
        ExpenseValidationError::BalanceOverflow { person } => {
            tabsplit_i18n::balance_overflow(person)
        }
        other => match other.expense_id() {
            Some(expense_id) => {
                format!("{} ({other})", tabsplit_i18n::expense_rejected(expense_id))
            }
            None => other.to_string(),
        },
    }
}

pub fn format_draft_error(error: &DraftError) -> String {
    error.to_string()
}
