use crate::{
    error::StatisticsError,
    model::{ExpenseStatistics, PayerTotal},
};
use fxhash::FxHashSet;
use indexmap::IndexMap;
use tabsplit_domain::{ExpenseRecord, Money, PersonId};

impl ExpenseStatistics {
    pub fn from_records(records: &[ExpenseRecord]) -> Result<Self, StatisticsError> {
        let Some(first) = records.first() else {
            return Ok(Self::default());
        };

        let mut total_spent = Money::ZERO;
        let mut largest_expense = first.amount;
        let mut smallest_expense = first.amount;
        let mut people: FxHashSet<&PersonId> = FxHashSet::default();

        for record in records {
            total_spent = total_spent
                .checked_add(record.amount)
                .ok_or(StatisticsError::TotalOverflow)?;
            largest_expense = largest_expense.max(record.amount);
            smallest_expense = smallest_expense.min(record.amount);
            people.extend(record.involved_people());
        }

        Ok(Self {
            total_spent,
            expense_count: records.len(),
            average_expense: total_spent
                .checked_split(records.len())
                .unwrap_or(Money::ZERO),
            largest_expense,
            smallest_expense,
            person_count: people.len(),
        })
    }
}

/// Amount paid by each payer, largest first.
///
/// Payers with equal totals keep the order in which they first paid.
pub fn payer_totals(records: &[ExpenseRecord]) -> Result<Vec<PayerTotal>, StatisticsError> {
    let mut totals: IndexMap<&PersonId, Money> = IndexMap::new();
    for record in records {
        let total = totals.entry(&record.payer).or_insert(Money::ZERO);
        *total = total.checked_add(record.amount).ok_or_else(|| {
            StatisticsError::PayerTotalOverflow {
                payer: record.payer.clone(),
            }
        })?;
    }

    let mut totals: Vec<PayerTotal> = totals
        .into_iter()
        .map(|(payer, total)| PayerTotal {
            payer: payer.clone(),
            total,
        })
        .collect();
    totals.sort_by(|lhs, rhs| rhs.total.cmp(&lhs.total));
    Ok(totals)
}
