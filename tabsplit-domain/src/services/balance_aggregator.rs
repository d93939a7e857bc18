use crate::{
    error::ExpenseValidationError,
    model::{BalanceSheet, ExpenseRecord, Money, PersonBalance, PersonId},
};
use fxhash::FxHashMap;
use std::collections::BTreeMap;

/// Balance aggregation service
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Fold expense records into per-person balances
    ///
    /// Every payer and participant gets an entry, even when their net is zero.
    /// A participant entry equal to the payer is the payer's own share and is
    /// not transferred anywhere.
    ///
    /// # Arguments
    /// * `records` - Complete current expense collection
    ///
    /// # Returns
    /// Balance sheet keyed by person, or the first validation failure. Nothing
    /// is returned for a partially folded collection.
    pub fn aggregate<'r, I>(&self, records: I) -> Result<BalanceSheet, ExpenseValidationError>
    where
        I: IntoIterator<Item = &'r ExpenseRecord>,
    {
        let mut working: FxHashMap<PersonId, PersonBalance> = FxHashMap::default();
        let mut record_count = 0usize;

        for record in records {
            let share = record.share().inspect_err(|err| {
                tracing::warn!(
                    expense_id = %record.id,
                    participant_count = record.participants.len(),
                    amount = %record.amount,
                    reject_reason = %err,
                    "Expense record rejected during aggregation"
                );
            })?;

            for person in record.involved_people() {
                balance_entry(&mut working, person);
            }

            for participant in &record.participants {
                if *participant == record.payer {
                    continue;
                }

                let debtor = balance_entry(&mut working, participant);
                accumulate(&mut debtor.owes, &record.payer, share)
                    .ok_or_else(|| overflow(participant))?;

                let creditor = balance_entry(&mut working, &record.payer);
                accumulate(&mut creditor.owed_by, participant, share)
                    .ok_or_else(|| overflow(&record.payer))?;
            }

            record_count += 1;
        }

        for balance in working.values_mut() {
            let owed_by = checked_total(&balance.owed_by).ok_or_else(|| overflow(&balance.person))?;
            let owes = checked_total(&balance.owes).ok_or_else(|| overflow(&balance.person))?;
            balance.net = owed_by
                .checked_sub(owes)
                .ok_or_else(|| overflow(&balance.person))?;
        }

        let sheet: BalanceSheet = working.into_iter().collect();

        tracing::debug!(
            record_count,
            person_count = sheet.len(),
            "Aggregated expense records into balances"
        );

        Ok(sheet)
    }
}

fn balance_entry<'m>(
    working: &'m mut FxHashMap<PersonId, PersonBalance>,
    person: &PersonId,
) -> &'m mut PersonBalance {
    working
        .entry(person.clone())
        .or_insert_with(|| PersonBalance::new(person.clone()))
}

fn accumulate(
    ledger: &mut BTreeMap<PersonId, Money>,
    counterpart: &PersonId,
    share: Money,
) -> Option<()> {
    let slot = ledger.entry(counterpart.clone()).or_insert(Money::ZERO);
    *slot = slot.checked_add(share)?;
    Some(())
}

fn checked_total(ledger: &BTreeMap<PersonId, Money>) -> Option<Money> {
    ledger
        .values()
        .try_fold(Money::ZERO, |total, &amount| total.checked_add(amount))
}

fn overflow(person: &PersonId) -> ExpenseValidationError {
    ExpenseValidationError::BalanceOverflow {
        person: person.clone(),
    }
}
