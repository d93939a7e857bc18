use crate::{
    ledger_presenter::format_amount,
    text_table::{Alignment, TextTableBuilder},
};
use std::borrow::Cow;
use tabsplit_domain::ExpenseRecord;
use tabsplit_i18n as i18n;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct ExpensePresenter;

impl ExpensePresenter {
    /// One row per record in the given order, or a notice when there are none.
    pub fn render_list(records: &[ExpenseRecord], display_scale: u32) -> String {
        if records.is_empty() {
            return i18n::NO_EXPENSES.to_owned();
        }

        TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
                Alignment::Left,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::ID),
                Cow::Borrowed(i18n::DATE),
                Cow::Borrowed(i18n::DESCRIPTION),
                Cow::Borrowed(i18n::PAYER),
                Cow::Borrowed(i18n::PARTICIPANTS),
                Cow::Borrowed(i18n::AMOUNT),
            ])
            .rows(records.iter().map(|record| {
                [
                    Cow::Borrowed(record.id.as_str()),
                    Cow::Owned(record.created_at.format(DATE_FORMAT).to_string()),
                    Cow::Borrowed(record.description.as_str()),
                    Cow::Borrowed(record.payer.as_str()),
                    Cow::Owned(join_participants(record)),
                    Cow::Owned(format_amount(record.amount, display_scale)),
                ]
            }))
            .build()
    }
}

fn join_participants(record: &ExpenseRecord) -> String {
    record
        .participants
        .iter()
        .map(|person| person.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
