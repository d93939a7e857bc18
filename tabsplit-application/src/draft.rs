use crate::error::DraftError;
use chrono::{DateTime, Utc};
use tabsplit_domain::{ExpenseId, ExpenseRecord, Money, PersonId, ReceiptRef};
use uuid::Uuid;

/// Raw expense input as typed by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub payer: String,
    /// Comma separated participant names.
    pub participants: String,
    pub receipt: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftPolicy {
    pub require_receipt: bool,
}

/// Splits comma separated names, trimming each and dropping empty entries.
///
/// Repeated names are kept; each one is a separate share.
pub fn parse_participants(input: &str) -> Vec<PersonId> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(PersonId::from)
        .collect()
}

impl ExpenseDraft {
    /// Validates the draft and stamps it with a fresh id and the current time.
    pub fn submit(self, policy: DraftPolicy) -> Result<ExpenseRecord, DraftError> {
        self.into_record(ExpenseId::new(Uuid::new_v4().to_string()), Utc::now(), policy)
    }

    pub fn into_record(
        self,
        id: ExpenseId,
        created_at: DateTime<Utc>,
        policy: DraftPolicy,
    ) -> Result<ExpenseRecord, DraftError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DraftError::MissingDescription);
        }

        let amount = self
            .amount
            .parse::<Money>()
            .ok()
            .filter(|amount| amount.is_positive())
            .ok_or_else(|| DraftError::InvalidAmount(self.amount.trim().to_owned()))?;

        let payer = self.payer.trim();
        if payer.is_empty() {
            return Err(DraftError::MissingPayer);
        }

        let participants = parse_participants(&self.participants);
        if participants.is_empty() {
            return Err(DraftError::MissingParticipants);
        }

        let receipt = self
            .receipt
            .as_deref()
            .map(str::trim)
            .filter(|reference| !reference.is_empty())
            .map(ReceiptRef::new);
        if policy.require_receipt && receipt.is_none() {
            return Err(DraftError::MissingReceipt);
        }

        let record = ExpenseRecord::new(id, description, amount, payer, participants, created_at);
        Ok(match receipt {
            Some(receipt) => record.with_receipt(receipt),
            None => record,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    fn groceries() -> ExpenseDraft {
        ExpenseDraft {
            description: "  Groceries ".to_owned(),
            amount: "42.50".to_owned(),
            payer: " Ana ".to_owned(),
            participants: "Ana, Luis ,, Marta,".to_owned(),
            receipt: Some("content://receipts/1.jpg".to_owned()),
        }
    }

    #[fixture]
    fn draft() -> ExpenseDraft {
        groceries()
    }

    #[rstest]
    #[case::plain("A,B,C", &["A", "B", "C"])]
    #[case::spaces_and_blanks(" A , ,B,  ", &["A", "B"])]
    #[case::duplicates("A, A, B", &["A", "A", "B"])]
    #[case::empty("", &[])]
    #[case::only_commas(",,,", &[])]
    fn parses_participant_list(#[case] input: &str, #[case] expected: &[&str]) {
        let names: Vec<String> = parse_participants(input)
            .into_iter()
            .map(|person| person.to_string())
            .collect();
        assert_eq!(names, expected);
    }

    #[rstest]
    fn builds_trimmed_record(draft: ExpenseDraft) {
        let created_at = Utc.with_ymd_and_hms(2024, 2, 14, 20, 0, 0).unwrap();

        let record = draft
            .into_record(ExpenseId::from("g-1"), created_at, DraftPolicy::default())
            .unwrap();

        assert_eq!(record.description, "Groceries");
        assert_eq!(record.amount, Money::new(4250, 2));
        assert_eq!(record.payer.as_str(), "Ana");
        assert_eq!(
            record.participants,
            vec![PersonId::from("Ana"), PersonId::from("Luis"), PersonId::from("Marta")]
        );
        assert_eq!(
            record.receipt.as_ref().map(ReceiptRef::as_str),
            Some("content://receipts/1.jpg")
        );
        assert_eq!(record.created_at, created_at);
    }

    #[rstest]
    #[case::blank_description(ExpenseDraft { description: "   ".to_owned(), ..groceries() }, DraftError::MissingDescription)]
    #[case::unparsable_amount(ExpenseDraft { amount: "abc".to_owned(), ..groceries() }, DraftError::InvalidAmount("abc".to_owned()))]
    #[case::zero_amount(ExpenseDraft { amount: "0".to_owned(), ..groceries() }, DraftError::InvalidAmount("0".to_owned()))]
    #[case::negative_amount(ExpenseDraft { amount: "-3".to_owned(), ..groceries() }, DraftError::InvalidAmount("-3".to_owned()))]
    #[case::blank_payer(ExpenseDraft { payer: String::new(), ..groceries() }, DraftError::MissingPayer)]
    #[case::no_participants(ExpenseDraft { participants: " , ".to_owned(), ..groceries() }, DraftError::MissingParticipants)]
    fn rejects_invalid_drafts(#[case] draft: ExpenseDraft, #[case] expected: DraftError) {
        let result = draft.into_record(ExpenseId::from("x"), Utc::now(), DraftPolicy::default());
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    #[case::required_and_missing(true, None, Err(DraftError::MissingReceipt))]
    #[case::required_and_blank(true, Some("  "), Err(DraftError::MissingReceipt))]
    #[case::optional_and_missing(false, None, Ok(()))]
    #[case::required_and_present(true, Some("file:///r.png"), Ok(()))]
    fn receipt_policy(
        draft: ExpenseDraft,
        #[case] require_receipt: bool,
        #[case] receipt: Option<&str>,
        #[case] expected: Result<(), DraftError>,
    ) {
        let draft = ExpenseDraft {
            receipt: receipt.map(str::to_owned),
            ..draft
        };

        let result = draft
            .into_record(ExpenseId::from("x"), Utc::now(), DraftPolicy { require_receipt })
            .map(|_| ());

        assert_eq!(result, expected);
    }

    #[rstest]
    fn submit_assigns_unique_ids(draft: ExpenseDraft) {
        let first = draft.clone().submit(DraftPolicy::default()).unwrap();
        let second = draft.submit(DraftPolicy::default()).unwrap();

        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(first.id.as_str()).is_ok());
    }
}
