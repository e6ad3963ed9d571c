use crate::domain::props::AccountId;

/// The current state of the transfer form, one field per input.
/// Destination and amount stay raw text because they mirror what the user
/// typed; parsing happens inside the rules. Edits produce a new value,
/// the draft itself is never mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferDraft {
    pub from_account_id: Option<AccountId>,
    pub to_account_number: String,
    pub amount: String,
    pub description: String,
}

impl TransferDraft {
    pub fn with_from_account(self, id: AccountId) -> Self {
        TransferDraft {
            from_account_id: Some(id),
            ..self
        }
    }

    pub fn with_destination(self, input: impl Into<String>) -> Self {
        TransferDraft {
            to_account_number: input.into(),
            ..self
        }
    }

    pub fn with_amount(self, input: impl Into<String>) -> Self {
        TransferDraft {
            amount: input.into(),
            ..self
        }
    }

    pub fn with_description(self, input: impl Into<String>) -> Self {
        TransferDraft {
            description: input.into(),
            ..self
        }
    }
}
