use rust_decimal::Decimal;

use crate::{
    domain::{account::AccountOption, props::AccountNumber},
    view::format,
};

const NO_DESCRIPTION: &str = "No description provided";

/// Read-only summary shown before the draft would be posted to the server.
/// Built from already-validated values; holds display text only, so the
/// rendering below stays decoupled from the rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationView {
    pub from: String,
    pub to: String,
    pub amount: String,
    pub description: String,
}

impl ConfirmationView {
    pub fn new(
        account: &AccountOption,
        destination: &AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Self {
        let from = match &account.number {
            Some(own) => format!("{} ({})", account.id, format::group_digits(own)),
            None => account.id.to_string(),
        };

        let description = description.trim();
        ConfirmationView {
            from,
            to: format::group_digits(destination),
            amount: format::rupees(amount),
            description: if description.is_empty() {
                NO_DESCRIPTION.to_owned()
            } else {
                description.to_owned()
            },
        }
    }

    pub fn render(&self) -> String {
        format!(
            "Transfer Confirmation\n  From:        {}\n  To:          {}\n  Amount:      {}\n  Description: {}",
            self.from, self.to, self.amount, self.description
        )
    }
}
