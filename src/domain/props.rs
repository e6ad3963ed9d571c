use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shrinkwraprs::Shrinkwrap;

#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Display, Hash)]
pub struct AccountId(pub String);

/// Exactly 12 ASCII digits, the bank's account number format.
/// Only constructible through [`AccountNumber::from_input`].
#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Display, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Strips whitespace from user input and accepts the result
    /// only if it is exactly 12 digits.
    pub fn from_input(input: &str) -> Option<Self> {
        let digits: String = input.chars().filter(|c| !c.is_whitespace()).collect();

        (digits.len() == 12 && digits.chars().all(|c| c.is_ascii_digit()))
            .then_some(AccountNumber(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Display, Hash)]
pub struct Amount(pub Decimal);

impl Amount {
    /// Parses a raw form field. `None` covers empty and malformed input,
    /// the range rules decide everything else.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<Decimal>().ok().map(Amount)
    }
}

// Non-blocking flags shared by the transfer and cashier rules.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum Advisory {
    #[display("High amount - please verify before confirming")]
    HighAmount,
    #[display("Large deposit - may require verification")]
    LargeDeposit,
    #[display("Substantial deposit amount")]
    SubstantialDeposit,
    #[display("Large withdrawal - confirm amount")]
    LargeWithdrawal,
}
