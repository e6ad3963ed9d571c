use derive_more::Display;

// Every failure here is a user-correctable input state, surfaced inline
// next to its field. The Display text is the inline message.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum RuleViolation {
    #[display("Select an account to transfer from")]
    MissingSelection,
    #[display("Account number must be exactly 12 digits")]
    MalformedNumber,
    #[display("Cannot transfer to the same account")]
    SelfTransfer,
    #[display("Enter a positive amount")]
    AmountNotPositive,
    #[display("Minimum transfer amount is Rs 1")]
    BelowMinimumUnit,
    #[display("Amount exceeds available balance")]
    InsufficientBalance,
    #[display("Amount exceeds daily limit of Rs 10,000")]
    ExceedsDailyLimit,
}

impl std::error::Error for RuleViolation {}
