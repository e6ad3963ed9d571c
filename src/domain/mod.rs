pub mod account;
pub mod cashier;
pub mod props;
pub mod transfer;
