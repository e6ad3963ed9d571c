pub mod confirm;
pub mod format;
