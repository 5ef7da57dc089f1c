pub mod use_statistics;
pub mod use_transactions;

pub use use_statistics::use_statistics;
pub use use_transactions::use_transactions;
