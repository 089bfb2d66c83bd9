pub mod account;
pub mod liquidation;
