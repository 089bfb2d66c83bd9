#![no_std]

pub static ERROR_UNAUTHORIZED: &[u8] = b"Caller is not authorized.";

pub static ERROR_MARKET_NOT_LISTED: &[u8] = b"Market is not listed.";

pub static ERROR_MARKET_ALREADY_LISTED: &[u8] = b"Market already listed.";

pub static ERROR_INVALID_MARKET: &[u8] = b"Market is not bound to this controller.";

pub static ERROR_INVALID_COLLATERAL_FACTOR: &[u8] =
    b"Invalid collateral factor, it must be lower than 100%.";

pub static ERROR_INVALID_RESERVE_FACTOR: &[u8] =
    b"Invalid reserve factor, it must not exceed 100%.";

pub static ERROR_INVALID_CLOSE_FACTOR: &[u8] =
    b"Invalid close factor, it must be above 0% and at most 100%.";

pub static ERROR_INVALID_LIQUIDATION_INCENTIVE: &[u8] =
    b"Invalid liquidation incentive, it must be between 100% and 150%.";

pub static ERROR_INVALID_MAX_ENTERED_MARKETS: &[u8] = b"Invalid max entered markets.";

pub static ERROR_INVALID_KINK: &[u8] = b"Invalid kink, it must not exceed 100%.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset identifier.";

pub static ERROR_INVALID_PRICE: &[u8] = b"Invalid price, it must be greater than zero.";

pub static ERROR_UNKNOWN_ASSET: &[u8] = b"No price set for this asset.";

pub static ERROR_PRICE_ORACLE_NOT_SET: &[u8] = b"Price oracle not set.";

pub static ERROR_ORACLE_PAUSED: &[u8] = b"Price oracle is paused.";

pub static ERROR_TRANSFER_FAILED: &[u8] = b"Transfer failed, invalid payment asset.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Insufficient account liquidity.";

pub static ERROR_INSUFFICIENT_CASH: &[u8] = b"Insufficient cash in the market.";

pub static ERROR_INSUFFICIENT_RESERVES: &[u8] = b"Insufficient reserves.";

pub static ERROR_REDEEM_EXCEEDS_BALANCE: &[u8] = b"Redeem amount exceeds supply balance.";

pub static ERROR_NO_BORROW_TO_REPAY: &[u8] = b"Account has no borrow to repay.";

pub static ERROR_BORROWER_NOT_UNDERWATER: &[u8] = b"Borrower is not underwater.";

pub static ERROR_TOO_MUCH_REPAY: &[u8] = b"Repay amount exceeds the close factor.";

pub static ERROR_LIQUIDATOR_IS_BORROWER: &[u8] = b"Liquidator cannot be the borrower.";

pub static ERROR_SEIZE_TOO_MUCH: &[u8] = b"Seize amount exceeds borrower collateral.";

pub static ERROR_CALLER_NOT_MARKET: &[u8] = b"Caller is not a listed market.";

pub static ERROR_EXIT_WITH_BORROW: &[u8] = b"Cannot exit a market with an outstanding borrow.";

pub static ERROR_TOO_MANY_MARKETS: &[u8] = b"Too many entered markets.";
