#![no_std]

use common_constants::WAD_PRECISION;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Immutable parameters of one lending market.
///
/// `reserve_factor` is WAD scaled and may be changed by the market admin,
/// everything else is fixed at deployment except the rate model address.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketParams<M: ManagedTypeApi> {
    pub asset_id: EgldOrEsdtTokenIdentifier<M>,
    pub asset_decimals: usize,
    pub reserve_factor: ManagedDecimal<M, NumDecimals>,
    pub interest_rate_model: ManagedAddress<M>,
}

/// Per-second rate curve of an interest rate model, every field in RAY.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct RateModelParams<M: ManagedTypeApi> {
    pub base_rate: ManagedDecimal<M, NumDecimals>,
    pub multiplier: ManagedDecimal<M, NumDecimals>,
    pub jump_multiplier: ManagedDecimal<M, NumDecimals>,
    pub kink: ManagedDecimal<M, NumDecimals>,
}

/// Accrual multipliers of a market at a given moment.
///
/// Scaled balances are converted into underlying amounts by multiplying
/// with the matching index. Both indexes start at one RAY and never decrease.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketIndex<M: ManagedTypeApi> {
    pub supply_index: ManagedDecimal<M, NumDecimals>,
    pub borrow_index: ManagedDecimal<M, NumDecimals>,
}

/// Balances of one account inside one market, both scaled and expressed in
/// the asset decimals. A position with both balances at zero is not stored.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountPosition<M: ManagedTypeApi> {
    pub supply_tokens: ManagedDecimal<M, NumDecimals>,
    pub borrow_scaled: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> AccountPosition<M> {
    pub fn new(asset_decimals: usize) -> Self {
        AccountPosition {
            supply_tokens: ManagedDecimal::from_raw_units(BigUint::zero(), asset_decimals),
            borrow_scaled: ManagedDecimal::from_raw_units(BigUint::zero(), asset_decimals),
        }
    }

    pub fn has_supply(&self) -> bool {
        self.supply_tokens.into_raw_units() > &BigUint::zero()
    }

    pub fn has_borrow(&self) -> bool {
        self.borrow_scaled.into_raw_units() > &BigUint::zero()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_supply() && !self.has_borrow()
    }
}

/// Current view of an account inside a market, as returned by the market.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountSnapshot<M: ManagedTypeApi> {
    pub supply_tokens: ManagedDecimal<M, NumDecimals>,
    pub supply_underlying: ManagedDecimal<M, NumDecimals>,
    pub borrow_balance: ManagedDecimal<M, NumDecimals>,
    pub supply_index: ManagedDecimal<M, NumDecimals>,
    pub borrow_index: ManagedDecimal<M, NumDecimals>,
}

/// Market state as seen by the controller during one call: the market
/// parameters together with its indexes brought forward to the current
/// timestamp.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketSnapshot<M: ManagedTypeApi> {
    pub params: MarketParams<M>,
    pub index: MarketIndex<M>,
}

/// Risk configuration the controller keeps for each listed market.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketConfig<M: ManagedTypeApi> {
    pub collateral_factor: ManagedDecimal<M, NumDecimals>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug, PartialEq, Eq)]
pub struct TimestampedPrice<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
}

/// Risk-adjusted collateral and debt of an account, both in WAD.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct AccountLiquidity<M: ManagedTypeApi> {
    pub collateral_value: ManagedDecimal<M, NumDecimals>,
    pub debt_value: ManagedDecimal<M, NumDecimals>,
}

impl<M: ManagedTypeApi> AccountLiquidity<M> {
    pub fn new() -> Self {
        AccountLiquidity {
            collateral_value: ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION),
            debt_value: ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION),
        }
    }

    /// `max(0, collateral - debt)`
    pub fn liquidity(&self) -> ManagedDecimal<M, NumDecimals> {
        if self.collateral_value > self.debt_value {
            self.collateral_value.clone() - self.debt_value.clone()
        } else {
            ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION)
        }
    }

    /// `max(0, debt - collateral)`
    pub fn shortfall(&self) -> ManagedDecimal<M, NumDecimals> {
        if self.debt_value > self.collateral_value {
            self.debt_value.clone() - self.collateral_value.clone()
        } else {
            ManagedDecimal::from_raw_units(BigUint::zero(), WAD_PRECISION)
        }
    }

    pub fn has_shortfall(&self) -> bool {
        self.debt_value > self.collateral_value
    }
}

impl<M: ManagedTypeApi> Default for AccountLiquidity<M> {
    fn default() -> Self {
        Self::new()
    }
}
