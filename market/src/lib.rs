#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod cache;
pub mod config;
pub mod liquidation;
pub mod liquidity;
pub mod storage;
pub mod utils;
pub mod view;
pub use common_events::*;

use common_constants::WAD;
use common_errors::{ERROR_INVALID_ASSET, ERROR_INVALID_RESERVE_FACTOR};

#[multiversx_sc::contract]
pub trait Market:
    storage::Storage
    + common_events::EventsModule
    + common_access::AccessModule
    + common_rates::InterestRates
    + common_math::SharedMathModule
    + config::ConfigModule
    + liquidity::LiquidityModule
    + liquidation::LiquidationModule
    + utils::UtilsModule
    + view::ViewModule
{
    /// Initializes a market for a single underlying asset.
    ///
    /// **Process**:
    /// 1. Validates the asset and the reserve factor.
    /// 2. Makes the deployer the admin and binds the market to `controller`.
    /// 3. Sets both indexes to one RAY and all totals to zero.
    /// 4. Records the current timestamp as the last accrual.
    ///
    /// ### Parameters
    /// - `asset`: The underlying token of the market.
    /// - `asset_decimals`: Decimals of the underlying token.
    /// - `controller`: The controller approving risky operations.
    /// - `interest_rate_model`: The contract quoting the borrow rate.
    /// - `reserve_factor`: Share of interest kept as reserves (WAD).
    #[init]
    fn init(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        asset_decimals: usize,
        controller: ManagedAddress,
        interest_rate_model: ManagedAddress,
        reserve_factor: BigUint,
    ) {
        require!(asset.is_valid(), ERROR_INVALID_ASSET);
        require!(reserve_factor <= BigUint::from(WAD), ERROR_INVALID_RESERVE_FACTOR);

        self.admin().set(self.blockchain().get_caller());
        self.controller().set(&controller);
        self.params().set(&MarketParams {
            asset_id: asset,
            asset_decimals,
            reserve_factor: self.to_decimal_wad(reserve_factor),
            interest_rate_model,
        });

        self.borrow_index().set(self.ray());
        self.supply_index().set(self.ray());

        let zero = self.zero_with(asset_decimals);
        self.supplied().set(&zero);
        self.borrowed().set(&zero);
        self.cash().set(&zero);
        self.reserves().set(&zero);

        self.last_timestamp()
            .set(self.blockchain().get_block_timestamp());
    }

    #[upgrade]
    fn upgrade(&self) {}
}
