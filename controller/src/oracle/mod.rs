multiversx_sc::imports!();

use common_constants::WAD_PRECISION;
use common_errors::{ERROR_ORACLE_PAUSED, ERROR_PRICE_ORACLE_NOT_SET, ERROR_UNKNOWN_ASSET};
use common_structs::{MarketIndex, MarketSnapshot};

use crate::storage;

#[multiversx_sc::module]
pub trait OracleModule:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    /// Reads the WAD price of `asset` straight from the oracle storage.
    ///
    /// # Errors
    /// - `ERROR_PRICE_ORACLE_NOT_SET`: No oracle was configured.
    /// - `ERROR_ORACLE_PAUSED`: The oracle is paused.
    /// - `ERROR_UNKNOWN_ASSET`: The oracle never priced the asset.
    fn get_asset_price(
        &self,
        price_oracle: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        require!(!price_oracle.is_zero(), ERROR_PRICE_ORACLE_NOT_SET);
        require!(
            !self.oracle_paused_state(price_oracle.clone()).get(),
            ERROR_ORACLE_PAUSED
        );

        let feed = self.oracle_prices(price_oracle.clone(), asset.clone());
        require!(!feed.is_empty(), ERROR_UNKNOWN_ASSET);

        self.to_decimal(feed.get().price, WAD_PRECISION)
    }

    /// Brings the indexes of a market forward to `timestamp` without
    /// touching the market.
    ///
    /// Uses the stored market state and the rate curve of its model, the
    /// same inputs the market accrues with, so both always agree.
    fn simulate_market(&self, market: &ManagedAddress, timestamp: u64) -> MarketSnapshot<Self::Api> {
        let params = self.market_params(market.clone()).get();
        let last_timestamp = self.market_last_timestamp(market.clone()).get();
        let index = MarketIndex {
            supply_index: self.market_supply_index(market.clone()).get(),
            borrow_index: self.market_borrow_index(market.clone()).get(),
        };

        if timestamp <= last_timestamp {
            return MarketSnapshot { params, index };
        }

        let supplied = self.market_supplied(market.clone()).get();
        let borrowed = self.market_borrowed(market.clone()).get();
        let cash = self.market_cash(market.clone()).get();
        let reserves = self.market_reserves(market.clone()).get();

        let total_borrows =
            self.scaled_to_original(&borrowed, &index.borrow_index, params.asset_decimals);
        let utilization = self.calc_utilization(
            cash.into_raw_units(),
            total_borrows.into_raw_units(),
            reserves.into_raw_units(),
        );
        let rate_params = self
            .model_rate_params(params.interest_rate_model.clone())
            .get();
        let borrow_rate = self.calc_borrow_rate(&utilization, &rate_params);

        let (index, _) = self.accrue_indexes(
            &index,
            &supplied,
            &borrowed,
            &borrow_rate,
            &params.reserve_factor,
            params.asset_decimals,
            timestamp - last_timestamp,
        );

        MarketSnapshot { params, index }
    }
}
