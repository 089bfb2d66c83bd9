multiversx_sc::imports!();

use crate::storage;
use crate::utils;
use common_constants::{MAX_LIQUIDATION_INCENTIVE, WAD};
use common_errors::*;
use common_structs::MarketConfig;

/// Admin configuration of the controller.
///
/// Covers the listed markets and their collateral factors, the price oracle
/// and the liquidation parameters. Every endpoint checks the caller against
/// the stored admin.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + utils::UtilsModule
    + common_access::AccessModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    /// Lists a market with a zero collateral factor.
    ///
    /// # Errors
    /// - `ERROR_MARKET_ALREADY_LISTED`: The market is listed already.
    /// - `ERROR_INVALID_MARKET`: The market is not bound to this controller.
    #[endpoint(supportMarket)]
    fn support_market(&self, market: ManagedAddress) {
        self.caller_as_admin();
        require!(!self.markets().contains(&market), ERROR_MARKET_ALREADY_LISTED);

        let controller_mapper = self.market_controller(market.clone());
        require!(
            !controller_mapper.is_empty()
                && controller_mapper.get() == self.blockchain().get_sc_address(),
            ERROR_INVALID_MARKET
        );

        self.markets().insert(market.clone());
        self.market_config(&market).set(MarketConfig {
            collateral_factor: self.wad_zero(),
        });

        let params = self.market_params(market.clone()).get();
        self.market_listed_event(&market, &params.asset_id);
    }

    /// Sets the share of a market's supply value counted as collateral.
    ///
    /// # Arguments
    /// - `market`: A listed market.
    /// - `collateral_factor`: WAD, strictly below one.
    #[endpoint(setCollateralFactor)]
    fn set_collateral_factor(&self, market: ManagedAddress, collateral_factor: BigUint) {
        self.caller_as_admin();
        self.require_listed(&market);
        require!(
            collateral_factor < BigUint::from(WAD),
            ERROR_INVALID_COLLATERAL_FACTOR
        );

        let new_factor = self.to_decimal_wad(collateral_factor);
        let old_config = self.market_config(&market).get();
        self.market_config(&market).set(MarketConfig {
            collateral_factor: new_factor.clone(),
        });

        self.new_collateral_factor_event(&market, &old_config.collateral_factor, &new_factor);
    }

    #[endpoint(setPriceOracle)]
    fn set_price_oracle(&self, price_oracle: ManagedAddress) {
        self.caller_as_admin();

        let mapper = self.price_oracle();
        let old_oracle = if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        };
        mapper.set(&price_oracle);

        self.new_price_oracle_event(old_oracle.as_ref(), &price_oracle);
    }

    /// Accepts a close factor (WAD) above zero and up to one.
    #[endpoint(setCloseFactor)]
    fn set_close_factor(&self, close_factor: BigUint) {
        self.caller_as_admin();
        require!(
            close_factor > 0 && close_factor <= BigUint::from(WAD),
            ERROR_INVALID_CLOSE_FACTOR
        );

        let close_factor = self.to_decimal_wad(close_factor);
        self.close_factor().set(&close_factor);
        self.new_close_factor_event(&close_factor);
    }

    /// Accepts a liquidation incentive (WAD) between one and 1.5.
    #[endpoint(setLiquidationIncentive)]
    fn set_liquidation_incentive(&self, liquidation_incentive: BigUint) {
        self.caller_as_admin();
        require!(
            liquidation_incentive >= BigUint::from(WAD)
                && liquidation_incentive <= BigUint::from(MAX_LIQUIDATION_INCENTIVE),
            ERROR_INVALID_LIQUIDATION_INCENTIVE
        );

        let liquidation_incentive = self.to_decimal_wad(liquidation_incentive);
        self.liquidation_incentive().set(&liquidation_incentive);
        self.new_liquidation_incentive_event(&liquidation_incentive);
    }

    #[endpoint(setMaxEnteredMarkets)]
    fn set_max_entered_markets(&self, max_entered_markets: usize) {
        self.caller_as_admin();
        require!(max_entered_markets > 0, ERROR_INVALID_MAX_ENTERED_MARKETS);

        self.max_entered_markets().set(max_entered_markets);
    }
}
