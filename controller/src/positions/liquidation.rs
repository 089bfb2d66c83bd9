use common_constants::WAD_PRECISION;
use common_errors::{ERROR_BORROWER_NOT_UNDERWATER, ERROR_LIQUIDATOR_IS_BORROWER, ERROR_TOO_MUCH_REPAY};

use crate::{cache::Cache, liquidity, oracle, storage, utils};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionLiquidationModule:
    storage::Storage
    + oracle::OracleModule
    + liquidity::LiquidityModule
    + utils::UtilsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Allows the calling market to liquidate `borrower`.
    ///
    /// # Arguments
    /// - `collateral_market`: The market whose supply tokens will be seized.
    /// - `borrower`: The account being liquidated.
    /// - `repay_amount`: Underlying the liquidator pays in the calling market.
    ///
    /// # Errors
    /// - `ERROR_BORROWER_NOT_UNDERWATER`: The borrower has no shortfall.
    /// - `ERROR_TOO_MUCH_REPAY`: The repayment exceeds `close_factor` of the
    ///   borrower's current debt in the calling market.
    #[endpoint(liquidateBorrowAllowed)]
    fn liquidate_borrow_allowed(
        &self,
        collateral_market: ManagedAddress,
        borrower: ManagedAddress,
        repay_amount: ManagedDecimal<Self::Api, NumDecimals>,
    ) {
        let borrowed_market = self.require_caller_market();
        self.require_listed(&collateral_market);

        let mut cache = Cache::new(self);
        let liquidity = self.compute_account_liquidity(&borrower, None, &mut cache);
        require!(liquidity.has_shortfall(), ERROR_BORROWER_NOT_UNDERWATER);

        let snapshot = cache.get_cached_market(&borrowed_market);
        let asset_decimals = snapshot.params.asset_decimals;
        let position_mapper = self.market_positions(borrowed_market, borrower);
        require!(!position_mapper.is_empty(), ERROR_TOO_MUCH_REPAY);

        let position = position_mapper.get();
        let borrow_balance = self.scaled_to_original(
            &position.borrow_scaled,
            &snapshot.index.borrow_index,
            asset_decimals,
        );

        let max_close = self.rescale_half_up(
            &self.mul_half_up(&borrow_balance, &self.close_factor().get(), WAD_PRECISION),
            asset_decimals,
        );
        require!(
            self.rescale_half_up(&repay_amount, asset_decimals) <= max_close,
            ERROR_TOO_MUCH_REPAY
        );
    }

    /// Allows the calling (collateral) market to move supply tokens as part
    /// of a liquidation started in `borrowed_market`.
    #[endpoint(seizeAllowed)]
    fn seize_allowed(
        &self,
        borrowed_market: ManagedAddress,
        liquidator: ManagedAddress,
        borrower: ManagedAddress,
    ) {
        self.require_caller_market();
        self.require_listed(&borrowed_market);
        require!(liquidator != borrower, ERROR_LIQUIDATOR_IS_BORROWER);
    }

    /// Converts a repayment in `borrowed_market` into the supply tokens of
    /// `collateral_market` the liquidator receives.
    ///
    /// **Formula**:
    /// `repay * price_borrowed * incentive / price_collateral / supply_index`
    ///
    /// # Returns
    /// - Collateral supply tokens, in the collateral asset decimals.
    #[view(liquidateCalculateSeizeTokens)]
    fn liquidate_calculate_seize_tokens(
        &self,
        borrowed_market: ManagedAddress,
        collateral_market: ManagedAddress,
        repay_amount: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.require_listed(&borrowed_market);
        self.require_listed(&collateral_market);

        let mut cache = Cache::new(self);
        let borrowed = cache.get_cached_market(&borrowed_market);
        let collateral = cache.get_cached_market(&collateral_market);
        let borrowed_price = cache.get_cached_price(&borrowed.params.asset_id);
        let collateral_price = cache.get_cached_price(&collateral.params.asset_id);

        let repay_value = self.get_asset_value(&repay_amount, &borrowed_price);
        let seize_value = self.mul_half_up(
            &repay_value,
            &self.liquidation_incentive().get(),
            WAD_PRECISION,
        );
        let seize_amount = self.rescale_half_up(
            &self.div_half_up(&seize_value, &collateral_price, WAD_PRECISION),
            collateral.params.asset_decimals,
        );

        self.original_to_scaled(
            &seize_amount,
            &collateral.index.supply_index,
            collateral.params.asset_decimals,
        )
    }
}
