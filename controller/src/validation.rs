multiversx_sc::imports!();

use common_errors::ERROR_INSUFFICIENT_LIQUIDITY;

use crate::{cache::Cache, liquidity, oracle, positions, storage, utils};

/// Checks the markets run before risky operations.
///
/// Hooks are called synchronously by a listed market before it mutates any
/// state; a failed check reverts the whole transaction.
#[multiversx_sc::module]
pub trait ValidationModule:
    storage::Storage
    + oracle::OracleModule
    + liquidity::LiquidityModule
    + utils::UtilsModule
    + positions::account::PositionAccountModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Allows a redemption unless it leaves the redeemer with a shortfall.
    ///
    /// Supply in a market the redeemer never entered is not collateral, so
    /// redeeming it is always allowed.
    ///
    /// # Arguments
    /// - `redeemer`: The account redeeming.
    /// - `tokens`: Supply tokens being redeemed from the calling market.
    #[endpoint(redeemAllowed)]
    fn redeem_allowed(&self, redeemer: ManagedAddress, tokens: ManagedDecimal<Self::Api, NumDecimals>) {
        let market = self.require_caller_market();
        if !self.account_markets(&redeemer).contains(&market) {
            return;
        }

        let mut cache = Cache::new(self);
        let change = liquidity::HypotheticalChange {
            market,
            redeem_tokens: tokens.into_raw_units().clone(),
            borrow_amount: BigUint::zero(),
        };
        let liquidity = self.compute_account_liquidity(&redeemer, Some(&change), &mut cache);

        require!(!liquidity.has_shortfall(), ERROR_INSUFFICIENT_LIQUIDITY);
    }

    /// Allows a borrow unless it leaves the borrower with a shortfall.
    ///
    /// Enters the calling market on the borrower's behalf first, and requires
    /// the borrowed asset to have a price.
    ///
    /// # Arguments
    /// - `borrower`: The account borrowing.
    /// - `amount`: Underlying amount borrowed from the calling market.
    #[endpoint(borrowAllowed)]
    fn borrow_allowed(&self, borrower: ManagedAddress, amount: ManagedDecimal<Self::Api, NumDecimals>) {
        let market = self.require_caller_market();
        self.add_account_to_market(&market, &borrower);

        let mut cache = Cache::new(self);
        let snapshot = cache.get_cached_market(&market);
        cache.get_cached_price(&snapshot.params.asset_id);

        let change = liquidity::HypotheticalChange {
            market,
            redeem_tokens: BigUint::zero(),
            borrow_amount: amount.into_raw_units().clone(),
        };
        let liquidity = self.compute_account_liquidity(&borrower, Some(&change), &mut cache);

        require!(!liquidity.has_shortfall(), ERROR_INSUFFICIENT_LIQUIDITY);
    }
}
