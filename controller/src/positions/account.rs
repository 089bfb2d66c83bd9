use common_errors::{
    ERROR_EXIT_WITH_BORROW, ERROR_INSUFFICIENT_LIQUIDITY, ERROR_TOO_MANY_MARKETS,
};

use crate::{cache::Cache, liquidity, oracle, storage, utils};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PositionAccountModule:
    storage::Storage
    + oracle::OracleModule
    + liquidity::LiquidityModule
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Enters the caller into `markets`, so its supply there counts as
    /// collateral.
    ///
    /// Every market is validated before any is added. Markets already
    /// entered are skipped.
    ///
    /// # Errors
    /// - `ERROR_MARKET_NOT_LISTED`: Any market in the list is not listed.
    /// - `ERROR_TOO_MANY_MARKETS`: The account would exceed the maximum.
    #[endpoint(enterMarkets)]
    fn enter_markets(&self, markets: MultiValueEncoded<ManagedAddress>) {
        let account = self.blockchain().get_caller();
        let markets = markets.to_vec();

        for market in markets.iter() {
            self.require_listed(&market);
        }

        for market in markets.iter() {
            self.add_account_to_market(&market, &account);
        }
    }

    /// Removes `market` from the caller's collateral set.
    ///
    /// A no-op when the market was not entered. Refused while the account
    /// borrows in that market or when dropping the collateral would leave
    /// it with a shortfall.
    #[endpoint(exitMarket)]
    fn exit_market(&self, market: ManagedAddress) {
        let account = self.blockchain().get_caller();
        if !self.account_markets(&account).contains(&market) {
            return;
        }

        let position_mapper = self.market_positions(market.clone(), account.clone());
        let redeem_tokens = if position_mapper.is_empty() {
            BigUint::zero()
        } else {
            let position = position_mapper.get();
            require!(!position.has_borrow(), ERROR_EXIT_WITH_BORROW);
            position.supply_tokens.into_raw_units().clone()
        };

        let mut cache = Cache::new(self);
        let change = liquidity::HypotheticalChange {
            market: market.clone(),
            redeem_tokens,
            borrow_amount: BigUint::zero(),
        };
        let liquidity = self.compute_account_liquidity(&account, Some(&change), &mut cache);
        require!(!liquidity.has_shortfall(), ERROR_INSUFFICIENT_LIQUIDITY);

        self.account_markets(&account).swap_remove(&market);
        self.market_exited_event(&market, &account);
    }

    /// Adds a listed market to the account's entered set, once.
    fn add_account_to_market(&self, market: &ManagedAddress, account: &ManagedAddress) {
        let mut entered_markets = self.account_markets(account);
        if entered_markets.contains(market) {
            return;
        }

        require!(
            entered_markets.len() < self.max_entered_markets().get(),
            ERROR_TOO_MANY_MARKETS
        );

        entered_markets.insert(market.clone());
        self.market_entered_event(market, account);
    }
}
