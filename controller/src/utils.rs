multiversx_sc::imports!();

use common_errors::{ERROR_CALLER_NOT_MARKET, ERROR_MARKET_NOT_LISTED};

use crate::storage;

#[multiversx_sc::module]
pub trait UtilsModule: storage::Storage {
    fn require_listed(&self, market: &ManagedAddress) {
        require!(self.markets().contains(market), ERROR_MARKET_NOT_LISTED);
    }

    /// Returns the caller after checking it is a listed market.
    fn require_caller_market(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.markets().contains(&caller), ERROR_CALLER_NOT_MARKET);
        caller
    }
}
