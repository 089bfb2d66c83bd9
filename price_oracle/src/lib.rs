#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod storage;
pub mod views;

use common_errors::{ERROR_INVALID_ASSET, ERROR_INVALID_PRICE};
use common_structs::TimestampedPrice;

#[multiversx_sc::contract]
pub trait PriceOracle:
    multiversx_sc_modules::pause::PauseModule
    + common_events::EventsModule
    + common_access::AccessModule
    + storage::StorageModule
    + views::ViewsModule
    + admin::AdminModule
{
    /// Posts the WAD price of one whole unit of `asset`.
    /// Rejected while the oracle is paused.
    #[endpoint(setPrice)]
    fn set_price(&self, asset: EgldOrEsdtTokenIdentifier, price: BigUint) {
        self.require_not_paused();
        self.caller_as_admin();

        self.set_price_unchecked(&asset, price);
    }

    /// Posts several prices at once. Any invalid entry reverts the whole batch.
    #[endpoint(setPrices)]
    fn set_prices(&self, prices: MultiValueEncoded<MultiValue2<EgldOrEsdtTokenIdentifier, BigUint>>) {
        self.require_not_paused();
        self.caller_as_admin();

        for (asset, price) in prices.into_iter().map(|entry| entry.into_tuple()) {
            self.set_price_unchecked(&asset, price);
        }
    }

    fn set_price_unchecked(&self, asset: &EgldOrEsdtTokenIdentifier, price: BigUint) {
        require!(asset.is_valid(), ERROR_INVALID_ASSET);
        require!(price > 0, ERROR_INVALID_PRICE);

        let mapper = self.prices(asset);
        let previous = if mapper.is_empty() {
            None
        } else {
            Some(mapper.get().price)
        };

        self.price_posted_event(asset, previous.as_ref(), &price);
        mapper.set(TimestampedPrice {
            price,
            timestamp: self.blockchain().get_block_timestamp(),
        });
    }
}
