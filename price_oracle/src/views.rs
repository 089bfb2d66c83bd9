multiversx_sc::imports!();

use common_constants::WAD_PRECISION;
use common_errors::{ERROR_ORACLE_PAUSED, ERROR_UNKNOWN_ASSET};
use common_structs::TimestampedPrice;

#[multiversx_sc::module]
pub trait ViewsModule:
    crate::storage::StorageModule + multiversx_sc_modules::pause::PauseModule
{
    /// Returns the WAD price of `asset`.
    /// Fails if the oracle is paused or the asset was never priced.
    #[view(getPrice)]
    fn get_price(&self, asset: EgldOrEsdtTokenIdentifier) -> ManagedDecimal<Self::Api, NumDecimals> {
        let feed = self.get_price_feed(asset);
        ManagedDecimal::from_raw_units(feed.price, WAD_PRECISION)
    }

    /// Returns the latest price of `asset` together with the time it was posted.
    #[view(getPriceFeed)]
    fn get_price_feed(&self, asset: EgldOrEsdtTokenIdentifier) -> TimestampedPrice<Self::Api> {
        require!(self.not_paused(), ERROR_ORACLE_PAUSED);

        let mapper = self.prices(&asset);
        require!(!mapper.is_empty(), ERROR_UNKNOWN_ASSET);

        mapper.get()
    }
}
