use common_structs::MarketSnapshot;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Per-call view of the protocol used while valuing accounts.
///
/// Prices and market snapshots are read at most once per call and memoized,
/// so every computation in the same call sees one coherent snapshot.
pub struct Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::storage::Storage,
{
    sc_ref: &'a C,

    pub prices_cache:
        ManagedMapEncoded<C::Api, EgldOrEsdtTokenIdentifier<C::Api>, ManagedDecimal<C::Api, NumDecimals>>,
    pub market_snapshots: ManagedMapEncoded<C::Api, ManagedAddress<C::Api>, MarketSnapshot<C::Api>>,
    pub price_oracle: ManagedAddress<C::Api>,
    pub current_timestamp: u64,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::oracle::OracleModule + crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let oracle_mapper = sc_ref.price_oracle();
        let price_oracle = if oracle_mapper.is_empty() {
            ManagedAddress::zero()
        } else {
            oracle_mapper.get()
        };

        Cache {
            sc_ref,
            prices_cache: ManagedMapEncoded::new(),
            market_snapshots: ManagedMapEncoded::new(),
            price_oracle,
            current_timestamp: sc_ref.blockchain().get_block_timestamp(),
        }
    }

    /// Retrieves or caches the WAD price of an asset.
    ///
    /// # Arguments
    /// - `asset`: Underlying token of a market.
    ///
    /// # Returns
    /// - The price of one whole unit of `asset` (WAD).
    pub fn get_cached_price(
        &mut self,
        asset: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        if self.prices_cache.contains(asset) {
            return self.prices_cache.get(asset);
        }

        let price = self.sc_ref.get_asset_price(&self.price_oracle, asset);
        self.prices_cache.put(asset, &price);

        price
    }

    /// Retrieves or caches the parameters and the indexes of a market,
    /// brought forward to the current timestamp.
    pub fn get_cached_market(&mut self, market: &ManagedAddress<C::Api>) -> MarketSnapshot<C::Api> {
        if self.market_snapshots.contains(market) {
            return self.market_snapshots.get(market);
        }

        let snapshot = self.sc_ref.simulate_market(market, self.current_timestamp);
        self.market_snapshots.put(market, &snapshot);

        snapshot
    }
}
